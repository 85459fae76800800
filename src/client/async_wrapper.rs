//! Async wrapper around the synchronous ContactApiClient.
//!
//! This module provides an async interface to the synchronous client by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ContactApiClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Contact, ContactForm};
use async_trait::async_trait;
use std::sync::Arc;

/// Async contact API operations.
#[async_trait]
pub trait AsyncContactClient: Send + Sync {
    async fn get_contacts(&self) -> ClientResult<Vec<Contact>>;
    async fn create_contact(&self, form: &ContactForm) -> ClientResult<Contact>;
    async fn delete_contact(&self, id: &str) -> ClientResult<()>;
}

/// Async wrapper around the synchronous ContactApiClient.
#[derive(Clone)]
pub struct AsyncContactClientImpl {
    client: Arc<ContactApiClient>,
}

impl AsyncContactClientImpl {
    pub fn new(client: ContactApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &ContactApiClient {
        &self.client
    }
}

fn join_error(e: tokio::task::JoinError) -> ClientError {
    ClientError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncContactClient for AsyncContactClientImpl {
    async fn get_contacts(&self) -> ClientResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_contacts())
            .await
            .map_err(join_error)?
    }

    async fn create_contact(&self, form: &ContactForm) -> ClientResult<Contact> {
        let client = self.client.clone();
        let form = form.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&form))
            .await
            .map_err(join_error)?
    }

    async fn delete_contact(&self, id: &str) -> ClientResult<()> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(join_error)?
    }
}
