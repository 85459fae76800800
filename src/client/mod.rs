//! HTTP client for the contact REST API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client unwraps the `{ success, data }`
//! envelope and surfaces server-supplied failure messages.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, AsyncContactClientImpl};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ApiResponse, Contact, ContactForm};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the contact REST API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactApiClient {
    /// Base URL for the API, e.g. `http://localhost:5000/api`
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactApiClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a client with a custom base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url.into(), Duration::from_secs(10))
    }

    fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a request, recording timing and mapping failures.
    fn send(
        &self,
        request: ureq::Request,
        body: Option<&serde_json::Value>,
    ) -> ClientResult<ureq::Response> {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let timer = HttpTimer::new(self.metrics.clone());

        let result = match body {
            Some(body) => request
                .set("Content-Type", "application/json")
                .send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                tracing::debug!("{} {} - {}", method, url, response.status());
                timer.complete();
                Ok(response)
            }
            Err(e) => {
                timer.complete_with_error();
                let error = Self::map_error(e);
                tracing::error!("{} {} - Error: {}", method, url, error);
                Err(error)
            }
        }
    }

    /// Read a response body as an API envelope.
    fn read_envelope<T: DeserializeOwned>(response: ureq::Response) -> ClientResult<ApiResponse<T>> {
        let body = response
            .into_string()
            .map_err(|e| ClientError::HttpError(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Map a ureq error to a ClientError.
    fn map_error(error: ureq::Error) -> ClientError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
                    .ok()
                    .and_then(|envelope| envelope.message)
                    .unwrap_or(body);

                match code {
                    400 => ClientError::InvalidRequest(message),
                    404 => ClientError::NotFound(message),
                    _ => ClientError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ClientError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ClientError::Timeout
                } else {
                    ClientError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch every contact, newest first.
    pub fn get_contacts(&self) -> ClientResult<Vec<Contact>> {
        let request = self.agent.get(&self.build_url("/contacts"));
        let response = self.send(request, None)?;
        let contacts: Vec<Contact> = Self::read_envelope(response)?.data.unwrap_or_default();

        self.metrics.record_contacts_fetched(contacts.len());
        Ok(contacts)
    }

    /// Submit a new contact and return the stored record.
    pub fn create_contact(&self, form: &ContactForm) -> ClientResult<Contact> {
        let body = serde_json::to_value(form)?;
        let request = self.agent.post(&self.build_url("/contacts"));
        let response = self.send(request, Some(&body))?;

        let contact = Self::read_envelope::<Contact>(response)?
            .data
            .ok_or_else(|| ClientError::HttpError("Missing data in API response".to_string()))?;

        self.metrics.record_contact_created();
        Ok(contact)
    }

    /// Delete a contact by ID.
    pub fn delete_contact(&self, contact_id: &str) -> ClientResult<()> {
        let path = format!("/contacts/{}", urlencoding::encode(contact_id));
        let request = self.agent.delete(&self.build_url(&path));
        self.send(request, None)?;

        self.metrics.record_contact_deleted();
        Ok(())
    }
}
