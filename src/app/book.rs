//! Client-side contact list state.

use super::form::ContactFormState;
use crate::client::AsyncContactClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Contact, ContactForm};
use crate::sorting::{sort_contacts, SortKey, SortSpec};
use std::sync::Arc;

/// Kind of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// The contact list as the user sees it, kept in sync with the API.
pub struct ContactBook {
    client: Arc<dyn AsyncContactClient>,
    contacts: Vec<Contact>,
    sort: SortSpec,
    loading: bool,
    error: Option<String>,
    notice: Option<Notice>,
}

impl ContactBook {
    pub fn new(client: Arc<dyn AsyncContactClient>) -> Self {
        Self {
            client,
            contacts: Vec::new(),
            sort: SortSpec::default(),
            loading: false,
            error: None,
            notice: None,
        }
    }

    /// Contacts in the order the server and local edits left them.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts ordered by the active sort spec, for display.
    pub fn sorted_contacts(&self) -> Vec<Contact> {
        sort_contacts(&self.contacts, self.sort)
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed operation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            message: message.into(),
            kind,
        });
    }

    /// Record a failure, preferring the server's own message.
    fn fail(&mut self, err: &ClientError, fallback: &str) -> String {
        let message = err.server_message().unwrap_or(fallback).to_string();
        tracing::error!("{}: {}", fallback, err);
        self.error = Some(message.clone());
        message
    }

    /// Replace the list with the server's contacts.
    pub async fn fetch(&mut self) -> ClientResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.client.get_contacts().await;
        self.loading = false;

        match result {
            Ok(contacts) => {
                self.contacts = contacts;
                Ok(())
            }
            Err(e) => {
                self.fail(&e, "Failed to fetch contacts");
                self.notify("Failed to fetch contacts", NoticeKind::Error);
                Err(e)
            }
        }
    }

    /// Create a contact and show it at the top of the list.
    pub async fn add(&mut self, form: &ContactForm) -> ClientResult<Contact> {
        self.loading = true;
        self.error = None;
        let result = self.client.create_contact(form).await;
        self.loading = false;

        match result {
            Ok(contact) => {
                self.contacts.insert(0, contact.clone());
                self.notify("Contact added successfully!", NoticeKind::Success);
                Ok(contact)
            }
            Err(e) => {
                let message = self.fail(&e, "Failed to add contact");
                self.notify(message, NoticeKind::Error);
                Err(e)
            }
        }
    }

    /// Delete a contact and drop it from the list.
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        self.loading = true;
        self.error = None;
        let result = self.client.delete_contact(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.contacts
                    .retain(|contact| !contact.id.as_str().eq_ignore_ascii_case(id));
                self.notify("Contact deleted successfully!", NoticeKind::Success);
                Ok(())
            }
            Err(e) => {
                let message = self.fail(&e, "Failed to delete contact");
                self.notify(message, NoticeKind::Error);
                Err(e)
            }
        }
    }

    /// Apply the user's choice of sort key.
    pub fn select_sort(&mut self, key: SortKey) -> SortSpec {
        self.sort = self.sort.select(key);
        self.sort
    }

    /// Validate and submit `form`, resetting it once the contact is stored.
    ///
    /// Returns `true` when a contact was created.
    pub async fn submit_form(&mut self, form: &mut ContactFormState) -> bool {
        let Some(data) = form.submit() else {
            return false;
        };

        match self.add(&data).await {
            Ok(_) => {
                form.reset();
                true
            }
            Err(_) => false,
        }
    }
}
