use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use contact_manager::client::AsyncContactClient;
use contact_manager::domain::ContactId;
use contact_manager::error::{ClientError, ClientResult};
use contact_manager::models::{Contact, ContactForm, NewContact};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock API client for testing front-end state.
///
/// Serves a fixed contact list, hands out increasing creation times, and
/// can be told to fail the next call with a given error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactClient {
    contacts: Arc<Mutex<Vec<Contact>>>,
    next_error: Arc<Mutex<Option<ClientError>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    clock: Arc<Mutex<i64>>,
}

#[allow(dead_code)]
impl MockContactClient {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(Mutex::new(1_700_000_000)),
            ..Default::default()
        }
    }

    /// Seed a contact created at `created_secs` (Unix seconds).
    pub fn seed(&self, name: &str, created_secs: i64) -> Contact {
        let contact = Contact::new(
            ContactId::generate(),
            NewContact {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "123-456-7890".to_string(),
                message: String::new(),
            },
            Utc.timestamp_opt(created_secs, 0).unwrap(),
        );
        self.contacts.lock().unwrap().push(contact.clone());
        contact
    }

    /// Fail the next call with `error`.
    pub fn fail_next(&self, error: ClientError) {
        *self.next_error.lock().unwrap() = Some(error);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> ClientResult<()> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;

        match self.next_error.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AsyncContactClient for MockContactClient {
    async fn get_contacts(&self) -> ClientResult<Vec<Contact>> {
        self.track_call("get_contacts")?;
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn create_contact(&self, form: &ContactForm) -> ClientResult<Contact> {
        self.track_call("create_contact")?;

        let created_secs = {
            let mut clock = self.clock.lock().unwrap();
            *clock += 60;
            *clock
        };

        let draft = NewContact {
            name: form.name.clone().unwrap_or_default(),
            email: form.email.clone().unwrap_or_default(),
            phone: form.phone.clone().unwrap_or_default(),
            message: form.message.clone().unwrap_or_default(),
        };
        let contact = Contact::new(
            ContactId::generate(),
            draft,
            Utc.timestamp_opt(created_secs, 0).unwrap(),
        );
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn delete_contact(&self, id: &str) -> ClientResult<()> {
        self.track_call("delete_contact")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        // The server lowercases ids before lookup.
        contacts.retain(|c| !c.id.as_str().eq_ignore_ascii_case(id));
        if contacts.len() == before {
            return Err(ClientError::NotFound("Contact not found".to_string()));
        }
        Ok(())
    }
}
