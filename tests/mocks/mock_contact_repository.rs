use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contact_manager::domain::ContactId;
use contact_manager::error::{ContactError, ContactResult};
use contact_manager::models::{Contact, NewContact};
use contact_manager::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in insertion order, lets tests pin creation timestamps,
/// can be switched into a failing mode, and tracks method calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact with a fixed creation time.
    pub fn add_contact(&self, name: &str, created_at: DateTime<Utc>) -> Contact {
        let contact = Contact::new(
            ContactId::generate(),
            NewContact {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "123-456-7890".to_string(),
                message: String::new(),
            },
            created_at,
        );
        self.contacts.lock().unwrap().push(contact.clone());
        contact
    }

    /// Make every subsequent call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> ContactResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if *self.failing.lock().unwrap() {
            return Err(ContactError::Storage("mock storage offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, draft: NewContact) -> ContactResult<Contact> {
        self.track_call("create")?;

        let contact = Contact::new(ContactId::generate(), draft, Utc::now());
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        self.track_call("list_all")?;
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn get(&self, id: &ContactId) -> ContactResult<Contact> {
        self.track_call("get")?;

        self.contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(ContactError::NotFound)
    }

    async fn delete(&self, id: &ContactId) -> ContactResult<()> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);
        if contacts.len() == before {
            return Err(ContactError::NotFound);
        }
        Ok(())
    }
}
