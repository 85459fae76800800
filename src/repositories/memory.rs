use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, NewContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// Contact repository held entirely in process memory.
///
/// Used when no database path is configured. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, draft: NewContact) -> ContactResult<Contact> {
        let contact = Contact::new(ContactId::generate(), draft, Utc::now());
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn get(&self, id: &ContactId) -> ContactResult<Contact> {
        self.contacts
            .read()
            .await
            .iter()
            .find(|contact| &contact.id == id)
            .cloned()
            .ok_or(ContactError::NotFound)
    }

    async fn delete(&self, id: &ContactId) -> ContactResult<()> {
        let mut contacts = self.contacts.write().await;
        let position = contacts
            .iter()
            .position(|contact| &contact.id == id)
            .ok_or(ContactError::NotFound)?;
        contacts.remove(position);
        Ok(())
    }
}
