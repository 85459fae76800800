//! Contact service layer.
//!
//! Business logic behind the REST endpoints: presence checks on create,
//! newest-first listing, and ID checks on delete.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactForm, NewContact};
use crate::repositories::ContactRepository;
use crate::sorting::{sort_contacts, SortSpec};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Create a contact from submitted form input.
    ///
    /// Only the presence of name, email and phone is enforced here.
    async fn create_contact(&self, form: ContactForm) -> ContactResult<Contact>;

    /// All contacts, newest first.
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// Delete a contact by its raw ID string, returning the parsed ID.
    async fn delete_contact(&self, raw_id: &str) -> ContactResult<ContactId>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create_contact(&self, form: ContactForm) -> ContactResult<Contact> {
        let draft = NewContact::from_form(form).inspect_err(|e| {
            warn!("Rejected contact submission: {}", e);
        })?;

        let contact = self.repository.create(draft).await?;
        info!("Created contact {}", contact.id);
        Ok(contact)
    }

    async fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        let mut contacts = self.repository.list_all().await?;
        // Equal timestamps keep most-recently-inserted first.
        contacts.reverse();
        Ok(sort_contacts(&contacts, SortSpec::default()))
    }

    async fn delete_contact(&self, raw_id: &str) -> ContactResult<ContactId> {
        let id = ContactId::parse(raw_id).map_err(|e| {
            warn!("Rejected delete: {}", e);
            ContactError::InvalidId
        })?;

        let contact = self.repository.get(&id).await?;
        self.repository.delete(&contact.id).await?;
        info!("Deleted contact {} ({})", contact.id, contact.name);
        Ok(contact.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryContactRepository;

    fn service() -> ContactServiceImpl {
        ContactServiceImpl::new(Arc::new(InMemoryContactRepository::new()))
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let result = service()
            .create_contact(ContactForm {
                name: Some("Ada".into()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ContactError::MissingRequiredFields)));
    }

    #[tokio::test]
    async fn test_create_accepts_unformatted_values() {
        let contact = service()
            .create_contact(ContactForm::new("A", "nope", "1"))
            .await
            .unwrap();
        assert_eq!(contact.email, "nope");
        assert_eq!(contact.message, "");
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let service = service();
        for name in ["first", "second", "third"] {
            service
                .create_contact(ContactForm::new(name, "x@y.z", "1234567890"))
                .await
                .unwrap();
        }

        let names: Vec<String> = service
            .list_contacts()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_delete_rejects_malformed_id() {
        let result = service().delete_contact("not-an-id").await;
        assert!(matches!(result, Err(ContactError::InvalidId)));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let result = service().delete_contact("65a1f0c2e4b0a1b2c3d4e5f6").await;
        assert!(matches!(result, Err(ContactError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_removes_contact() {
        let service = service();
        let contact = service
            .create_contact(ContactForm::new("Ada", "ada@example.com", "1234567890"))
            .await
            .unwrap();

        let deleted = service.delete_contact(contact.id.as_str()).await.unwrap();
        assert_eq!(deleted, contact.id);
        assert!(service.list_contacts().await.unwrap().is_empty());
    }
}
