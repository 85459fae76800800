use crate::domain::ContactId;
use crate::error::ContactResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (in-memory, SQLite, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a new contact, assigning its ID and creation time.
    async fn create(&self, draft: NewContact) -> ContactResult<Contact>;

    /// Every stored contact, in insertion order.
    async fn list_all(&self) -> ContactResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    ///
    /// Returns `ContactError::NotFound` when no such contact exists.
    async fn get(&self, id: &ContactId) -> ContactResult<Contact>;

    /// Delete a contact.
    ///
    /// Returns `ContactError::NotFound` when no such contact exists.
    async fn delete(&self, id: &ContactId) -> ContactResult<()>;
}
