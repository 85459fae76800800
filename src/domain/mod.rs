//! Domain value objects and types.
//!
//! Contact IDs are validated at construction time so that a malformed ID
//! can never reach the storage layer.

pub mod contact_id;
pub mod errors;

pub use contact_id::ContactId;
pub use errors::ValidationError;
