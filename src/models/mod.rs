//! Data models for contacts and API payloads.

pub mod contact;
pub mod response;

pub use contact::{Contact, ContactForm, NewContact};
pub use response::{ApiResponse, DeletedContact};
