//! Client-side application state.
//!
//! Holds what a contact manager front end keeps between renders: the form
//! being filled in and the fetched contact list with its sort order.

mod book;
mod form;

pub use book::{ContactBook, Notice, NoticeKind};
pub use form::ContactFormState;
