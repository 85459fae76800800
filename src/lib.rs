//! Contact Manager - a small contact book with a REST backend.
//!
//! Contacts (name, email, phone, optional message) are created, listed and
//! deleted through a JSON API. Form validation and list sorting are pure
//! functions shared by any front end.
//!
//! # Architecture
//!
//! - **validation**: Per-field validators and whole-form aggregation
//! - **sorting**: Contact comparator, sort state, and name collation
//! - **domain**: Contact ID value object
//! - **models**: Contacts, form input, and the API response envelope
//! - **repositories**: In-memory and SQLite contact storage
//! - **services**: Contact business rules behind the API
//! - **server**: axum HTTP server
//! - **client**: HTTP client for the API
//! - **app**: Form and contact list state for front ends
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod sorting;
pub mod validation;

pub use app::{ContactBook, ContactFormState, Notice, NoticeKind};
pub use client::{AsyncContactClient, AsyncContactClientImpl, ContactApiClient};
pub use config::Config;
pub use domain::ContactId;
pub use error::{ClientError, ConfigError, ContactError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ApiResponse, Contact, ContactForm, NewContact};
pub use repositories::{ContactRepository, InMemoryContactRepository, SqliteContactRepository};
pub use server::{build_router, run_server, AppState};
pub use services::{ContactService, ContactServiceImpl};
pub use sorting::{compare_contacts, sort_contacts, SortKey, SortOrder, SortSpec};
pub use validation::{validate_contact_form, FieldErrors, FormField, ValidationResult};
