//! Error types for the Contact Manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are not errors; see [`crate::validation`].

use thiserror::Error;

/// Errors raised by the contact service and its storage backends.
#[derive(Error, Debug)]
pub enum ContactError {
    /// One of name, email or phone was absent or blank
    #[error("Please provide name, email, and phone")]
    MissingRequiredFields,

    /// Request body could not be interpreted
    #[error("{0}")]
    InvalidRequest(String),

    /// Contact ID is not a well-formed object id
    #[error("Invalid contact ID")]
    InvalidId,

    /// No contact with the given ID exists
    #[error("Contact not found")]
    NotFound,

    /// SQLite backend failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Generic storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactError {
    /// HTTP status code the transport layer answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingRequiredFields | Self::InvalidRequest(_) | Self::InvalidId => 400,
            Self::NotFound => 404,
            Self::Database(_) | Self::Storage(_) => 500,
        }
    }

    /// Whether this error is the server's fault rather than the caller's.
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

/// Errors that can occur when talking to the contact REST API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// API rejected the request (status 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found (status 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl ClientError {
    /// The human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ApiError { message, .. } | Self::InvalidRequest(message) | Self::NotFound(message)
                if !message.is_empty() =>
            {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
