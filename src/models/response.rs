//! JSON envelope shared by every REST API response.

use serde::{Deserialize, Serialize};

/// Response body wrapper: `{ success, message?, count?, data?, error? }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Human-readable outcome or failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Number of items in `data` (list endpoints only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Response payload
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Underlying error detail for server failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an item count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl ApiResponse<()> {
    /// Failed response with a message and no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error: None,
        }
    }

    /// Attach the underlying error detail.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Payload returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedContact {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_omits_empty_fields() {
        let body = ApiResponse::ok(vec![1, 2]).with_count(2);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, json!({"success": true, "count": 2, "data": [1, 2]}));
    }

    #[test]
    fn test_failure_envelope() {
        let body = ApiResponse::failure("Server error").with_error("disk full");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            json!({"success": false, "message": "Server error", "error": "disk full"})
        );
    }

    #[test]
    fn test_envelope_deserializes_without_data() {
        let body: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": false, "message": "Contact not found"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("Contact not found"));
        assert!(body.data.is_none());
    }
}
