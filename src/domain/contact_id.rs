//! ContactId value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of hex characters in a contact ID (12 bytes).
pub const CONTACT_ID_LEN: usize = 24;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

fn startup_nanos() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0)
}

/// Five bytes fixed for the lifetime of the process.
static PROCESS_UNIQUE: Lazy<[u8; 5]> = Lazy::new(|| {
    let mixed = (u64::from(std::process::id()) << 32) ^ u64::from(startup_nanos());
    let mixed = mixed.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let bytes = mixed.to_be_bytes();
    [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]
});

static COUNTER: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(startup_nanos() & COUNTER_MASK));

/// A type-safe wrapper for contact IDs.
///
/// IDs use the document-store object id layout: 12 bytes rendered as
/// 24 lowercase hex characters (4-byte seconds timestamp, 5 process-unique
/// bytes, 3-byte counter).
///
/// # Example
///
/// ```
/// use contact_manager::domain::ContactId;
///
/// let id = ContactId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
/// assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// assert!(ContactId::parse("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh, process-unique ID.
    pub fn generate() -> Self {
        let seconds = chrono::Utc::now().timestamp() as u32;
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        Self(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    /// Parse an ID supplied by a caller.
    ///
    /// Uppercase hex is accepted and normalised to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` for an empty string and
    /// `ValidationError::MalformedId` for anything that is not 24 hex characters.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if id.len() != CONTACT_ID_LEN || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::MalformedId(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
