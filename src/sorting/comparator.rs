//! Contact ordering by name or creation date.

use super::collation::locale_compare;
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Attribute a contact list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    #[default]
    Date,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
        }
    }
}

/// Unrecognised keys fall back to [`SortKey::Date`].
impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name" => Self::Name,
            _ => Self::Date,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Unrecognised directions fall back to [`SortOrder::Desc`].
impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "asc" => Self::Asc,
            _ => Self::Desc,
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort key and direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// The sort state that results from the user choosing `key`.
    ///
    /// Choosing the active key flips the direction; choosing another key
    /// starts it descending.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.order.flipped())
        } else {
            Self::new(key, SortOrder::Desc)
        }
    }
}

/// Compare two contacts under `spec`.
pub fn compare_contacts(a: &Contact, b: &Contact, spec: SortSpec) -> Ordering {
    let ascending = match spec.key {
        SortKey::Name => locale_compare(&a.name, &b.name),
        SortKey::Date => a.created_at.cmp(&b.created_at),
    };
    spec.order.apply(ascending)
}

/// Return a sorted copy of `contacts`, leaving the input untouched.
///
/// The sort is stable: contacts with equal keys keep their relative order.
pub fn sort_contacts(contacts: &[Contact], spec: SortSpec) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(|a, b| compare_contacts(a, b, spec));
    sorted
}
