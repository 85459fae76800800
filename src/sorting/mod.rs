//! Contact list ordering.
//!
//! The comparator is pure; the toggle rule lives on [`SortSpec::select`] so
//! callers own the sort state.

pub mod collation;
pub mod comparator;

pub use collation::locale_compare;
pub use comparator::{compare_contacts, sort_contacts, SortKey, SortOrder, SortSpec};
