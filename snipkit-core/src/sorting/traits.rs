//! Core traits for keyed record sorting
//!
//! A sort call reads one field from every record, resolves it into a typed
//! comparison key once, and orders records by those keys. The traits here
//! separate "how a raw field value becomes a key" from "how keys compare".

use snipkit_model::{FieldName, FieldValue, SortOrder};

use crate::error::SnipkitError;

/// Rule set that turns raw field values into comparison keys.
///
/// Each implementor is a zero-sized marker naming one coercion scheme.
pub trait KeyResolver: Copy + Clone + Send + Sync + 'static {
    /// The type of key resolved for every record
    type Key: SortKey;

    /// Unique identifier for this scheme (used in logs)
    const ID: &'static str;

    /// Resolve the field value of one record. `None` means the field is
    /// absent from the record.
    fn resolve(value: Option<&FieldValue>) -> Self::Key;

    /// Report a pair of keys whose relative order the scheme does not
    /// define, if the sequence contains one.
    fn find_conflict(
        _field: &FieldName,
        _keys: &[Self::Key],
    ) -> Option<SnipkitError> {
        None
    }
}

/// Keys that can be compared for sorting
///
/// Every key type is totally ordered so the host sort never observes an
/// inconsistent comparator.
pub trait SortKey: Ord + Clone + Send + Sync + std::fmt::Debug {
    /// Key used when the field is absent from a record
    fn missing() -> Self;

    /// Compare two keys in the requested direction
    #[inline]
    fn compare_with_order(
        &self,
        other: &Self,
        order: SortOrder,
    ) -> std::cmp::Ordering {
        order.apply(self.cmp(other))
    }
}
