use std::cmp::Ordering;

use snipkit_model::{FieldName, Record, SortOrder};

use super::fields::{DateLike, TextOrNumber};
use super::resolve::{resolve_date_key, resolve_text_key};
use super::strategy::{FieldSort, MixedKeyPolicy, SortStrategy};
use super::traits::SortKey;
use crate::error::Result;

/// Sort records by the case-insensitive text form of `field`.
///
/// Numbers are compared as text, so `"10"` sorts before `"2"`. A record
/// without the field sorts under the text `undefined`. Records with equal
/// keys keep their input order with the current implementation, but that
/// is not guaranteed.
pub fn sort_by_text_key<R: Record>(
    mut records: Vec<R>,
    field: impl Into<FieldName>,
    order: SortOrder,
) -> Vec<R> {
    sort_by_text_key_in_place(&mut records, field, order);
    records
}

/// In-place form of [`sort_by_text_key`]; mutates `records`.
pub fn sort_by_text_key_in_place<R: Record>(
    records: &mut [R],
    field: impl Into<FieldName>,
    order: SortOrder,
) {
    FieldSort::<TextOrNumber>::new(field, order).sort(records);
}

/// Sort records chronologically by `field`.
///
/// Native dates, millisecond numbers and text in `DD/MM/YYYY` or
/// `MM.YYYY` form are compared as instants; absent or empty values count as
/// the Unix epoch. Other text is compared as plain text, and its position
/// relative to real dates is unspecified (see [`try_sort_by_date_key`]).
pub fn sort_by_date_key<R: Record>(
    mut records: Vec<R>,
    field: impl Into<FieldName>,
    order: SortOrder,
) -> Vec<R> {
    sort_by_date_key_in_place(&mut records, field, order);
    records
}

/// In-place form of [`sort_by_date_key`]; mutates `records`.
pub fn sort_by_date_key_in_place<R: Record>(
    records: &mut [R],
    field: impl Into<FieldName>,
    order: SortOrder,
) {
    FieldSort::<DateLike>::new(field, order).sort(records);
}

/// Date sort that lets the caller decide what happens when parsed dates
/// and unparsed text meet in one sequence.
///
/// With [`MixedKeyPolicy::Reject`] such input yields
/// [`SnipkitError::MixedDateKeys`](crate::SnipkitError::MixedDateKeys) and
/// `records` is left as it was.
pub fn try_sort_by_date_key<R: Record>(
    records: &mut [R],
    field: impl Into<FieldName>,
    order: SortOrder,
    policy: MixedKeyPolicy,
) -> Result<()> {
    FieldSort::<DateLike>::new(field, order)
        .with_policy(policy)
        .try_sort(records)
}

/// Compare two records the way [`sort_by_text_key`] does.
pub fn compare_by_text_key<R: Record>(
    a: &R,
    b: &R,
    field: &str,
    order: SortOrder,
) -> Ordering {
    let a = resolve_text_key(a.field(field).as_deref());
    let b = resolve_text_key(b.field(field).as_deref());
    a.compare_with_order(&b, order)
}

/// Compare two records the way [`sort_by_date_key`] does.
pub fn compare_by_date_key<R: Record>(
    a: &R,
    b: &R,
    field: &str,
    order: SortOrder,
) -> Ordering {
    let a = resolve_date_key(a.field(field).as_deref());
    let b = resolve_date_key(b.field(field).as_deref());
    a.compare_with_order(&b, order)
}
