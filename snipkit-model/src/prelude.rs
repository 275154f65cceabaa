//! Flat import surface for callers that only sort and stringify records.

pub use super::field::{FieldName, FieldValue, text_form_of};
pub use super::order::SortOrder;
pub use super::record::Record;
