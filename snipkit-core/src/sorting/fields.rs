//! Key resolver markers
//!
//! These zero-sized types select how a field is coerced before comparison.

use snipkit_model::{FieldName, FieldValue};

use super::keys::{DateKey, TextKey};
use super::resolve::{resolve_date_key, resolve_text_key};
use super::traits::KeyResolver;
use crate::error::SnipkitError;

/// Compare the field's text form, case-insensitively
#[derive(Copy, Clone, Debug, Default)]
pub struct TextOrNumber;

impl KeyResolver for TextOrNumber {
    type Key = TextKey;
    const ID: &'static str = "text_or_number";

    fn resolve(value: Option<&FieldValue>) -> TextKey {
        resolve_text_key(value)
    }
}

/// Compare the field chronologically
#[derive(Copy, Clone, Debug, Default)]
pub struct DateLike;

impl KeyResolver for DateLike {
    type Key = DateKey;
    const ID: &'static str = "date";

    fn resolve(value: Option<&FieldValue>) -> DateKey {
        resolve_date_key(value)
    }

    fn find_conflict(
        field: &FieldName,
        keys: &[DateKey],
    ) -> Option<SnipkitError> {
        let instant = keys.iter().find_map(DateKey::as_instant)?;
        let text = keys.iter().find_map(|key| match key {
            DateKey::Uncoerced(text) => Some(text.clone()),
            DateKey::Instant(_) => None,
        })?;

        Some(SnipkitError::MixedDateKeys {
            field: field.clone(),
            instant,
            text,
        })
    }
}
