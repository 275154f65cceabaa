//! Field names and the loosely typed values records carry.
//!
//! Records come from sources with no schema (parsed JSON, ad hoc maps), so a
//! field can hold anything. [`FieldValue`] models that set explicitly, and the
//! coercion helpers here reproduce the text form and truthiness rules of the
//! dynamic hosts these records usually originate from.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;

/// Text form of a field that is not present on a record.
pub const UNDEFINED_TEXT: &str = "undefined";

/// Text form of an opaque nested mapping.
const OBJECT_TEXT: &str = "[object Object]";

/// Name of the single field a sort call reads from every record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        FieldName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldName {
    fn from(value: &str) -> Self {
        FieldName(value.to_owned())
    }
}

impl From<String> for FieldName {
    fn from(value: String) -> Self {
        FieldName(value)
    }
}

impl From<&FieldName> for FieldName {
    fn from(value: &FieldName) -> Self {
        value.clone()
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single field value as found on a record.
///
/// `Date` is a naive local calendar value; no time zone is attached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDateTime),
    List(Vec<FieldValue>),
    Object(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Whether the value counts as "empty" for defaulting purposes:
    /// null, `false`, zero, NaN and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Bool(value) => !value,
            FieldValue::Integer(value) => *value == 0,
            FieldValue::Float(value) => *value == 0.0 || value.is_nan(),
            FieldValue::Text(value) => value.is_empty(),
            FieldValue::Date(_)
            | FieldValue::List(_)
            | FieldValue::Object(_) => false,
        }
    }

    /// Render the value the way a dynamic host stringifies it.
    ///
    /// Numbers use their shortest round-trip decimal form (`10`, `1.5`,
    /// `1e+21`), lists join their elements with `,` and nested mappings
    /// collapse to `[object Object]`.
    ///
    /// Dates render as `Www Mmm DD YYYY HH:MM:SS` with no zone suffix: the
    /// value is naive, so the `GMT+hhmm (Zone Name)` tail a host appends is
    /// left off.
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed("null"),
            FieldValue::Bool(true) => Cow::Borrowed("true"),
            FieldValue::Bool(false) => Cow::Borrowed("false"),
            FieldValue::Integer(value) => Cow::Owned(value.to_string()),
            FieldValue::Float(value) => Cow::Owned(format_number(*value)),
            FieldValue::Text(value) => Cow::Borrowed(value.as_str()),
            FieldValue::Date(value) => {
                Cow::Owned(value.format("%a %b %d %Y %H:%M:%S").to_string())
            }
            FieldValue::List(items) => {
                let parts: Vec<Cow<'_, str>> = items
                    .iter()
                    .map(|item| match item {
                        FieldValue::Null => Cow::Borrowed(""),
                        other => other.text_form(),
                    })
                    .collect();
                Cow::Owned(parts.join(","))
            }
            FieldValue::Object(_) => Cow::Borrowed(OBJECT_TEXT),
        }
    }
}

/// Text form of a possibly absent field.
pub fn text_form_of(value: Option<&FieldValue>) -> Cow<'_, str> {
    match value {
        Some(value) => value.text_form(),
        None => Cow::Borrowed(UNDEFINED_TEXT),
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    // Covers -0 as well.
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    // Exponent form always carries an explicit sign.
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Date(value)
    }
}

impl From<chrono::NaiveDate> for FieldValue {
    fn from(value: chrono::NaiveDate) -> Self {
        FieldValue::Date(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        FieldValue::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "serde")]
impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(value) => FieldValue::Bool(*value),
            Value::Number(number) => match number.as_i64() {
                Some(value) => FieldValue::Integer(value),
                None => FieldValue::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(value) => FieldValue::Text(value.clone()),
            Value::Array(items) => {
                FieldValue::List(items.iter().map(FieldValue::from).collect())
            }
            Value::Object(map) => FieldValue::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), FieldValue::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::from(&value)
    }
}
