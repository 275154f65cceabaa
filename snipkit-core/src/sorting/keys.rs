//! Sort key types for comparing records
//!
//! Text comparisons walk UTF-16 code units rather than bytes, which matches
//! the ordering the records' originating hosts apply to strings.

use super::date_rules::epoch;
use super::traits::SortKey;
use chrono::NaiveDateTime;
use snipkit_model::UNDEFINED_TEXT;
use std::cmp::Ordering;

fn cmp_utf16(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Case-folded text form of a field
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextKey(String);

impl TextKey {
    /// Lower-case `text` and wrap it as a key.
    pub fn new(text: &str) -> Self {
        TextKey(text.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for TextKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_utf16(&self.0, &other.0)
    }
}

impl PartialOrd for TextKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for TextKey {
    // An absent field takes part in ordering under its placeholder text.
    fn missing() -> Self {
        TextKey(UNDEFINED_TEXT.to_owned())
    }
}

/// Resolved date key
///
/// Either a point in time or text that no date rule recognised. The
/// relative order of an `Instant` and an `Uncoerced` key is an artifact of
/// this type (instants first) and not a promise; callers that care should
/// sort with [`MixedKeyPolicy::Reject`](super::MixedKeyPolicy::Reject).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DateKey {
    Instant(NaiveDateTime),
    Uncoerced(String),
}

impl DateKey {
    pub fn as_instant(&self) -> Option<NaiveDateTime> {
        match self {
            DateKey::Instant(instant) => Some(*instant),
            DateKey::Uncoerced(_) => None,
        }
    }

    pub fn is_uncoerced(&self) -> bool {
        matches!(self, DateKey::Uncoerced(_))
    }
}

impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DateKey::Instant(a), DateKey::Instant(b)) => a.cmp(b),
            (DateKey::Uncoerced(a), DateKey::Uncoerced(b)) => cmp_utf16(a, b),
            (DateKey::Instant(_), DateKey::Uncoerced(_)) => Ordering::Less,
            (DateKey::Uncoerced(_), DateKey::Instant(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for DateKey {
    fn missing() -> Self {
        DateKey::Instant(epoch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use snipkit_model::SortOrder;

    fn instant(year: i32, month: u32, day: u32) -> DateKey {
        DateKey::Instant(
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn text_keys_ignore_case() {
        assert_eq!(TextKey::new("Apple"), TextKey::new("aPPLE"));
        assert!(TextKey::new("apple") < TextKey::new("Banana"));
        assert!(TextKey::new("10") < TextKey::new("2"));
    }

    #[test]
    fn text_keys_order_by_utf16_units() {
        // U+FF41 is one unit; U+1F600 is a surrogate pair starting at 0xD83D.
        let fullwidth = TextKey::new("\u{ff41}");
        let emoji = TextKey::new("\u{1f600}");
        assert!(emoji < fullwidth);
        assert!(fullwidth.as_str().as_bytes() < emoji.as_str().as_bytes());
    }

    #[test]
    fn missing_keys_use_placeholders() {
        assert_eq!(TextKey::missing().as_str(), "undefined");
        assert_eq!(DateKey::missing().as_instant(), Some(epoch()));
    }

    #[test]
    fn date_keys_order_chronologically() {
        assert!(instant(2020, 1, 15) < instant(2020, 2, 1));
        assert!(DateKey::missing() < instant(1999, 12, 31));
        assert_eq!(
            instant(2020, 1, 15)
                .compare_with_order(&instant(2020, 2, 1), SortOrder::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn uncoerced_keys_compare_as_text() {
        let a = DateKey::Uncoerced("2020-01-01".into());
        let b = DateKey::Uncoerced("Jan 1".into());
        assert!(a < b);
        assert!(a.is_uncoerced());
        assert!(instant(2030, 1, 1) < a);
    }
}
