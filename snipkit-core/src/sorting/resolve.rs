//! Coercion from raw field values to typed comparison keys
//!
//! These functions are the whole of the permissive-coercion behaviour: no
//! value is ever rejected, it only lands in one key variant or another.

use chrono::{NaiveDateTime, TimeDelta};
use snipkit_model::FieldValue;

use super::date_rules::{epoch, parse_date_text};
use super::keys::{DateKey, TextKey};
use super::traits::SortKey;

/// Resolve a field into its case-folded text key.
///
/// Numbers become their decimal text, so `10` orders before `2`.
pub fn resolve_text_key(value: Option<&FieldValue>) -> TextKey {
    match value {
        Some(value) => TextKey::new(&value.text_form()),
        None => TextKey::missing(),
    }
}

/// Resolve a field into a date key.
///
/// Absent and falsy values become the epoch sentinel. Native dates are
/// taken as-is, numbers count milliseconds from the epoch and text goes
/// through the [date rules](super::date_rules::date_rules). Anything left
/// over is kept as uncoerced text.
pub fn resolve_date_key(value: Option<&FieldValue>) -> DateKey {
    let value = match value {
        Some(value) if !value.is_falsy() => value,
        _ => return DateKey::missing(),
    };

    match value {
        FieldValue::Date(instant) => DateKey::Instant(*instant),
        FieldValue::Integer(millis) => DateKey::Instant(from_millis(*millis)),
        FieldValue::Float(millis) if millis.is_infinite() => {
            DateKey::Instant(if *millis > 0.0 {
                NaiveDateTime::MAX
            } else {
                NaiveDateTime::MIN
            })
        }
        // Saturating cast; fractional milliseconds truncate.
        FieldValue::Float(millis) => {
            DateKey::Instant(from_millis(*millis as i64))
        }
        FieldValue::Bool(_) => DateKey::Instant(from_millis(1)),
        FieldValue::Text(text) => match parse_date_text(text) {
            Some(instant) => DateKey::Instant(instant),
            None => DateKey::Uncoerced(text.clone()),
        },
        other => DateKey::Uncoerced(other.text_form().into_owned()),
    }
}

fn from_millis(millis: i64) -> NaiveDateTime {
    TimeDelta::try_milliseconds(millis)
        .and_then(|offset| epoch().checked_add_signed(offset))
        .unwrap_or(if millis > 0 {
            NaiveDateTime::MAX
        } else {
            NaiveDateTime::MIN
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn text_keys_stringify_every_variant() {
        let cases = [
            (None, "undefined"),
            (Some(FieldValue::Null), "null"),
            (Some(FieldValue::Bool(true)), "true"),
            (Some(FieldValue::Integer(42)), "42"),
            (Some(FieldValue::Float(2.5)), "2.5"),
            (Some(FieldValue::from("MiXeD")), "mixed"),
            (Some(FieldValue::from(vec!["A", "B"])), "a,b"),
            (Some(FieldValue::Object(BTreeMap::new())), "[object object]"),
        ];

        for (value, expected) in cases {
            assert_eq!(resolve_text_key(value.as_ref()).as_str(), expected);
        }
    }

    #[test]
    fn falsy_dates_resolve_to_epoch() {
        for value in [
            None,
            Some(FieldValue::Null),
            Some(FieldValue::Bool(false)),
            Some(FieldValue::Integer(0)),
            Some(FieldValue::Float(f64::NAN)),
            Some(FieldValue::from("")),
        ] {
            assert_eq!(
                resolve_date_key(value.as_ref()),
                DateKey::Instant(epoch()),
                "{value:?}"
            );
        }
    }

    #[test]
    fn native_and_textual_dates_become_instants() {
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Date(ymd(2001, 9, 9)))),
            DateKey::Instant(ymd(2001, 9, 9))
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::from("15/01/2020"))),
            DateKey::Instant(ymd(2020, 1, 15))
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::from("03.2021"))),
            DateKey::Instant(ymd(2021, 3, 1))
        );
    }

    #[test]
    fn numbers_count_milliseconds_from_epoch() {
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Integer(86_400_000))),
            DateKey::Instant(ymd(1970, 1, 2))
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Float(-86_400_000.9))),
            DateKey::Instant(ymd(1969, 12, 31))
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Float(86_400_000.9))),
            DateKey::Instant(ymd(1970, 1, 2))
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Float(0.5))),
            DateKey::Instant(epoch())
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Bool(true))),
            DateKey::Instant(epoch() + TimeDelta::milliseconds(1))
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Integer(i64::MAX))),
            DateKey::Instant(NaiveDateTime::MAX)
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::Float(f64::NEG_INFINITY))),
            DateKey::Instant(NaiveDateTime::MIN)
        );
    }

    #[test]
    fn unrecognised_text_stays_uncoerced() {
        assert_eq!(
            resolve_date_key(Some(&FieldValue::from("2020-01-15"))),
            DateKey::Uncoerced("2020-01-15".into())
        );
        assert_eq!(
            resolve_date_key(Some(&FieldValue::from(vec![1, 2]))),
            DateKey::Uncoerced("1,2".into())
        );
    }
}
