//! Textual date encodings recognised by the date key resolver
//!
//! Rules are tried in order; the first whose pattern matches the whole text
//! parses it. Text no rule matches stays uncoerced. Dates are built the
//! lenient way the originating hosts build them: months and days outside
//! their range roll over into neighbouring months and years, and years
//! `0`-`99` mean `1900`-`1999`.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The earliest-instant sentinel used for absent or empty date fields.
pub fn epoch() -> NaiveDateTime {
    // `NaiveDateTime::default()` is 1970-01-01T00:00:00.
    NaiveDateTime::default()
}

/// One textual date encoding and how to read it.
#[derive(Debug)]
pub struct DateRule {
    /// Human readable shape, e.g. `DD/MM/YYYY`
    pub name: &'static str,
    pattern: Regex,
    parse: fn(&Captures<'_>) -> Option<NaiveDateTime>,
}

impl DateRule {
    /// Parse `text` if it matches this rule's pattern in full.
    pub fn apply(&self, text: &str) -> Option<NaiveDateTime> {
        self.pattern
            .captures(text)
            .and_then(|captures| (self.parse)(&captures))
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

static DATE_RULES: Lazy<[DateRule; 2]> = Lazy::new(|| {
    [
        DateRule {
            name: "DD/MM/YYYY",
            pattern: Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$")
                .expect("day/month/year regex should compile"),
            parse: parse_day_month_year,
        },
        DateRule {
            name: "MM.YYYY",
            pattern: Regex::new(r"^([0-9]{2})\.([0-9]{4})$")
                .expect("month.year regex should compile"),
            parse: parse_month_year,
        },
    ]
});

/// Recognised encodings in priority order.
pub fn date_rules() -> &'static [DateRule] {
    DATE_RULES.as_slice()
}

/// Parse `text` with the first matching rule.
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    date_rules().iter().find_map(|rule| rule.apply(text))
}

fn parse_day_month_year(captures: &Captures<'_>) -> Option<NaiveDateTime> {
    local_midnight(
        capture_number(captures, 3)?,
        capture_number(captures, 2)? - 1,
        capture_number(captures, 1)?,
    )
}

fn parse_month_year(captures: &Captures<'_>) -> Option<NaiveDateTime> {
    local_midnight(
        capture_number(captures, 2)?,
        capture_number(captures, 1)? - 1,
        1,
    )
}

fn capture_number(captures: &Captures<'_>, index: usize) -> Option<i64> {
    captures.get(index)?.as_str().parse().ok()
}

/// Midnight of `day` in the zero-based month `month_index` of `year`.
///
/// Out-of-range months and days carry into adjacent months and years
/// instead of failing; `None` only when the result leaves chrono's range.
pub fn local_midnight(
    year: i64,
    month_index: i64,
    day: i64,
) -> Option<NaiveDateTime> {
    let year = if (0..=99).contains(&year) {
        1900 + year
    } else {
        year
    };
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;

    let first_of_month =
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    let date = first_of_month
        .checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)?;
    date.and_hms_opt(0, 0, 0)
}
