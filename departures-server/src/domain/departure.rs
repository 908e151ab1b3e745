//! Departure time handling.
//!
//! The predictions provider emits departure times as ISO-8601 strings
//! carrying the stop's local UTC offset. This module parses them into a
//! comparable temporal value and renders the display form consumers rely on.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// A single upcoming departure, parsed from a provider timestamp.
///
/// Ordering compares instants, so departures with different UTC offsets
/// still sort chronologically.
///
/// # Examples
///
/// ```
/// use departures_server::domain::Departure;
///
/// let departure = Departure::parse("2024-06-05T17:42:10Z").unwrap();
/// assert_eq!(departure.to_string(), "Wednesday, June 5th 2024, 5:42:10 pm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Departure {
    when: DateTime<FixedOffset>,
}

impl Departure {
    /// Parse an ISO-8601 timestamp, keeping its embedded UTC offset.
    ///
    /// The offset is preserved so the rendered string shows the time as the
    /// provider expressed it (the provider emits stop-local offsets).
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(|when| Self { when })
    }

    /// The parsed timestamp.
    pub fn when(&self) -> DateTime<FixedOffset> {
        self.when
    }
}

impl fmt::Display for Departure {
    /// Renders e.g. `"Wednesday, June 5th 2024, 5:42:10 pm"`.
    ///
    /// Day-of-week, full month name with ordinal day, 4-digit year, 12-hour
    /// clock with seconds and a lowercase am/pm marker. This exact shape is
    /// a compatibility contract for consumers of the output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.when.day();
        let (pm, hour) = self.when.hour12();
        write!(
            f,
            "{}, {} {}{} {}, {}:{:02}:{:02} {}",
            self.when.format("%A"),
            self.when.format("%B"),
            day,
            ordinal_suffix(day),
            self.when.year(),
            hour,
            self.when.minute(),
            self.when.second(),
            if pm { "pm" } else { "am" }
        )
    }
}

/// English ordinal suffix for a day of the month.
fn ordinal_suffix(day: u32) -> &'static str {
    // 11th-13th are irregular
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
