//! Date context for verbose announcements.
//!
//! Produces the leading clause "February the 14th of 2019 is Thursday and",
//! which the phrase composer joins onto the time phrase. Kept separate from
//! the time formatter so it can be tested (and swapped out) on its own.

use chrono::{Datelike, NaiveDate};

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Spoken date clause, e.g. "March the 1st of 2019 is Friday and".
pub fn date_context(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} the {}{} of {} is {} and",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year(),
        date.format("%A"),
    )
}
