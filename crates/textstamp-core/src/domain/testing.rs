//! Shared test fixtures.

use chrono::{NaiveDate, NaiveDateTime};

/// Local date-time from its parts.
pub(crate) fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .unwrap()
}
