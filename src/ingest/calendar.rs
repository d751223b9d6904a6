//! Monthly time-index assignment.
//!
//! Produces one timestamp per row at monthly frequency, anchored to the
//! start of the month (day 1, midnight UTC). The origin is either parsed
//! from the first cell of the input's index column or, when the input has
//! no index at all, a synthetic epoch-start origin.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};

use crate::error::{MilkcastError, Result};

/// Accepted date formats for the origin cell, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Synthetic origin used when the input carries no date index: epoch start.
pub fn default_origin() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()
}

/// Resolve the origin timestamp for a monthly index.
///
/// * `None` (no index column in the input) falls back to [`default_origin`].
/// * `Some(cell)` must parse under one of the accepted formats
///   (`YYYY-MM-DD`, `YYYY/MM/DD`, `DD/MM/YYYY`, or bare `YYYY-MM`); the
///   parsed date is snapped to the start of its month.
///
/// # Errors
/// [`MilkcastError::MalformedTimestamp`] when an index column exists but
/// its first cell is not a parseable date. An unparseable index is a data
/// defect worth surfacing, unlike an absent one.
pub fn infer_origin(first_index_cell: Option<&str>) -> Result<DateTime<Utc>> {
    let Some(cell) = first_index_cell else {
        return Ok(default_origin());
    };

    let cell = cell.trim();
    if let Some(date) = parse_origin_date(cell) {
        return Ok(month_start(date));
    }

    Err(MilkcastError::MalformedTimestamp(format!(
        "cannot interpret index value `{cell}` as a date \
         (expected YYYY-MM-DD, YYYY/MM/DD, DD/MM/YYYY, or YYYY-MM)"
    )))
}

/// Generate `n` month-start timestamps beginning at `origin`'s month.
///
/// The output has exactly `n` entries, one calendar month apart, with no
/// gaps and no duplicates.
pub fn monthly_index(origin: DateTime<Utc>, n: usize) -> Result<Vec<DateTime<Utc>>> {
    let start = month_start(origin.date_naive());
    (0..n)
        .map(|i| {
            start
                .checked_add_months(Months::new(i as u32))
                .ok_or_else(|| {
                    MilkcastError::MalformedTimestamp(format!(
                        "monthly index overflow at offset {i} from {start}"
                    ))
                })
        })
        .collect()
}

fn parse_origin_date(cell: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format) {
            return Some(date);
        }
    }

    // Bare year-month, e.g. "1962-01".
    if cell.len() == 7 && cell.as_bytes()[4] == b'-' {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{cell}-01"), "%Y-%m-%d") {
            return Some(date);
        }
    }

    None
}

fn month_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(date.year(), date.month(), 1, 0, 0, 0)
        .unwrap()
}
