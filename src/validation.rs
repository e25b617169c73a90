//! Advisory check on the shape of a corrected deadline.
//!
//! The model is asked for `MM/DD/YYYY` (or a start/end pair) but may answer
//! anything. This module only reports what it sees; it never rewrites a
//! [`VerificationResult`](crate::data_models::VerificationResult).

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
    Unrecognized,
}

fn parse_date(candidate: &str) -> Option<NaiveDate> {
    // chrono accepts a 2-digit year for %Y; insist on four.
    let year = candidate.rsplit('/').next()?;
    if year.len() != 4 {
        return None;
    }
    NaiveDate::parse_from_str(candidate, DATE_FORMAT).ok()
}

/// Classifies an answer as one date, a start/end range, or something else.
///
/// Dates are picked out of the text, so `"03/01/2025 - 03/31/2025"` and
/// `"From 03/01/2025 to 03/31/2025"` are both ranges. More than two dates, or
/// a range whose end precedes its start, is `Unrecognized`.
pub fn check_date_format(answer: &str) -> DateFormat {
    let dates: Vec<NaiveDate> = answer
        .split(|c: char| !(c.is_ascii_digit() || c == '/'))
        .filter(|token| !token.is_empty())
        .filter_map(parse_date)
        .collect();

    match dates.as_slice() {
        [single] => DateFormat::Single(*single),
        [start, end] if start <= end => DateFormat::Range(*start, *end),
        _ => DateFormat::Unrecognized,
    }
}
