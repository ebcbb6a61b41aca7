//! Week date helpers.
//!
//! Every week of the horizon carries one calendar date, stored as a
//! [`NaiveDate`] and serialized as `YYYY-MM-DD`. Generation spaces them
//! seven days apart from the start date; edits may later move any one.

use chrono::{Days, NaiveDate};

use crate::error::RotaError;

/// Date format used on the input boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates for `weeks` consecutive weeks starting at `start`.
///
/// Saturates at [`NaiveDate::MAX`] instead of overflowing.
///
/// ```
/// use chrono::NaiveDate;
/// use u_rota::models::week_dates;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let dates = week_dates(start, 3);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// ```
pub fn week_dates(start: NaiveDate, weeks: usize) -> Vec<NaiveDate> {
    (0..weeks).map(|w| week_date(start, w)).collect()
}

/// Date of week `week_index` counted from `start`.
///
/// Saturates at [`NaiveDate::MAX`] instead of overflowing.
pub fn week_date(start: NaiveDate, week_index: usize) -> NaiveDate {
    (week_index as u64)
        .checked_mul(7)
        .and_then(|days| start.checked_add_days(Days::new(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, RotaError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        RotaError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Formats a date with its short weekday, e.g. `2024-01-01 (Mon)`.
pub fn format_date_with_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d (%a)").to_string()
}
