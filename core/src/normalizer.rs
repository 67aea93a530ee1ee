//! Day-granularity date handling.
//!
//! Every "today" and "selected" comparison in the picker goes through this
//! module so that time-of-day and the caller's local timezone never affect
//! which calendar day a value belongs to. The reference timezone is UTC and
//! weeks start on Monday.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{DatePickerError, Result};

/// A date with no time-of-day component
pub type NormalizedDate = NaiveDate;

/// Anything that can be reduced to a calendar day in UTC
pub trait IntoDay {
    fn into_day(self) -> NormalizedDate;
}

impl IntoDay for NaiveDate {
    fn into_day(self) -> NormalizedDate {
        self
    }
}

impl IntoDay for &NaiveDate {
    fn into_day(self) -> NormalizedDate {
        *self
    }
}

/// Naive timestamps are interpreted as UTC
impl IntoDay for NaiveDateTime {
    fn into_day(self) -> NormalizedDate {
        self.date()
    }
}

impl<Tz: TimeZone> IntoDay for DateTime<Tz> {
    fn into_day(self) -> NormalizedDate {
        self.with_timezone(&Utc).date_naive()
    }
}

impl<Tz: TimeZone> IntoDay for &DateTime<Tz> {
    fn into_day(self) -> NormalizedDate {
        self.with_timezone(&Utc).date_naive()
    }
}

impl IntoDay for &shared::CalendarDay {
    fn into_day(self) -> NormalizedDate {
        self.date
    }
}

/// Reduce a date or timestamp to its UTC calendar day
pub fn normalize(value: impl IntoDay) -> NormalizedDate {
    value.into_day()
}

/// True iff both values fall on the same UTC calendar day
pub fn same_day(a: impl IntoDay, b: impl IntoDay) -> bool {
    a.into_day() == b.into_day()
}

/// Monday on or before `date` (start of its ISO week).
///
/// `None` when that Monday precedes `NaiveDate::MIN`.
pub fn week_start(date: NormalizedDate) -> Option<NormalizedDate> {
    let offset = date.weekday().num_days_from_monday();
    date.checked_sub_signed(Duration::days(i64::from(offset)))
}

/// First calendar day of the month containing `date`
pub fn first_of_month(date: NormalizedDate) -> NormalizedDate {
    // day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// True iff both dates fall in the same month of the same year
pub fn same_month(a: NormalizedDate, b: NormalizedDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Parse a host-supplied date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, which is normalized to its
/// UTC day.
pub fn parse_day(input: &str) -> Result<NormalizedDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| normalize(timestamp))
        .map_err(|_| DatePickerError::InvalidDate(input.to_string()))
}

/// Value written into a bound form field
pub fn form_value(date: NormalizedDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// English name of the month containing `date`
pub fn month_name(date: NormalizedDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Header text for the month containing `date`, e.g. "March 2021"
pub fn month_label(date: NormalizedDate) -> String {
    format!("{} {}", month_name(date), date.year())
}
