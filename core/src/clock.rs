use chrono::{NaiveDate, Utc};

use crate::normalizer::{normalize, NormalizedDate};

/// Source of "today" for grid generation
pub trait Clock {
    fn today(&self) -> NormalizedDate;
}

/// Wall clock, normalized to the current UTC day
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NormalizedDate {
        normalize(Utc::now())
    }
}

/// A clock pinned to a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NormalizedDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }

    #[test]
    fn test_system_clock_matches_utc_day() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }
}
