//! Anchor-date navigation by month and year.
//!
//! All moves use calendar arithmetic: the day of month is clamped when the
//! target month is shorter (Jan 31 + 1 month = Feb 28/29). Navigation is
//! unbounded within chrono's range; a move to a month whose 42-day grid
//! would leave that range is rejected and the anchor stays where it was.

use chrono::{Datelike, Months, NaiveDate};
use log::{debug, error};

use crate::grid::{displayable_anchor, grid_start};
use crate::normalizer::{normalize, IntoDay, NormalizedDate};

/// Owns the anchor date of one picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    anchor: NormalizedDate,
}

impl NavigationController {
    pub fn new(anchor: impl IntoDay) -> Self {
        Self {
            anchor: displayable_anchor(normalize(anchor)),
        }
    }

    /// The month/year currently displayed
    pub fn anchor(&self) -> NormalizedDate {
        self.anchor
    }

    pub fn next_month(&mut self) -> NormalizedDate {
        self.shift_months(1)
    }

    pub fn prev_month(&mut self) -> NormalizedDate {
        self.shift_months(-1)
    }

    pub fn next_year(&mut self) -> NormalizedDate {
        self.shift_months(12)
    }

    pub fn prev_year(&mut self) -> NormalizedDate {
        self.shift_months(-12)
    }

    /// Jump to January 1st of the anchor's year
    pub fn first_month_of_year(&mut self) -> NormalizedDate {
        let year = self.anchor.year();
        self.set(NaiveDate::from_ymd_opt(year, 1, 1), "first month of year")
    }

    /// Jump to December 31st of the anchor's year
    pub fn last_month_of_year(&mut self) -> NormalizedDate {
        let year = self.anchor.year();
        self.set(NaiveDate::from_ymd_opt(year, 12, 31), "last month of year")
    }

    /// Jump to an arbitrary day
    pub fn go_to(&mut self, day: impl IntoDay) -> NormalizedDate {
        self.set(Some(normalize(day)), "explicit date")
    }

    fn shift_months(&mut self, delta: i32) -> NormalizedDate {
        let months = Months::new(delta.unsigned_abs());
        let target = if delta >= 0 {
            self.anchor.checked_add_months(months)
        } else {
            self.anchor.checked_sub_months(months)
        };
        self.set(target, "month shift")
    }

    fn set(&mut self, target: Option<NormalizedDate>, reason: &str) -> NormalizedDate {
        match target {
            Some(date) if grid_start(date).is_none() => {
                error!("📅 Anchor {} cannot move to {} ({}): grid out of range", self.anchor, date, reason);
            }
            Some(date) => {
                debug!("📅 Anchor moved ({}): {} -> {}", reason, self.anchor, date);
                self.anchor = date;
            }
            None => {
                error!("📅 Anchor {} cannot move ({}): date out of range", self.anchor, reason);
            }
        }
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_navigation_with_year_rollover() {
        let mut nav = NavigationController::new(ymd(2025, 12, 15));
        assert_eq!(nav.next_month(), ymd(2026, 1, 15));
        assert_eq!(nav.prev_month(), ymd(2025, 12, 15));

        let mut nav = NavigationController::new(ymd(2025, 1, 15));
        assert_eq!(nav.prev_month(), ymd(2024, 12, 15));
    }

    #[test]
    fn test_month_end_is_clamped() {
        let mut nav = NavigationController::new(ymd(2021, 1, 31));
        assert_eq!(nav.next_month(), ymd(2021, 2, 28));

        let mut nav = NavigationController::new(ymd(2024, 1, 31));
        assert_eq!(nav.next_month(), ymd(2024, 2, 29));

        let mut nav = NavigationController::new(ymd(2021, 3, 31));
        assert_eq!(nav.prev_month(), ymd(2021, 2, 28));
    }

    #[test]
    fn test_year_navigation_clamps_leap_day() {
        let mut nav = NavigationController::new(ymd(2024, 2, 29));
        assert_eq!(nav.next_year(), ymd(2025, 2, 28));

        let mut nav = NavigationController::new(ymd(2024, 2, 29));
        assert_eq!(nav.prev_year(), ymd(2023, 2, 28));
    }

    #[test]
    fn test_twelve_months_is_one_year() {
        for start in [ymd(2021, 3, 15), ymd(2023, 11, 1), ymd(2024, 1, 10)] {
            let mut nav = NavigationController::new(start);
            for _ in 0..12 {
                let anchor = nav.next_month();
                assert_eq!(grid_start(anchor).unwrap().weekday(), Weekday::Mon);
            }
            assert_eq!(nav.anchor().month(), start.month());
            assert_eq!(nav.anchor().year(), start.year() + 1);
        }
    }

    #[test]
    fn test_first_and_last_month_of_year() {
        let mut nav = NavigationController::new(ymd(2021, 6, 15));
        assert_eq!(nav.first_month_of_year(), ymd(2021, 1, 1));
        assert_eq!(nav.last_month_of_year(), ymd(2021, 12, 31));
    }

    #[test]
    fn test_next_month_from_march_2021() {
        let mut nav = NavigationController::new(ymd(2021, 3, 1));
        let anchor = nav.next_month();
        assert_eq!(anchor, ymd(2021, 4, 1));
        assert_eq!(grid_start(anchor), Some(ymd(2021, 3, 29)));
    }

    #[test]
    fn test_go_to_normalizes() {
        let mut nav = NavigationController::new(ymd(2021, 3, 1));
        let target = ymd(1999, 12, 31).and_hms_opt(23, 0, 0).unwrap();
        assert_eq!(nav.go_to(target), ymd(1999, 12, 31));
    }

    #[test]
    fn test_out_of_range_leaves_anchor() {
        // the last December cannot be shown, so the anchor starts in November
        let mut nav = NavigationController::new(NaiveDate::MAX);
        let last = nav.anchor();
        assert_eq!(last.year(), NaiveDate::MAX.year());
        assert_eq!(last.month(), 11);
        assert_eq!(nav.next_month(), last);
        assert_eq!(nav.next_year(), last);
        assert_eq!(nav.last_month_of_year(), last);
        assert_eq!(nav.go_to(NaiveDate::MAX), last);

        let mut nav = NavigationController::new(NaiveDate::MIN);
        nav.prev_month();
        nav.prev_month();
        let first = nav.anchor();
        assert!(grid_start(first).is_some());
        assert_eq!(nav.prev_month(), first);
        assert_eq!(nav.prev_year(), first);
    }
}
