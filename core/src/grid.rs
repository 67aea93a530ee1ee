//! Calendar grid generation.
//!
//! A grid is always 6 weeks of 7 days, Monday first. It starts on the Monday
//! on or before the 1st of the anchor month and runs for 42 consecutive days,
//! so short months are padded with days from the previous month and with
//! as many following days as needed, even past the end of the next month.

use chrono::{Datelike, Duration, Months, NaiveDate};
use log::{debug, warn};
use shared::{CalendarDay, CalendarGrid, CalendarWeek, DAYS_PER_WEEK, WEEKS_PER_GRID};

use crate::normalizer::{first_of_month, normalize, same_day, same_month, week_start, IntoDay, NormalizedDate};
use crate::selection::SelectionStore;

/// Total number of cells in a grid
pub const GRID_DAYS: usize = WEEKS_PER_GRID * DAYS_PER_WEEK;

/// First day shown for the month containing `anchor`.
///
/// `None` when any of the 42 days would fall outside chrono's representable
/// range; such anchors cannot be displayed.
pub fn grid_start(anchor: NormalizedDate) -> Option<NormalizedDate> {
    let start = week_start(first_of_month(anchor))?;
    start.checked_add_signed(Duration::days(GRID_DAYS as i64 - 1))?;
    Some(start)
}

/// Nearest anchor whose grid fits in chrono's range.
///
/// Only the first and last month or two of the range lack a full window, so
/// `anchor` is returned as is everywhere else.
pub fn displayable_anchor(anchor: NormalizedDate) -> NormalizedDate {
    let mut candidate = anchor;
    for _ in 0..3 {
        if grid_start(candidate).is_some() {
            return candidate;
        }
        let step = if candidate.year() > 0 {
            candidate.checked_sub_months(Months::new(1))
        } else {
            candidate.checked_add_months(Months::new(1))
        };
        match step {
            Some(next) => candidate = next,
            None => break,
        }
    }
    candidate
}

/// Build the 6x7 grid for `anchor`, flagging `today` and the store's selection.
///
/// Pure: the same inputs always produce the same grid. Anchors at the very
/// edges of chrono's range are moved to the nearest displayable month.
pub fn generate(anchor: impl IntoDay, selected: &SelectionStore, today: NormalizedDate) -> CalendarGrid {
    let requested = normalize(anchor);
    let anchor = displayable_anchor(requested);
    if anchor != requested {
        warn!("🗓️ Anchor {} has no displayable grid, using {}", requested, anchor);
    }
    let start = grid_start(anchor).unwrap_or(anchor);

    let weeks: [CalendarWeek; WEEKS_PER_GRID] = std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let offset = (row * DAYS_PER_WEEK + col) as i64;
            let date = start
                .checked_add_signed(Duration::days(offset))
                .unwrap_or(NaiveDate::MAX);
            CalendarDay {
                date,
                is_today: same_day(date, today),
                is_selected: selected.is_selected(date),
                in_anchor_month: same_month(date, anchor),
            }
        })
    });

    debug!(
        "🗓️ Generated grid for anchor {}: {} .. {}",
        anchor,
        start,
        weeks[WEEKS_PER_GRID - 1][DAYS_PER_WEEK - 1].date
    );

    CalendarGrid { anchor, weeks }
}
