//! Selected-day state and the selection policy.

use std::collections::BTreeSet;

use log::{info, warn};
use shared::SelectionMode;

use crate::normalizer::{normalize, IntoDay, NormalizedDate};

/// Result of a state-changing selection operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// The newly selected day, or `None` when the selection was cleared
    pub selected: Option<NormalizedDate>,
}

/// Holds the selected days of one picker.
///
/// Days are kept sorted so range queries over the selection stay cheap.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    mode: SelectionMode,
    selected: BTreeSet<NormalizedDate>,
}

impl SelectionStore {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Day-granularity membership test
    pub fn is_selected(&self, day: impl IntoDay) -> bool {
        self.selected.contains(&normalize(day))
    }

    /// Selected days in ascending order
    pub fn selected_dates(&self) -> impl Iterator<Item = NormalizedDate> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flip the selection state of `day`.
    ///
    /// Under `SelectionMode::Single` selecting a day replaces any previous
    /// selection. `SelectionMode::Multiple` has no toggle semantics yet: the
    /// call leaves the store untouched and returns `None`.
    pub fn toggle(&mut self, day: impl IntoDay) -> Option<SelectionChange> {
        let day = normalize(day);
        match self.mode {
            SelectionMode::Single => {
                if self.selected.remove(&day) {
                    info!("Deselected {}", day);
                    Some(SelectionChange { selected: None })
                } else {
                    self.selected.clear();
                    self.selected.insert(day);
                    info!("Selected {}", day);
                    Some(SelectionChange { selected: Some(day) })
                }
            }
            SelectionMode::Multiple => {
                warn!("Ignoring toggle of {}: multiple selection is not supported yet", day);
                None
            }
        }
    }

    /// Clear every selected day, whatever the policy
    pub fn reset(&mut self) -> SelectionChange {
        if !self.selected.is_empty() {
            info!("Cleared {} selected day(s)", self.selected.len());
        }
        self.selected.clear();
        SelectionChange { selected: None }
    }

    /// Replace the selection with host-supplied days.
    ///
    /// Single mode keeps only the last day supplied.
    pub fn replace<I, D>(&mut self, days: I)
    where
        I: IntoIterator<Item = D>,
        D: IntoDay,
    {
        self.selected.clear();
        match self.mode {
            SelectionMode::Single => {
                if let Some(day) = days.into_iter().map(|day| normalize(day)).last() {
                    self.selected.insert(day);
                }
            }
            SelectionMode::Multiple => {
                self.selected.extend(days.into_iter().map(|day| normalize(day)));
            }
        }
        info!("Selection replaced, {} day(s) selected", self.selected.len());
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_toggle_twice_returns_to_empty() {
        let mut store = SelectionStore::default();
        let day = ymd(2021, 3, 9);

        let first = store.toggle(day).unwrap();
        assert_eq!(first.selected, Some(day));
        assert!(store.is_selected(day));

        let second = store.toggle(day).unwrap();
        assert_eq!(second.selected, None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_other_day_replaces_selection() {
        let mut store = SelectionStore::default();
        store.toggle(ymd(2021, 3, 9));
        let change = store.toggle(ymd(2021, 3, 10)).unwrap();

        assert_eq!(change.selected, Some(ymd(2021, 3, 10)));
        assert_eq!(store.len(), 1);
        assert!(!store.is_selected(ymd(2021, 3, 9)));
        assert!(store.is_selected(ymd(2021, 3, 10)));
    }

    #[test]
    fn test_membership_ignores_time_of_day() {
        let mut store = SelectionStore::default();
        store.toggle(ymd(2021, 3, 9).and_hms_opt(8, 0, 0).unwrap());
        assert!(store.is_selected(ymd(2021, 3, 9).and_hms_opt(22, 15, 0).unwrap()));

        // same day, different time: deselects
        let change = store.toggle(ymd(2021, 3, 9).and_hms_opt(23, 0, 0).unwrap()).unwrap();
        assert_eq!(change.selected, None);
    }

    #[test]
    fn test_reset_always_clears() {
        let mut store = SelectionStore::default();
        assert_eq!(store.reset().selected, None);

        store.toggle(ymd(2021, 3, 9));
        assert_eq!(store.reset().selected, None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_multiple_mode_toggle_is_noop() {
        let mut store = SelectionStore::new(SelectionMode::Multiple);
        assert!(store.toggle(ymd(2021, 3, 9)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_single_keeps_last() {
        let mut store = SelectionStore::default();
        store.replace([ymd(2021, 3, 9), ymd(2021, 3, 1)]);
        assert_eq!(store.selected_dates().collect::<Vec<_>>(), vec![ymd(2021, 3, 1)]);

        store.replace(Vec::<NaiveDate>::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_multiple_is_sorted_and_unique() {
        let mut store = SelectionStore::new(SelectionMode::Multiple);
        store.replace([ymd(2021, 3, 9), ymd(2021, 1, 2), ymd(2021, 3, 9)]);
        assert_eq!(
            store.selected_dates().collect::<Vec<_>>(),
            vec![ymd(2021, 1, 2), ymd(2021, 3, 9)]
        );

        store.reset();
        assert!(store.is_empty());
    }
}
