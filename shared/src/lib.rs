use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of weeks shown in every calendar grid
pub const WEEKS_PER_GRID: usize = 6;

/// Number of days in a grid row (Monday through Sunday)
pub const DAYS_PER_WEEK: usize = 7;

/// Monday-first column headers for the grid
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["M", "T", "W", "T", "F", "S", "S"];

/// A single cell of the calendar grid.
///
/// Days are recomputed on every regeneration; two days are the same day iff
/// their `date` fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day-granularity date (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
    /// Whether this day is "today" at the moment the grid was generated
    pub is_today: bool,
    /// Whether this day was selected at the moment the grid was generated
    pub is_selected: bool,
    /// Whether this day belongs to the anchor month (false for padding days)
    pub in_anchor_month: bool,
}

/// A row of the grid, Monday first
pub type CalendarWeek = [CalendarDay; DAYS_PER_WEEK];

/// The 6x7 day matrix shown for one anchor month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    /// The anchor date this grid was generated for
    pub anchor: NaiveDate,
    pub weeks: [CalendarWeek; WEEKS_PER_GRID],
}

impl CalendarGrid {
    /// Iterate over all 42 days, left-to-right and top-to-bottom
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    /// First day shown (always a Monday)
    pub fn first_day(&self) -> NaiveDate {
        self.weeks[0][0].date
    }

    /// Last day shown (always a Sunday)
    pub fn last_day(&self) -> NaiveDate {
        self.weeks[WEEKS_PER_GRID - 1][DAYS_PER_WEEK - 1].date
    }

    /// Look up the cell for a given date, if it is part of this grid
    pub fn find(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|day| day.date == date)
    }

    /// Days currently flagged as selected
    pub fn selected_days(&self) -> Vec<CalendarDay> {
        self.days().filter(|day| day.is_selected).copied().collect()
    }
}

/// Selection policy of a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one day selected at a time
    #[default]
    Single,
    /// Declared but not implemented yet: toggling is a no-op
    Multiple,
}

/// Horizontal placement hint for the picker panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Align::Left => write!(f, "left"),
            Align::Right => write!(f, "right"),
        }
    }
}

/// Host-supplied configuration for a picker instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerConfig {
    /// Selection policy flag; `true` selects `SelectionMode::Multiple`
    pub multiple: bool,
    /// Display label, cosmetic only
    pub label: String,
    /// Placement hint, cosmetic only
    pub align: Align,
    /// Whether the host should expose a reset affordance
    pub show_reset: bool,
}

impl DatePickerConfig {
    pub fn selection_mode(&self) -> SelectionMode {
        if self.multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            label: "Select a date".to_string(),
            align: Align::Left,
            show_reset: true,
        }
    }
}

/// Emitted to the host after every completed toggle or reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChangeEvent {
    /// The newly selected day, or `None` meaning "no selection"
    pub selected: Option<CalendarDay>,
    /// Value for a bound form field (YYYY-MM-DD), `None` when cleared
    pub form_value: Option<String>,
}

impl SelectionChangeEvent {
    /// Event signalling that nothing is selected
    pub fn cleared() -> Self {
        Self {
            selected: None,
            form_value: None,
        }
    }

    pub fn selected(day: CalendarDay) -> Self {
        Self {
            form_value: Some(day.date.format("%Y-%m-%d").to_string()),
            selected: Some(day),
        }
    }
}
