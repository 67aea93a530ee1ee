//! The date picker component.
//!
//! `DatePicker` wires the navigation, selection and visibility controllers
//! together and keeps the day grid in sync with them. The grid is rebuilt
//! from scratch after every change to the anchor or the selection, before
//! control returns to the caller, so reads never observe a stale grid.

use log::debug;
use shared::{Align, CalendarDay, CalendarGrid, DatePickerConfig, SelectionChangeEvent, SelectionMode, DAY_NAMES};

use crate::clock::{Clock, SystemClock};
use crate::grid;
use crate::navigation::NavigationController;
use crate::normalizer::{self, same_day, same_month, IntoDay, NormalizedDate};
use crate::selection::{SelectionChange, SelectionStore};
use crate::visibility::{PanelCoordinator, PanelId, VisibilityController};

/// Callback receiving every selection event
pub type SelectionListener = Box<dyn FnMut(&SelectionChangeEvent)>;

/// One date field: its day grid, selection, anchor navigation and panel
/// visibility, kept consistent with each other.
pub struct DatePicker {
    config: DatePickerConfig,
    navigation: NavigationController,
    selection: SelectionStore,
    visibility: VisibilityController,
    clock: Box<dyn Clock>,
    weeks: CalendarGrid,
    listeners: Vec<SelectionListener>,
}

impl DatePicker {
    /// Create a picker anchored on the current UTC day
    pub fn new(config: DatePickerConfig, coordinator: PanelCoordinator) -> Self {
        Self::with_clock(config, coordinator, SystemClock)
    }

    /// Create a picker whose notion of "today" comes from `clock`
    pub fn with_clock(config: DatePickerConfig, coordinator: PanelCoordinator, clock: impl Clock + 'static) -> Self {
        let today = clock.today();
        let selection = SelectionStore::new(config.selection_mode());
        let navigation = NavigationController::new(today);
        let weeks = grid::generate(navigation.anchor(), &selection, today);

        Self {
            navigation,
            visibility: VisibilityController::new(coordinator),
            clock: Box::new(clock),
            config,
            selection,
            weeks,
            listeners: Vec::new(),
        }
    }

    /// Register a callback for selection events
    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // read state

    /// The current 6x7 grid
    pub fn weeks(&self) -> &CalendarGrid {
        &self.weeks
    }

    /// Selected days in date order
    pub fn selected_dates(&self) -> Vec<CalendarDay> {
        let today = self.clock.today();
        self.selection
            .selected_dates()
            .map(|date| self.day_for(date, today))
            .collect()
    }

    pub fn current_anchor(&self) -> NormalizedDate {
        self.navigation.anchor()
    }

    pub fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn align(&self) -> Align {
        self.config.align
    }

    pub fn show_reset(&self) -> bool {
        self.config.show_reset
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Header text, e.g. "March 2021"
    pub fn month_label(&self) -> String {
        normalizer::month_label(self.current_anchor())
    }

    pub fn day_names(&self) -> &'static [&'static str; 7] {
        &DAY_NAMES
    }

    /// Value for a bound form field: the first selected day as YYYY-MM-DD
    pub fn form_value(&self) -> Option<String> {
        self.selection.selected_dates().next().map(normalizer::form_value)
    }

    pub fn is_in_anchor_month(&self, day: impl IntoDay) -> bool {
        same_month(normalizer::normalize(day), self.current_anchor())
    }

    // selection

    /// Toggle `day` and notify listeners.
    ///
    /// Returns `None` when the selection policy ignores toggles
    /// (`SelectionMode::Multiple`); nothing is emitted in that case.
    pub fn select_date(&mut self, day: impl IntoDay) -> Option<SelectionChangeEvent> {
        let change = self.selection.toggle(day)?;
        self.regenerate();
        Some(self.emit(change))
    }

    /// Clear the selection and notify listeners
    pub fn reset_date(&mut self) -> SelectionChangeEvent {
        let change = self.selection.reset();
        self.regenerate();
        self.emit(change)
    }

    /// Replace the selection with days pushed by the host. No event is
    /// emitted since the host already knows the new value.
    pub fn set_selected_dates<I, D>(&mut self, days: I)
    where
        I: IntoIterator<Item = D>,
        D: IntoDay,
    {
        self.selection.replace(days);
        self.regenerate();
    }

    // navigation

    pub fn next_month(&mut self) -> NormalizedDate {
        self.navigation.next_month();
        self.regenerate()
    }

    pub fn prev_month(&mut self) -> NormalizedDate {
        self.navigation.prev_month();
        self.regenerate()
    }

    pub fn next_year(&mut self) -> NormalizedDate {
        self.navigation.next_year();
        self.regenerate()
    }

    pub fn prev_year(&mut self) -> NormalizedDate {
        self.navigation.prev_year();
        self.regenerate()
    }

    /// Jump to January of the displayed year
    pub fn first_month(&mut self) -> NormalizedDate {
        self.navigation.first_month_of_year();
        self.regenerate()
    }

    /// Jump to December of the displayed year
    pub fn last_month(&mut self) -> NormalizedDate {
        self.navigation.last_month_of_year();
        self.regenerate()
    }

    pub fn go_to(&mut self, day: impl IntoDay) -> NormalizedDate {
        self.navigation.go_to(day);
        self.regenerate()
    }

    pub fn go_to_today(&mut self) -> NormalizedDate {
        let today = self.clock.today();
        self.go_to(today)
    }

    // visibility

    pub fn panel_id(&self) -> PanelId {
        self.visibility.id()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Flip the panel on the next coordinator tick
    pub fn toggle_calendar(&self) {
        self.visibility.toggle_open();
    }

    pub fn close_calendar(&self) -> bool {
        self.visibility.close()
    }

    pub fn close_on_outside_interaction(&self) -> bool {
        self.visibility.close_on_outside_interaction()
    }

    fn regenerate(&mut self) -> NormalizedDate {
        let anchor = self.navigation.anchor();
        self.weeks = grid::generate(anchor, &self.selection, self.clock.today());
        anchor
    }

    fn emit(&mut self, change: SelectionChange) -> SelectionChangeEvent {
        let event = match change.selected {
            Some(date) => SelectionChangeEvent::selected(self.day_for(date, self.clock.today())),
            None => SelectionChangeEvent::cleared(),
        };
        debug!("Emitting selection event to {} listener(s): {:?}", self.listeners.len(), event);
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
        event
    }

    fn day_for(&self, date: NormalizedDate, today: NormalizedDate) -> CalendarDay {
        CalendarDay {
            date,
            is_today: same_day(date, today),
            is_selected: self.selection.is_selected(date),
            in_anchor_month: same_month(date, self.current_anchor()),
        }
    }
}
