//! # Date Picker Core
//!
//! UI-agnostic logic behind a date picker widget: the 6x7 day grid for an
//! anchor month, the selected-day state, month/year navigation and panel
//! visibility. Rendering is left to the host, which reads the grid and feeds
//! user interactions back in.
//!
//! ## Architecture
//!
//! ```text
//! Host (renderer, input wiring)
//!     ↓
//! DatePicker (picker)
//!     ↓
//! NavigationController · SelectionStore · VisibilityController
//!     ↓
//! grid generation
//!     ↓
//! normalizer (UTC day-granularity dates)
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod normalizer;
pub mod picker;
pub mod selection;
pub mod visibility;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DatePickerError, Result};
pub use navigation::NavigationController;
pub use normalizer::{normalize, same_day, IntoDay, NormalizedDate};
pub use picker::{DatePicker, SelectionListener};
pub use selection::{SelectionChange, SelectionStore};
pub use visibility::{PanelCoordinator, PanelId, VisibilityController};

pub use shared::{Align, CalendarDay, CalendarGrid, DatePickerConfig, SelectionChangeEvent, SelectionMode};
