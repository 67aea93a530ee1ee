//! # Panel Visibility
//!
//! Open/closed state of picker panels.
//!
//! ## Responsibilities:
//! - At most one panel open per interaction context
//! - Closing on interactions outside the panel
//! - Deferring "open" by one tick so the interaction that opened a panel is
//!   not also treated as an outside interaction that closes it
//!
//! ## Ownership:
//! The host owns a `PanelCoordinator` and hands a clone of it to every picker
//! it creates. The coordinator records which panel is open and queues
//! deferred toggles; the host drains that queue once the current
//! interaction's notifications have been delivered.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use log::{debug, info};
use uuid::Uuid;

/// Identity of a picker panel within a coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(Uuid);

impl PanelId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel::{}", self.0)
    }
}

#[derive(Debug, Default)]
struct CoordinatorState {
    open: Option<PanelId>,
    deferred: VecDeque<PanelId>,
}

/// Host-owned record of the open panel and the deferred toggle queue.
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct PanelCoordinator {
    state: Rc<RefCell<CoordinatorState>>,
}

impl PanelCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel currently open, if any
    pub fn open_panel(&self) -> Option<PanelId> {
        self.state.borrow().open
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.state.borrow().open == Some(id)
    }

    /// Close whatever panel is open. Hosts call this from their global
    /// "interaction anywhere" handler.
    pub fn close_all(&self) {
        if let Some(id) = self.state.borrow_mut().open.take() {
            info!("Closed {} on outside interaction", id);
        }
    }

    /// Number of toggles waiting for the next tick
    pub fn pending(&self) -> usize {
        self.state.borrow().deferred.len()
    }

    /// Apply every deferred toggle in the order it was requested.
    ///
    /// Opening a panel closes whichever other panel was open. Returns the
    /// number of toggles applied.
    pub fn drain_deferred(&self) -> usize {
        let mut state = self.state.borrow_mut();
        let mut applied = 0;
        while let Some(id) = state.deferred.pop_front() {
            if state.open == Some(id) {
                state.open = None;
                info!("Closed {}", id);
            } else {
                if let Some(previous) = state.open.replace(id) {
                    info!("Closed {} to open {}", previous, id);
                }
                info!("Opened {}", id);
            }
            applied += 1;
        }
        applied
    }

    fn defer_toggle(&self, id: PanelId) {
        debug!("Deferring toggle of {}", id);
        self.state.borrow_mut().deferred.push_back(id);
    }

    fn close(&self, id: PanelId) -> bool {
        let mut state = self.state.borrow_mut();
        if state.open == Some(id) {
            state.open = None;
            info!("Closed {}", id);
            true
        } else {
            false
        }
    }

    fn deregister(&self, id: PanelId) {
        let mut state = self.state.borrow_mut();
        state.deferred.retain(|pending| *pending != id);
        if state.open == Some(id) {
            state.open = None;
        }
    }
}

/// Visibility of one picker panel
#[derive(Debug)]
pub struct VisibilityController {
    id: PanelId,
    coordinator: PanelCoordinator,
}

impl VisibilityController {
    pub fn new(coordinator: PanelCoordinator) -> Self {
        Self {
            id: PanelId::new(),
            coordinator,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.coordinator.is_open(self.id)
    }

    /// Request a visibility flip; it takes effect on the next
    /// `PanelCoordinator::drain_deferred`
    pub fn toggle_open(&self) {
        self.coordinator.defer_toggle(self.id);
    }

    /// Close this panel immediately, returning whether it was open
    pub fn close(&self) -> bool {
        self.coordinator.close(self.id)
    }

    /// Invoked by the host for interactions outside the panel bounds
    pub fn close_on_outside_interaction(&self) -> bool {
        self.close()
    }
}

impl Drop for VisibilityController {
    fn drop(&mut self) {
        self.coordinator.deregister(self.id);
    }
}
