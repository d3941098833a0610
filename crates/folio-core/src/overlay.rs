//! Overlay visibility state machine.
//!
//! Each card owns one [`OverlayController`]. Opening takes a hold on the
//! page scroll lock before the state flips to [`OverlayState::Open`];
//! every path back to [`OverlayState::Closed`] releases it, including
//! teardown through [`OverlayController::force_close`] or `Drop`.
//!
//! ```text
//!            request_open
//!   Closed ───────────────▶ Open
//!     ▲                      │
//!     └──────────────────────┘
//!       request_close / force_close
//! ```

use serde::{Deserialize, Serialize};

use crate::scroll::{OverlayId, ScrollLockController};

/// Whether the detail overlay is mounted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open)
    }
}

/// Outcome of a transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Closed → Open
    Opened,
    /// Open → Closed
    Closed,
    /// Request had no effect on the state
    Unchanged,
}

/// Per-card overlay state machine bound to the page scroll lock.
#[derive(Debug)]
pub struct OverlayController {
    id: OverlayId,
    state: OverlayState,
    lock: ScrollLockController,
    torn_down: bool,
}

impl OverlayController {
    /// New controller in the closed state
    pub fn new(lock: ScrollLockController) -> Self {
        Self {
            id: OverlayId::new(),
            state: OverlayState::Closed,
            lock,
            torn_down: false,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// True once [`force_close`](Self::force_close) has run
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Open the overlay (card interaction).
    ///
    /// Locks background scrolling first, then flips to open. No-op when
    /// already open or after teardown.
    pub fn request_open(&mut self) -> Transition {
        if self.torn_down || self.state.is_open() {
            return Transition::Unchanged;
        }
        self.lock.acquire(self.id);
        self.state = OverlayState::Open;
        tracing::debug!(overlay = %self.id, "overlay opened");
        Transition::Opened
    }

    /// Close the overlay (explicit dismiss). No-op when already closed.
    pub fn request_close(&mut self) -> Transition {
        if !self.state.is_open() {
            return Transition::Unchanged;
        }
        self.close();
        tracing::debug!(overlay = %self.id, "overlay dismissed");
        Transition::Closed
    }

    /// Close for teardown. Terminal: later open requests are ignored.
    ///
    /// Releases the scroll lock whether or not this overlay ever held it,
    /// exactly once per controller.
    pub fn force_close(&mut self) -> Transition {
        if self.torn_down {
            return Transition::Unchanged;
        }
        self.torn_down = true;
        let was_open = self.state.is_open();
        self.close();
        tracing::debug!(overlay = %self.id, was_open, "overlay torn down");
        if was_open {
            Transition::Closed
        } else {
            Transition::Unchanged
        }
    }

    fn close(&mut self) {
        self.state = OverlayState::Closed;
        self.lock.release(self.id);
    }
}

impl Drop for OverlayController {
    fn drop(&mut self) {
        self.force_close();
    }
}
