//! Overlay hook binding an [`OverlayController`] to a component scope.

use dioxus::prelude::*;
use folio_core::{OverlayController, OverlayState, Transition};

use crate::context::use_scroll_lock;

/// Copyable handle to a card's overlay.
///
/// The controller does the state transition and scroll lock work; the
/// signal mirrors its state so the card re-renders after each transition.
#[derive(Clone, Copy)]
pub struct OverlayHandle {
    state: Signal<OverlayState>,
    controller: CopyValue<OverlayController>,
}

impl OverlayHandle {
    /// Current state (subscribes the calling component)
    pub fn state(&self) -> OverlayState {
        *self.state.read()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn open(mut self) {
        let transition = self.controller.write().request_open();
        self.publish(transition);
    }

    pub fn close(mut self) {
        let transition = self.controller.write().request_close();
        self.publish(transition);
    }

    fn publish(&mut self, transition: Transition) {
        if transition != Transition::Unchanged {
            let state = self.controller.peek().state();
            self.state.set(state);
        }
    }
}

/// Create the overlay for the calling component.
///
/// Starts closed. When the component unmounts the overlay is forced
/// closed, which releases its scroll lock hold if it had one.
pub fn use_overlay() -> OverlayHandle {
    let lock = use_scroll_lock();
    let controller = use_hook(|| CopyValue::new(OverlayController::new(lock)));
    let state = use_signal(|| OverlayState::Closed);

    use_drop(move || {
        let mut controller = controller;
        match controller.try_write() {
            Ok(mut overlay) => {
                overlay.force_close();
            }
            Err(_) => tracing::debug!("overlay already dropped; its Drop released the lock"),
        };
    });

    OverlayHandle { state, controller }
}
