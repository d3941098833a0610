//! Background scroll lock shared by every overlay on a page.
//!
//! The page has a single scroll flag. Each overlay that opens takes a hold
//! on it under its own [`OverlayId`]; the flag stays locked while any hold
//! remains and flips back to free when the last one is released. A release
//! from an overlay that holds nothing never unlocks somebody else's hold.
//!
//! The flag itself lives behind [`ScrollSurface`], so the desktop UI can
//! write the document's `overflow` style while tests record writes in a
//! [`MemorySurface`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Background scroll behavior of the surrounding document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollBehavior {
    /// Page scrolls normally
    #[default]
    Free,
    /// Page scrolling suspended behind an overlay
    Locked,
}

impl ScrollBehavior {
    /// CSS `overflow` value for the document body
    pub fn css_overflow(&self) -> &'static str {
        match self {
            ScrollBehavior::Free => "auto",
            ScrollBehavior::Locked => "hidden",
        }
    }
}

/// Whatever actually applies the scroll behavior to the page.
///
/// `apply` may call back into the [`ScrollLockController`] that invoked it
/// from the same thread (to read `behavior()` or `holders()`, say).
pub trait ScrollSurface: Send + Sync {
    fn apply(&self, behavior: ScrollBehavior);
}

/// Identity of one overlay instance, used as its lock-holder token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(Ulid);

impl OverlayId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for OverlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct LockState {
    holders: HashSet<OverlayId>,
    applied: ScrollBehavior,
}

/// Page-wide scroll lock with per-overlay holds.
///
/// Cheap to clone; clones share the same holder set and surface. The
/// reentrant lock stays held while the surface is written, so writes reach
/// the surface in the order their state changes happened, and the surface
/// may still read the controller.
#[derive(Clone)]
pub struct ScrollLockController {
    state: Arc<ReentrantMutex<RefCell<LockState>>>,
    surface: Arc<dyn ScrollSurface>,
}

impl ScrollLockController {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            state: Arc::new(ReentrantMutex::new(RefCell::new(LockState::default()))),
            surface: Arc::new(surface),
        }
    }

    /// Take a hold for `owner` and lock the page.
    ///
    /// Returns `false` (and touches nothing) if `owner` already holds it.
    pub fn acquire(&self, owner: OverlayId) -> bool {
        let guard = self.state.lock();
        {
            let mut state = guard.borrow_mut();
            if !state.holders.insert(owner) {
                return false;
            }
            tracing::debug!(%owner, holders = state.holders.len(), "scroll lock acquired");
            state.applied = ScrollBehavior::Locked;
        }
        self.apply(ScrollBehavior::Locked);
        true
    }

    /// Drop `owner`'s hold, if any, and free the page once nobody holds it.
    ///
    /// Safe to call for an owner that never acquired. When no hold remains
    /// afterwards the surface is written free even if it already was.
    /// Returns whether `owner` actually held the lock.
    pub fn release(&self, owner: OverlayId) -> bool {
        let guard = self.state.lock();
        let (held, unowned) = {
            let mut state = guard.borrow_mut();
            let held = state.holders.remove(&owner);
            if held {
                tracing::debug!(%owner, holders = state.holders.len(), "scroll lock released");
            }
            let unowned = state.holders.is_empty();
            if unowned {
                state.applied = ScrollBehavior::Free;
            } else if !held {
                tracing::trace!(%owner, "release without hold; other overlays keep the page locked");
            }
            (held, unowned)
        };
        if unowned {
            self.apply(ScrollBehavior::Free);
        }
        held
    }

    /// Behavior most recently written to the surface
    pub fn behavior(&self) -> ScrollBehavior {
        let guard = self.state.lock();
        let applied = guard.borrow().applied;
        applied
    }

    pub fn is_locked(&self) -> bool {
        self.behavior() == ScrollBehavior::Locked
    }

    /// Number of overlays currently holding the lock
    pub fn holders(&self) -> usize {
        let guard = self.state.lock();
        let count = guard.borrow().holders.len();
        count
    }

    pub fn is_held_by(&self, owner: OverlayId) -> bool {
        let guard = self.state.lock();
        let held = guard.borrow().holders.contains(&owner);
        held
    }

    // Called with the reentrant guard held and no RefCell borrow live.
    fn apply(&self, behavior: ScrollBehavior) {
        tracing::trace!(?behavior, "applying scroll behavior");
        self.surface.apply(behavior);
    }
}

impl PartialEq for ScrollLockController {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for ScrollLockController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.state.lock();
        let state = guard.borrow();
        f.debug_struct("ScrollLockController")
            .field("holders", &state.holders.len())
            .field("applied", &state.applied)
            .finish()
    }
}

/// Surface that only remembers what was written to it.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to a [`ScrollLockController`].
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    writes: Arc<Mutex<Vec<ScrollBehavior>>>,
}

impl MemorySurface {
    /// Last written behavior (free before any write)
    pub fn current(&self) -> ScrollBehavior {
        self.writes.lock().last().copied().unwrap_or_default()
    }

    /// Every write, oldest first
    pub fn writes(&self) -> Vec<ScrollBehavior> {
        self.writes.lock().clone()
    }

    pub fn count(&self, behavior: ScrollBehavior) -> usize {
        self.writes.lock().iter().filter(|b| **b == behavior).count()
    }
}

impl ScrollSurface for MemorySurface {
    fn apply(&self, behavior: ScrollBehavior) {
        self.writes.lock().push(behavior);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MemorySurface, ScrollLockController) {
        let surface = MemorySurface::default();
        let lock = ScrollLockController::new(surface.clone());
        (surface, lock)
    }

    #[test]
    fn starts_free_and_unheld() {
        let (surface, lock) = setup();
        assert_eq!(lock.behavior(), ScrollBehavior::Free);
        assert_eq!(lock.holders(), 0);
        assert!(surface.writes().is_empty());
    }

    #[test]
    fn acquire_is_idempotent_per_owner() {
        let (surface, lock) = setup();
        let owner = OverlayId::new();
        assert!(lock.acquire(owner));
        assert!(!lock.acquire(owner));
        assert_eq!(lock.holders(), 1);
        assert_eq!(surface.count(ScrollBehavior::Locked), 1);
    }

    #[test]
    fn release_without_hold_still_frees_an_unowned_page() {
        let (surface, lock) = setup();
        assert!(!lock.release(OverlayId::new()));
        assert_eq!(surface.writes(), vec![ScrollBehavior::Free]);
    }

    #[test]
    fn foreign_release_does_not_stomp_another_hold() {
        let (surface, lock) = setup();
        let a = OverlayId::new();
        let b = OverlayId::new();
        lock.acquire(a);
        assert!(!lock.release(b));
        assert!(lock.is_locked());
        assert_eq!(surface.current(), ScrollBehavior::Locked);
    }

    #[test]
    fn last_holder_out_frees_the_page() {
        let (surface, lock) = setup();
        let a = OverlayId::new();
        let b = OverlayId::new();
        lock.acquire(a);
        lock.acquire(b);
        assert!(lock.release(a));
        assert!(lock.is_locked());
        assert!(lock.release(b));
        assert!(!lock.is_locked());
        assert_eq!(surface.current(), ScrollBehavior::Free);
    }

    #[test]
    fn clones_share_state() {
        let (_surface, lock) = setup();
        let other = lock.clone();
        let owner = OverlayId::new();
        other.acquire(owner);
        assert!(lock.is_held_by(owner));
        assert_eq!(lock, other);
    }

    /// Surface that reads the controller back while it is being written
    #[derive(Default)]
    struct ObservingSurface {
        controller: std::sync::OnceLock<ScrollLockController>,
        seen: Mutex<Vec<(ScrollBehavior, usize)>>,
    }

    impl ScrollSurface for Arc<ObservingSurface> {
        fn apply(&self, behavior: ScrollBehavior) {
            if let Some(controller) = self.controller.get() {
                let observed = (controller.behavior(), controller.holders());
                assert_eq!(observed.0, behavior);
                self.seen.lock().push(observed);
            }
        }
    }

    #[test]
    fn surface_can_read_controller_during_apply() {
        let surface = Arc::new(ObservingSurface::default());
        let lock = ScrollLockController::new(surface.clone());
        let _ = surface.controller.set(lock.clone());

        let owner = OverlayId::new();
        lock.acquire(owner);
        lock.release(owner);

        assert_eq!(
            *surface.seen.lock(),
            vec![(ScrollBehavior::Locked, 1), (ScrollBehavior::Free, 0)]
        );
    }

    #[test]
    fn css_overflow_values() {
        assert_eq!(ScrollBehavior::Free.css_overflow(), "auto");
        assert_eq!(ScrollBehavior::Locked.css_overflow(), "hidden");
    }

    #[test]
    fn overlay_ids_are_unique() {
        assert_ne!(OverlayId::new(), OverlayId::new());
        assert!(OverlayId::new().to_string().starts_with("overlay_"));
    }
}
