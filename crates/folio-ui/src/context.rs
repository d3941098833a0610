//! Context shared by every card on the page.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| ScrollLockController::new(DocumentSurface));
//! use_context_provider(|| SharedDetails::new(details));
//!
//! // In child components
//! let lock = use_scroll_lock();
//! let details = use_details();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{DetailLookup, ProjectDetail, ScrollLockController};

/// Read-only detail store handed to cards through context.
#[derive(Clone)]
pub struct SharedDetails(Arc<dyn DetailLookup + Send + Sync>);

impl SharedDetails {
    pub fn new(lookup: impl DetailLookup + Send + Sync + 'static) -> Self {
        Self(Arc::new(lookup))
    }

    pub fn lookup(&self, title: &str) -> Option<&ProjectDetail> {
        self.0.lookup(title)
    }
}

/// Hook to access the page scroll lock from context.
pub fn use_scroll_lock() -> ScrollLockController {
    use_context::<ScrollLockController>()
}

/// Hook to access the detail store from context.
pub fn use_details() -> SharedDetails {
    use_context::<SharedDetails>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::DetailStore;

    #[test]
    fn shared_details_delegate_lookup() {
        let details = SharedDetails::new(
            DetailStore::new().with_detail("Folio", ProjectDetail::default().with_icon("📚")),
        );
        let clone = details.clone();
        assert_eq!(
            clone.lookup("Folio").and_then(|d| d.icon.as_deref()),
            Some("📚")
        );
        assert!(details.lookup("Other").is_none());
    }
}
