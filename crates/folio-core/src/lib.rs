//! Folio Core Library
//!
//! Data model and behavior behind a project showcase: a catalog of project
//! cards, each of which expands into a full-detail overlay.
//!
//! ## Overview
//!
//! - **Catalog**: the project summaries plus the per-title detail store
//! - **Overlay**: the Closed/Open state machine owned by each card
//! - **Scroll lock**: the page-wide background scroll toggle every open
//!   overlay holds until it closes or is torn down
//! - **Views**: pure card/detail view models the UI crate renders
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{render_detail, Catalog, DetailLookup, MemorySurface, OverlayController, ScrollBehavior, ScrollLockController};
//!
//! let catalog = Catalog::builtin();
//! let surface = MemorySurface::default();
//! let lock = ScrollLockController::new(surface.clone());
//!
//! let summary = &catalog.projects()[0];
//! let mut overlay = OverlayController::new(lock);
//! overlay.request_open();
//! assert_eq!(surface.current(), ScrollBehavior::Locked);
//!
//! let detail = catalog.lookup(&summary.title);
//! let view = render_detail(summary, detail, overlay.state()).expect("open overlay renders");
//! assert_eq!(view.links[0].label, "View Project");
//!
//! drop(overlay);
//! assert_eq!(surface.current(), ScrollBehavior::Free);
//! ```

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod links;
pub mod logging;
pub mod overlay;
pub mod scroll;
pub mod technologies;
pub mod types;
pub mod view;

// Re-exports
pub use catalog::Catalog;
pub use config::FolioConfig;
pub use detail::{DetailLookup, DetailStore};
pub use error::FolioError;
pub use links::{aggregate_links, LinkEntry, GITHUB_LABEL, PROJECT_LABEL};
pub use overlay::{OverlayController, OverlayState, Transition};
pub use scroll::{MemorySurface, OverlayId, ScrollBehavior, ScrollLockController, ScrollSurface};
pub use technologies::{parse_technologies, Technology, TECHNOLOGY_DELIMITER};
pub use types::{AdditionalLink, ProjectDetail, ProjectSummary};
pub use view::{render_detail, CardView, DetailView};

/// Result alias for fallible Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
