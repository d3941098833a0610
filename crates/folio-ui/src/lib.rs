//! Folio UI Components
//!
//! Dioxus components for a project showcase: cards that open a full-detail
//! overlay and lock background scrolling while it is open.
//!
//! ## Wiring
//!
//! The host app provides two contexts before rendering any card:
//!
//! ```rust,ignore
//! use_context_provider(|| ScrollLockController::new(DocumentSurface));
//! use_context_provider(|| SharedDetails::new(catalog.details().clone()));
//!
//! rsx! {
//!     for summary in catalog.projects() {
//!         ProjectCard { summary: summary.clone() }
//!     }
//! }
//! ```

pub mod components;
pub mod context;
pub mod hooks;
pub mod surface;

pub use components::*;
pub use context::{use_details, use_scroll_lock, SharedDetails};
pub use hooks::{use_overlay, OverlayHandle};
pub use surface::DocumentSurface;
