//! Reusable UI components for the project showcase
//!
//! Cards render the summary; the overlay renders the full detail view and
//! exists in the tree only while open.

mod button;
mod detail_overlay;
mod link_item;
mod project_card;
mod tech_tags;

pub use button::*;
pub use detail_overlay::*;
pub use link_item::*;
pub use project_card::*;
pub use tech_tags::*;
