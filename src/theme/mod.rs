//! Visual theme for the Folio desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
