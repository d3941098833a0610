//! Scroll surface backed by the webview document.

use dioxus::document;
use dioxus::prelude::spawn_forever;
use folio_core::{ScrollBehavior, ScrollSurface};

/// Writes the scroll behavior to `document.body.style.overflow`.
///
/// The script is queued synchronously from whichever event handler or
/// teardown triggered the lock change, so it lands before the next render.
/// Its result is awaited on the root scope and failures are logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSurface;

/// Script that applies `behavior` to the document body
pub fn overflow_script(behavior: ScrollBehavior) -> String {
    format!(
        "document.body.style.overflow = '{}'; return document.body.style.overflow;",
        behavior.css_overflow()
    )
}

impl ScrollSurface for DocumentSurface {
    fn apply(&self, behavior: ScrollBehavior) {
        let eval = document::eval(&overflow_script(behavior));
        let watched = spawn_forever(async move {
            if let Err(err) = eval.await {
                tracing::warn!(?behavior, "failed to apply scroll behavior: {:?}", err);
            }
        });
        if watched.is_none() {
            tracing::warn!(?behavior, "no runtime to watch the scroll script");
        }
    }
}
