//! Detail Overlay Component
//!
//! Full-detail modal for one project. Only mounted while the card's
//! overlay is open.

use dioxus::prelude::*;
use folio_core::DetailView;

use super::{CloseButton, LinkItem, TagLayout, TechTags};

/// Detail overlay
///
/// Dismissed by the close button, a click on the backdrop, or Escape.
/// The panel takes focus when mounted so Escape works immediately.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(view) = render_detail(&summary, detail, state) {
///         DetailOverlay {
///             view,
///             on_close: move |_| overlay.close(),
///         }
///     }
/// }
/// ```
#[component]
pub fn DetailOverlay(
    /// Assembled detail data
    view: DetailView,
    /// Callback when the overlay is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let DetailView {
        icon,
        title,
        technologies,
        description,
        highlights,
        links,
    } = view;

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "overlay-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                tabindex: "-1",
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                onmounted: move |e: MountedEvent| async move {
                    if let Err(err) = e.set_focus(true).await {
                        tracing::debug!("overlay focus failed: {:?}", err);
                    }
                },

                CloseButton { onclick: on_close }

                div { class: "overlay-body",
                    // Title with icon
                    div { class: "overlay-heading",
                        if let Some(icon) = icon {
                            span { class: "overlay-icon", "{icon}" }
                        }
                        h2 { class: "overlay-title", "{title}" }
                    }

                    TechTags { technologies, layout: TagLayout::Wrap }

                    section { class: "overlay-section",
                        h3 { class: "overlay-section__title", "Project Description" }
                        p { class: "overlay-description", "{description}" }
                    }

                    if let Some(highlights) = highlights {
                        section { class: "overlay-section",
                            h3 { class: "overlay-section__title", "Key Highlights" }
                            ul { class: "highlight-list",
                                for highlight in highlights {
                                    li { class: "highlight",
                                        span { class: "highlight__bullet", "\u{2022}" }
                                        span { "{highlight}" }
                                    }
                                }
                            }
                        }
                    }

                    section { class: "overlay-section",
                        h3 { class: "overlay-section__title", "Project Links" }
                        div { class: "overlay-links",
                            for entry in links {
                                LinkItem { entry }
                            }
                        }
                    }
                }
            }
        }
    }
}
