//! Project Card Component
//!
//! Collapsed catalog entry. Clicking it (or pressing Enter while it has
//! focus) opens the detail overlay.

use dioxus::prelude::*;
use folio_core::{render_detail, CardView, ProjectSummary};

use super::{DetailOverlay, LinkItem, TagLayout, TechTags};
use crate::context::use_details;
use crate::hooks::use_overlay;

/// Project card with its detail overlay
///
/// Requires the [`ScrollLockController`](folio_core::ScrollLockController)
/// and [`SharedDetails`](crate::SharedDetails) contexts.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         summary: ProjectSummary::new(
///             "Folio",
///             "Project showcase",
///             "Rust,Dioxus",
///             "https://folio.example",
///             "https://github.com/example/folio",
///         ),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(summary: ProjectSummary) -> Element {
    let details = use_details();
    let overlay = use_overlay();

    let detail = render_detail(&summary, details.lookup(&summary.title), overlay.state());
    let CardView {
        title,
        description,
        technologies,
        links,
    } = CardView::build(&summary);

    rsx! {
        div {
            class: if overlay.is_open() { "project-card project-card--active" } else { "project-card" },
            role: "button",
            tabindex: "0",
            onclick: move |_| overlay.open(),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    overlay.open();
                }
            },

            TechTags { technologies, layout: TagLayout::Strip }

            h3 { class: "project-card__title", "{title}" }

            p { class: "project-card__description", "{description}" }

            div { class: "project-card__links",
                for entry in links {
                    LinkItem { entry, compact: true }
                }
            }
        }

        if let Some(view) = detail {
            DetailOverlay {
                view,
                on_close: move |_| overlay.close(),
            }
        }
    }
}
