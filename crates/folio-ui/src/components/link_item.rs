//! Link Item Component

use dioxus::prelude::*;
use folio_core::LinkEntry;

/// A labelled external link with a chain icon.
///
/// Clicks and key presses never bubble, so activating a link inside a card
/// (mouse or Enter) follows the URL without also opening the card's overlay.
#[component]
pub fn LinkItem(
    /// Label and target
    entry: LinkEntry,
    /// Smaller text for the collapsed card
    #[props(default = false)]
    compact: bool,
) -> Element {
    rsx! {
        a {
            class: if compact { "link-item link-item--compact" } else { "link-item" },
            href: "{entry.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: move |e: MouseEvent| e.stop_propagation(),
            onkeydown: move |e: KeyboardEvent| e.stop_propagation(),
            LinkIcon {}
            span { class: "link-item__label", "{entry.label}" }
        }
    }
}

/// Chain-link glyph
#[component]
pub fn LinkIcon() -> Element {
    rsx! {
        svg {
            class: "link-icon",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "1.5",
                d: "M10 14a4 4 0 0 0 5.66 0l3-3a4 4 0 0 0-5.66-5.66l-1 1M14 10a4 4 0 0 0-5.66 0l-3 3a4 4 0 0 0 5.66 5.66l1-1",
            }
        }
    }
}
