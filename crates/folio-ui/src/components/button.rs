//! Button Components
//!
//! Compact icon buttons used by the overlay chrome.

use dioxus::prelude::*;

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = icon_button_class(props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with an X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            svg {
                class: "close-btn__icon",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M6 18L18 6M6 6l12 12",
                }
            }
        }
    }
}

fn icon_button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_button_classes() {
        assert_eq!(icon_button_class(None), "icon-btn");
        assert_eq!(icon_button_class(Some("")), "icon-btn");
        assert_eq!(icon_button_class(Some("close-btn")), "icon-btn close-btn");
    }
}
