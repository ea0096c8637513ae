//! Button Components
//!
//! Compact icon buttons used by the navigation chrome:
//! - IconButton: base square button with an accessible label
//! - CloseButton: X glyph, dismisses overlays
//! - MenuButton: hamburger, asks the host to open the mobile panel

use dioxus::prelude::*;

/// Icon button for compact actions (close, menu, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (glyph or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Rendered as `aria-expanded` when set
    #[props(default)]
    pub expanded: Option<bool>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = icon_button_class(props.class.as_deref());

    rsx! {
        button {
            r#type: "button",
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            "aria-expanded": props.expanded.map(|open| open.to_string()),
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

fn icon_button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(label: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: label,
            class: "close-btn".to_string(),
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M18 6 6 18" }
                path { d: "m6 6 12 12" }
            }
        }
    }
}

/// Hamburger button that opens the mobile navigation panel
///
/// # Example
///
/// ```rust,ignore
/// let mut menu_open = use_signal(|| false);
///
/// rsx! {
///     MenuButton {
///         open: menu_open(),
///         on_open_change: move |open| menu_open.set(open),
///     }
/// }
/// ```
#[component]
pub fn MenuButton(open: bool, on_open_change: EventHandler<bool>) -> Element {
    rsx! {
        IconButton {
            onclick: move |_| on_open_change.call(true),
            aria_label: "Open navigation".to_string(),
            class: "menu-btn".to_string(),
            expanded: open,
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M4 6h16" }
                path { d: "M4 12h16" }
                path { d: "M4 18h16" }
            }
        }
    }
}
