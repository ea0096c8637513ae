//! Mobile Navigation Panel
//!
//! Slide-out overlay for small screens. Shows the brand mark, a close
//! button and the five ruleIQ destinations, highlighting the active one.
//!
//! The panel holds no state of its own. The host owns `open` and must
//! honor `on_open_change` requests; the host also supplies the current
//! path and performs navigation through `on_navigate`.

use dioxus::prelude::*;

use crate::components::{BrandMark, CloseButton};
use crate::nav::{PanelEffect, PanelEvent, PanelView};

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Whether the panel is visible
    pub open: bool,
    /// Visibility change requests
    pub on_open_change: EventHandler<bool>,
    /// Current route path; `None` highlights nothing
    #[props(default)]
    pub current_path: Option<String>,
    /// Navigation requests, carrying the destination href
    pub on_navigate: EventHandler<String>,
}

/// Mobile slide-out navigation panel
///
/// # Example
///
/// ```rust,ignore
/// let mut menu_open = use_signal(|| false);
/// let route = use_route::<Route>();
/// let navigator = use_navigator();
///
/// rsx! {
///     MobileNav {
///         open: menu_open(),
///         on_open_change: move |open| menu_open.set(open),
///         current_path: route.to_string(),
///         on_navigate: move |href: String| {
///             if let Ok(route) = href.parse::<Route>() {
///                 navigator.push(route);
///             }
///         },
///     }
/// }
/// ```
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let Some(view) = PanelView::build(props.open, props.current_path.as_deref()) else {
        return rsx! {};
    };

    let on_open_change = props.on_open_change;
    let on_navigate = props.on_navigate;
    let dispatch = move |event: PanelEvent| {
        tracing::debug!(?event, "mobile nav event");
        apply_effects(
            event,
            |open| on_open_change.call(open),
            |href| on_navigate.call(href.to_string()),
        );
    };

    rsx! {
        div {
            class: "mobile-nav-backdrop",
            onclick: move |_| dispatch(PanelEvent::Dismissed),
        }

        aside {
            class: "mobile-nav-panel",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "Navigation",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!(error = ?e, "could not focus mobile nav");
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    dispatch(PanelEvent::Dismissed);
                }
            },

            header { class: "mobile-nav-header",
                BrandMark {}
                CloseButton {
                    label: view.close_label.to_string(),
                    onclick: move |_| dispatch(PanelEvent::CloseRequested),
                }
            }

            nav { class: "mobile-nav-list",
                for item in view.items.iter().copied() {
                    a {
                        key: "{item.destination.href}",
                        href: "{item.destination.href}",
                        class: item.class(),
                        "aria-current": if item.active { "page" } else { "false" },
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            dispatch(PanelEvent::DestinationChosen(item.destination));
                        },

                        span { class: "mobile-nav-icon", {item.destination.icon.render()} }
                        span { class: "mobile-nav-label", "{item.destination.title}" }
                    }
                }
            }
        }
    }
}

/// Route each effect of `event` to the matching host callback.
fn apply_effects(
    event: PanelEvent,
    mut set_open: impl FnMut(bool),
    mut navigate: impl FnMut(&'static str),
) {
    for effect in event.effects() {
        match effect {
            PanelEffect::SetOpen(open) => set_open(open),
            PanelEffect::Navigate(href) => navigate(href),
        }
    }
}
