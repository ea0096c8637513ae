//! Application Shell
//!
//! Layout wrapping every route: top bar with the menu button, brand mark
//! and environment badge, the mobile navigation panel, and the page outlet.
//!
//! The shell owns the panel's `open` signal and acts as its routing
//! collaborator: it passes the current route path in and performs the
//! navigation the panel requests.

use dioxus::prelude::*;
use ruleiq_ui::{BrandMark, MenuButton, MobileNav};

use crate::app::Route;
use crate::context::use_app_config;

#[component]
pub fn Shell() -> Element {
    let config = use_app_config();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut menu_open = use_signal(|| false);

    let current_path = route.to_string();

    let on_open_change = move |open: bool| {
        tracing::debug!(open, "mobile nav visibility requested");
        menu_open.set(open);
    };

    rsx! {
        div { class: "app-shell",
            header { class: "top-bar",
                MenuButton {
                    open: menu_open(),
                    on_open_change: on_open_change,
                }
                BrandMark {}
                if let Some(badge) = config.environment.badge() {
                    span {
                        class: "env-badge",
                        title: "{config.environment}",
                        "{badge}"
                    }
                }
            }

            MobileNav {
                open: menu_open(),
                on_open_change: on_open_change,
                current_path: current_path,
                on_navigate: move |href: String| navigate_to(navigator, &href),
            }

            main { class: "page",
                Outlet::<Route> {}
            }
        }
    }
}

/// Push the route for `href`, logging targets no route accepts.
fn navigate_to(navigator: Navigator, href: &str) {
    match href.parse::<Route>() {
        Ok(route) => {
            tracing::info!(%href, "navigating");
            navigator.push(route);
        }
        Err(_) => tracing::warn!(%href, "no route for navigation target"),
    }
}
