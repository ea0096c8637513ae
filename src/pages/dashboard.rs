//! Dashboard - compliance overview and entry points into each section.

use dioxus::prelude::*;
use ruleiq_ui::DESTINATIONS;

use crate::app::Route;
use crate::components::PageHeader;

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    // Every section except the dashboard itself
    let sections = DESTINATIONS.iter().skip(1);

    rsx! {
        PageHeader {
            title: "Dashboard".to_string(),
            summary: "Your compliance posture at a glance.".to_string(),
        }

        section { class: "section-grid",
            for destination in sections {
                a {
                    key: "{destination.href}",
                    class: "section-card",
                    href: "{destination.href}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        if let Ok(route) = destination.href.parse::<Route>() {
                            navigator.push(route);
                        }
                    },
                    span { class: "section-card-icon", {destination.icon.render()} }
                    span { class: "section-card-title", "{destination.title}" }
                }
            }
        }
    }
}
