//! Brand Mark Component

use dioxus::prelude::*;

use crate::nav::BRAND_NAME;

/// ruleIQ logo glyph followed by the wordmark
#[component]
pub fn BrandMark() -> Element {
    rsx! {
        div { class: "brand-mark",
            span { class: "brand-glyph",
                // Lucide shield-check
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
                    "aria-hidden": "true",
                    path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
                    path { d: "m9 12 2 2 4-4" }
                }
            }
            span { class: "brand-name", "{BRAND_NAME}" }
        }
    }
}
