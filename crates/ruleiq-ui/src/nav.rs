//! Navigation Model
//!
//! The fixed set of ruleIQ destinations, the active-route rule, and the
//! pure model behind the slide-out mobile panel. Nothing here owns state:
//! visibility belongs to the host and the current location is passed in.

use dioxus::prelude::*;

/// Brand label shown in the panel header
pub const BRAND_NAME: &str = "ruleIQ";

/// Root path; only ever matched exactly
pub const ROOT_PATH: &str = "/";

/// Lucide glyph for a navigation destination
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavIcon {
    LayoutDashboard,
    ClipboardCheck,
    FileCheck,
    Shield,
    BarChart,
}

impl NavIcon {
    /// Lucide icon name
    pub fn name(&self) -> &'static str {
        match self {
            NavIcon::LayoutDashboard => "layout-dashboard",
            NavIcon::ClipboardCheck => "clipboard-check",
            NavIcon::FileCheck => "file-check",
            NavIcon::Shield => "shield",
            NavIcon::BarChart => "bar-chart-3",
        }
    }

    /// Render the glyph as an inline 24x24 SVG using `currentColor`
    pub fn render(&self) -> Element {
        let glyph = match self {
            NavIcon::LayoutDashboard => rsx! {
                rect { x: "3", y: "3", width: "7", height: "9", rx: "1" }
                rect { x: "14", y: "3", width: "7", height: "5", rx: "1" }
                rect { x: "14", y: "12", width: "7", height: "9", rx: "1" }
                rect { x: "3", y: "16", width: "7", height: "5", rx: "1" }
            },
            NavIcon::ClipboardCheck => rsx! {
                rect { x: "8", y: "2", width: "8", height: "4", rx: "1", ry: "1" }
                path { d: "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2" }
                path { d: "m9 14 2 2 4-4" }
            },
            NavIcon::FileCheck => rsx! {
                path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
                path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
                path { d: "m9 15 2 2 4-4" }
            },
            NavIcon::Shield => rsx! {
                path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
            },
            NavIcon::BarChart => rsx! {
                path { d: "M3 3v18h18" }
                path { d: "M18 17V9" }
                path { d: "M13 17V5" }
                path { d: "M8 17v-3" }
            },
        };

        rsx! {
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
                {glyph}
            }
        }
    }
}

/// A fixed navigable target
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Destination {
    /// Display label
    pub title: &'static str,
    /// Target path, always starting with `/`
    pub href: &'static str,
    /// Glyph shown beside the label
    pub icon: NavIcon,
}

/// Every destination, in display order. No two share an `href`.
pub static DESTINATIONS: [Destination; 5] = [
    Destination {
        title: "Dashboard",
        href: ROOT_PATH,
        icon: NavIcon::LayoutDashboard,
    },
    Destination {
        title: "Assessments",
        href: "/assessments",
        icon: NavIcon::ClipboardCheck,
    },
    Destination {
        title: "Evidence",
        href: "/evidence",
        icon: NavIcon::FileCheck,
    },
    Destination {
        title: "Policies",
        href: "/policies",
        icon: NavIcon::Shield,
    },
    Destination {
        title: "Reports",
        href: "/reports",
        icon: NavIcon::BarChart,
    },
];

/// Whether a destination with `href` is active for the current location.
///
/// Exact match always wins. Non-root hrefs also match any location they
/// prefix; the root matches only itself. The prefix check is raw, so
/// `/evidence` also matches `/evidence-x`. An absent location matches
/// nothing.
pub fn is_active(href: &str, current: Option<&str>) -> bool {
    let Some(current) = current else {
        return false;
    };
    current == href || (href != ROOT_PATH && current.starts_with(href))
}

/// The first destination active for `current`, if any.
pub fn active_destination(current: Option<&str>) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| is_active(d.href, current))
}

/// A destination paired with its active flag for one render
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub destination: &'static Destination,
    pub active: bool,
}

impl NavItem {
    /// CSS class for the link
    pub fn class(&self) -> &'static str {
        if self.active {
            "mobile-nav-link active"
        } else {
            "mobile-nav-link"
        }
    }
}

/// All destinations with their active flags, recomputed per call.
pub fn nav_items(current: Option<&str>) -> Vec<NavItem> {
    DESTINATIONS
        .iter()
        .map(|destination| NavItem {
            destination,
            active: is_active(destination.href, current),
        })
        .collect()
}

/// What the open panel presents.
///
/// Built only when the panel is open; a closed panel has no view, so none
/// of its controls are reachable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PanelView {
    /// Brand mark text
    pub brand: &'static str,
    /// Accessible label of the close control
    pub close_label: &'static str,
    /// Destinations in display order
    pub items: Vec<NavItem>,
}

impl PanelView {
    pub fn build(open: bool, current: Option<&str>) -> Option<Self> {
        if !open {
            return None;
        }
        Some(Self {
            brand: BRAND_NAME,
            close_label: "Close navigation",
            items: nav_items(current),
        })
    }

    /// The active item, if the location matched one
    pub fn active(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.active)
    }
}

/// User interaction with the open panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelEvent {
    /// The close control was activated
    CloseRequested,
    /// Backdrop click or Escape
    Dismissed,
    /// A destination link was activated
    DestinationChosen(&'static Destination),
}

/// A request the panel makes of its host
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelEffect {
    /// Ask the host to change `open`
    SetOpen(bool),
    /// Ask the router to go to `href`
    Navigate(&'static str),
}

impl PanelEvent {
    /// Requests produced by this event.
    ///
    /// Closing and navigating are independent: the host must carry out
    /// navigation even if the close lands first.
    pub fn effects(&self) -> Vec<PanelEffect> {
        match self {
            PanelEvent::CloseRequested | PanelEvent::Dismissed => vec![PanelEffect::SetOpen(false)],
            PanelEvent::DestinationChosen(destination) => vec![
                PanelEffect::SetOpen(false),
                PanelEffect::Navigate(destination.href),
            ],
        }
    }
}
