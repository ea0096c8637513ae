//! ruleIQ UI Components
//!
//! This crate provides the Dioxus building blocks shared by the ruleIQ
//! desktop shell:
//!
//! - [`tokens`]: the color token table, checked at compile time
//! - [`nav`]: navigation destinations, active-route matching and the
//!   slide-out panel model
//! - [`components`]: the `MobileNav` panel and its buttons
//!
//! ## Color Semantics
//!
//! - **Navy (#1e3a5f)**: brand, headings, primary actions
//! - **Teal (#14b8a6)**: accents, active navigation, links
//! - **Neutral grays**: surfaces, borders, body text

pub mod components;
pub mod nav;
pub mod tokens;

pub use components::*;
pub use nav::{
    active_destination, is_active, nav_items, Destination, NavIcon, NavItem, PanelEffect,
    PanelEvent, PanelView, DESTINATIONS,
};
pub use tokens::{TokenError, TokenNode, TOKENS};
