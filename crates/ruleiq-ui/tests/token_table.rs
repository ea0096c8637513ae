//! Color token table tests
//!
//! Checks the keyed access surface against the static constants.

use proptest::prelude::*;
use ruleiq_ui::tokens::{self, brand, palette, semantic, surface, text, TokenError};

#[test]
fn keyed_access_matches_constants() {
    let expected = [
        ("brand.primary", brand::PRIMARY),
        ("brand.secondary", brand::SECONDARY),
        ("brand.accent", brand::ACCENT),
        ("brand.dark", brand::DARK),
        ("brand.light", brand::LIGHT),
        ("text.primary", text::PRIMARY),
        ("text.secondary", text::SECONDARY),
        ("text.muted", text::MUTED),
        ("text.inverse", text::INVERSE),
        ("text.link", text::LINK),
        ("surface.base", surface::BASE),
        ("surface.overlay", surface::OVERLAY),
        ("semantic.error", semantic::ERROR),
        ("accent.500", palette::accent::SHADE_500),
        ("neutral.50", palette::neutral::SHADE_50),
    ];

    for (path, value) in expected {
        assert_eq!(tokens::resolve(path), Ok(value), "{}", path);
    }
}

#[test]
fn brand_shortcuts_point_into_palette() {
    assert_eq!(brand::PRIMARY, palette::primary::SHADE_700);
    assert_eq!(brand::SECONDARY, palette::accent::SHADE_500);
}

#[test]
fn every_flattened_path_resolves_to_itself() {
    for (path, value) in tokens::TOKENS.iter_colors() {
        assert_eq!(tokens::lookup(&path), Some(value));
    }
}

#[test]
fn error_messages_name_the_path() {
    let err = tokens::resolve("brand.tertiary").unwrap_err();
    assert_eq!(err.to_string(), "Unknown color token: brand.tertiary");
    assert!(matches!(tokens::resolve("text"), Err(TokenError::NotAColor { .. })));
}

proptest! {
    /// Keyed lookup never panics and only ever yields valid hex colors
    #[test]
    fn lookup_is_total(path in ".{0,32}") {
        if let Some(value) = tokens::lookup(&path) {
            prop_assert!(tokens::is_hex_color(value));
        }
    }
}
