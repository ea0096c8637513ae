//! Color Tokens
//!
//! The single source of truth for every color used by the ruleIQ styling
//! layer. Tokens are available two ways:
//!
//! - statically, as constants (`tokens::brand::PRIMARY`)
//! - dynamically, by dotted path (`tokens::lookup("brand.primary")`)
//!
//! The tree shape is `namespace -> shade/role -> "#rrggbb"`. Every terminal
//! value is verified to be a 6-digit hex color at compile time.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

// ============================================================================
// Static Constants
// ============================================================================

/// Palette scales, lightest (`50`) to darkest (`900`).
pub mod palette {
    /// Navy: brand, headings, primary actions
    pub mod primary {
        pub const SHADE_50: &str = "#eef3f9";
        pub const SHADE_100: &str = "#d5e1ef";
        pub const SHADE_200: &str = "#aec4df";
        pub const SHADE_300: &str = "#7f9fc9";
        pub const SHADE_400: &str = "#5079ae";
        pub const SHADE_500: &str = "#2f5a8f";
        pub const SHADE_600: &str = "#244a78";
        pub const SHADE_700: &str = "#1e3a5f";
        pub const SHADE_800: &str = "#172c48";
        pub const SHADE_900: &str = "#0f1d31";
    }

    /// Teal: accents, active navigation, links
    pub mod accent {
        pub const SHADE_50: &str = "#f0fdfa";
        pub const SHADE_100: &str = "#ccfbf1";
        pub const SHADE_200: &str = "#99f6e4";
        pub const SHADE_300: &str = "#5eead4";
        pub const SHADE_400: &str = "#2dd4bf";
        pub const SHADE_500: &str = "#14b8a6";
        pub const SHADE_600: &str = "#0d9488";
        pub const SHADE_700: &str = "#0f766e";
        pub const SHADE_800: &str = "#115e59";
        pub const SHADE_900: &str = "#134e4a";
    }

    /// Slate grays: surfaces, borders, body text
    pub mod neutral {
        pub const SHADE_50: &str = "#f8fafc";
        pub const SHADE_100: &str = "#f1f5f9";
        pub const SHADE_200: &str = "#e2e8f0";
        pub const SHADE_300: &str = "#cbd5e1";
        pub const SHADE_400: &str = "#94a3b8";
        pub const SHADE_500: &str = "#64748b";
        pub const SHADE_600: &str = "#475569";
        pub const SHADE_700: &str = "#334155";
        pub const SHADE_800: &str = "#1e293b";
        pub const SHADE_900: &str = "#0f172a";
    }
}

/// Semantic states (status badges, alerts, validation).
pub mod semantic {
    pub const SUCCESS: &str = "#16a34a";
    pub const WARNING: &str = "#d97706";
    pub const ERROR: &str = "#dc2626";
    pub const INFO: &str = "#2563eb";
}

/// Surfaces and their borders.
pub mod surface {
    use super::palette::neutral;

    pub const BASE: &str = "#ffffff";
    pub const RAISED: &str = neutral::SHADE_50;
    pub const SUNKEN: &str = neutral::SHADE_100;
    pub const BORDER: &str = neutral::SHADE_200;
    /// Backdrop behind overlays; opacity is applied by the stylesheet.
    pub const OVERLAY: &str = neutral::SHADE_900;
}

/// Text roles.
pub mod text {
    use super::palette::{accent, neutral};

    pub const PRIMARY: &str = neutral::SHADE_900;
    pub const SECONDARY: &str = neutral::SHADE_600;
    pub const MUTED: &str = neutral::SHADE_400;
    pub const INVERSE: &str = "#ffffff";
    pub const LINK: &str = accent::SHADE_600;
}

/// Brand shortcuts into the palette.
pub mod brand {
    use super::palette::{accent, primary};

    pub const PRIMARY: &str = primary::SHADE_700;
    pub const SECONDARY: &str = accent::SHADE_500;
    pub const ACCENT: &str = accent::SHADE_600;
    pub const DARK: &str = primary::SHADE_900;
    pub const LIGHT: &str = primary::SHADE_50;
}

// ============================================================================
// Token Tree
// ============================================================================

/// A node in the token tree: either a terminal color or a named group.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenNode {
    /// Terminal `#rrggbb` value
    Color(&'static str),
    /// Ordered `(key, child)` entries
    Group(&'static [(&'static str, TokenNode)]),
}

macro_rules! group {
    ($($key:literal => $value:expr),* $(,)?) => {
        TokenNode::Group(&[$(($key, $value)),*])
    };
}

macro_rules! scale {
    ($($shades:ident)::+) => {
        group! {
            "50" => TokenNode::Color($($shades)::+::SHADE_50),
            "100" => TokenNode::Color($($shades)::+::SHADE_100),
            "200" => TokenNode::Color($($shades)::+::SHADE_200),
            "300" => TokenNode::Color($($shades)::+::SHADE_300),
            "400" => TokenNode::Color($($shades)::+::SHADE_400),
            "500" => TokenNode::Color($($shades)::+::SHADE_500),
            "600" => TokenNode::Color($($shades)::+::SHADE_600),
            "700" => TokenNode::Color($($shades)::+::SHADE_700),
            "800" => TokenNode::Color($($shades)::+::SHADE_800),
            "900" => TokenNode::Color($($shades)::+::SHADE_900),
        }
    };
}

/// The complete token tree, keyed by namespace.
pub const TOKENS: TokenNode = group! {
    "primary" => scale!(palette::primary),
    "accent" => scale!(palette::accent),
    "neutral" => scale!(palette::neutral),
    "semantic" => group! {
        "success" => TokenNode::Color(semantic::SUCCESS),
        "warning" => TokenNode::Color(semantic::WARNING),
        "error" => TokenNode::Color(semantic::ERROR),
        "info" => TokenNode::Color(semantic::INFO),
    },
    "surface" => group! {
        "base" => TokenNode::Color(surface::BASE),
        "raised" => TokenNode::Color(surface::RAISED),
        "sunken" => TokenNode::Color(surface::SUNKEN),
        "border" => TokenNode::Color(surface::BORDER),
        "overlay" => TokenNode::Color(surface::OVERLAY),
    },
    "text" => group! {
        "primary" => TokenNode::Color(text::PRIMARY),
        "secondary" => TokenNode::Color(text::SECONDARY),
        "muted" => TokenNode::Color(text::MUTED),
        "inverse" => TokenNode::Color(text::INVERSE),
        "link" => TokenNode::Color(text::LINK),
    },
    "brand" => group! {
        "primary" => TokenNode::Color(brand::PRIMARY),
        "secondary" => TokenNode::Color(brand::SECONDARY),
        "accent" => TokenNode::Color(brand::ACCENT),
        "dark" => TokenNode::Color(brand::DARK),
        "light" => TokenNode::Color(brand::LIGHT),
    },
};

const _: () = assert!(
    node_is_valid(&TOKENS),
    "every color token must be a #rrggbb hex string"
);

static TOKEN_TREE: TokenNode = TOKENS;

/// Returns true for `#` followed by exactly six hex digits.
pub const fn is_hex_color(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return false;
    }
    let mut i = 1;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

const fn node_is_valid(node: &TokenNode) -> bool {
    match node {
        TokenNode::Color(value) => is_hex_color(value),
        TokenNode::Group(entries) => {
            let mut i = 0;
            while i < entries.len() {
                if !node_is_valid(&entries[i].1) {
                    return false;
                }
                i += 1;
            }
            true
        }
    }
}

impl TokenNode {
    /// Child node under `key`, if this is a group containing it.
    pub fn get(&self, key: &str) -> Option<&'static TokenNode> {
        match *self {
            TokenNode::Color(_) => None,
            TokenNode::Group(entries) => entries
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, node)| node),
        }
    }

    /// Terminal value, if this is a color.
    pub fn as_color(&self) -> Option<&'static str> {
        match *self {
            TokenNode::Color(value) => Some(value),
            TokenNode::Group(_) => None,
        }
    }

    /// Flatten to `(dotted path, value)` pairs in declaration order.
    pub fn iter_colors(&self) -> Vec<(String, &'static str)> {
        let mut out = Vec::new();
        collect_colors(*self, String::new(), &mut out);
        out
    }
}

fn collect_colors(node: TokenNode, prefix: String, out: &mut Vec<(String, &'static str)>) {
    match node {
        TokenNode::Color(value) => out.push((prefix, value)),
        TokenNode::Group(entries) => {
            for (key, child) in entries {
                let path = if prefix.is_empty() {
                    (*key).to_string()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_colors(*child, path, out);
            }
        }
    }
}

impl Serialize for TokenNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenNode::Color(value) => serializer.serialize_str(value),
            TokenNode::Group(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, child) in entries.iter() {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

// ============================================================================
// Keyed Access
// ============================================================================

/// Errors from keyed token access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The empty string names no token
    #[error("Empty token path")]
    EmptyPath,

    /// A path segment does not exist in its group
    #[error("Unknown color token: {path}")]
    UnknownKey { path: String },

    /// The path stops at a group (e.g. `brand` instead of `brand.primary`)
    #[error("Token path names a group, not a color: {path}")]
    NotAColor { path: String },

    /// The path continues below a terminal color
    #[error("Token path continues past a color: {path}")]
    NotAGroup { path: String },
}

/// Resolve a dotted path such as `text.secondary` or `primary.500`.
pub fn resolve(path: &str) -> Result<&'static str, TokenError> {
    if path.is_empty() {
        return Err(TokenError::EmptyPath);
    }

    let mut node: &'static TokenNode = &TOKEN_TREE;
    for key in path.split('.') {
        if node.as_color().is_some() {
            return Err(TokenError::NotAGroup {
                path: path.to_string(),
            });
        }
        node = node.get(key).ok_or_else(|| TokenError::UnknownKey {
            path: path.to_string(),
        })?;
    }

    node.as_color().ok_or_else(|| TokenError::NotAColor {
        path: path.to_string(),
    })
}

/// Like [`resolve`], discarding the reason for a miss.
pub fn lookup(path: &str) -> Option<&'static str> {
    resolve(path).ok()
}

/// Render every token as a CSS custom property on `:root`.
///
/// `brand.primary` becomes `--brand-primary`.
pub fn css_custom_properties() -> String {
    let mut css = String::from(":root {\n");
    for (path, value) in TOKEN_TREE.iter_colors() {
        css.push_str(&format!("  --{}: {};\n", path.replace('.', "-"), value));
    }
    css.push_str("}\n");
    css
}

/// Export the token tree as pretty-printed JSON.
pub fn to_json_pretty() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TOKEN_TREE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn brand_shortcuts_resolve() {
        assert_eq!(lookup("brand.primary"), Some(brand::PRIMARY));
        assert_eq!(lookup("brand.primary"), Some("#1e3a5f"));
        assert_eq!(lookup("text.secondary"), Some(text::SECONDARY));
        assert_eq!(lookup("primary.500"), Some(palette::primary::SHADE_500));
    }

    #[test]
    fn top_level_namespaces() {
        let TokenNode::Group(entries) = TOKENS else {
            panic!("root must be a group");
        };
        let names: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec!["primary", "accent", "neutral", "semantic", "surface", "text", "brand"]
        );
    }

    #[test]
    fn every_terminal_is_hex() {
        for (path, value) in TOKENS.iter_colors() {
            assert!(is_hex_color(value), "{} = {}", path, value);
        }
    }

    #[test]
    fn paths_are_unique() {
        let colors = TOKENS.iter_colors();
        let unique: HashSet<_> = colors.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(unique.len(), colors.len());
        // 3 scales of 10 + 4 semantic + 5 surface + 5 text + 5 brand
        assert_eq!(colors.len(), 49);
    }

    #[test]
    fn hex_validation() {
        assert!(is_hex_color("#0a0B0c"));
        assert!(!is_hex_color("0a0b0c"));
        assert!(!is_hex_color("#0a0b0"));
        assert!(!is_hex_color("#0a0b0c0"));
        assert!(!is_hex_color("#0g0b0c"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn resolve_errors() {
        assert_eq!(resolve(""), Err(TokenError::EmptyPath));
        assert_eq!(
            resolve("brand"),
            Err(TokenError::NotAColor { path: "brand".into() })
        );
        assert_eq!(
            resolve("brand.primary.dark"),
            Err(TokenError::NotAGroup { path: "brand.primary.dark".into() })
        );
        assert_eq!(
            resolve("brand.tertiary"),
            Err(TokenError::UnknownKey { path: "brand.tertiary".into() })
        );
        assert_eq!(
            resolve("chrome.primary"),
            Err(TokenError::UnknownKey { path: "chrome.primary".into() })
        );
        assert_eq!(lookup("brand."), None);
    }

    #[test]
    fn css_properties_use_dashed_names() {
        let css = css_custom_properties();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --brand-primary: #1e3a5f;\n"));
        assert!(css.contains("  --accent-500: #14b8a6;\n"));
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn json_export_is_nested() {
        let json = to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["brand"]["primary"], "#1e3a5f");
        assert_eq!(value["neutral"]["900"], "#0f172a");
        assert!(value["semantic"].is_object());
    }
}
