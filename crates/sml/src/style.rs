//! Style lookups shared by renderers: colour roles, hex colours, font weight
//! and text alignment.

use std::collections::HashMap;

use crate::ast::Element;
use crate::diagnostics::DiagnosticSink;
use crate::props::get_string;

// ── Color ─────────────────────────────────────────────────────────────────

/// Straight-alpha sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#RRGGBB` or `#AARRGGBB` (alpha first). The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim_start_matches('#');
        let byte = |i: usize| -> Option<u8> {
            let pair = digits.get(i..i + 2)?;
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            u8::from_str_radix(pair, 16).ok()
        };
        match digits.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

// ── Theme ─────────────────────────────────────────────────────────────────

/// Colour roles a `Theme` element may define.
pub const THEME_ROLES: [&str; 25] = [
    "primary",
    "onPrimary",
    "primaryContainer",
    "onPrimaryContainer",
    "surface",
    "onSurface",
    "secondary",
    "onSecondary",
    "secondaryContainer",
    "onSecondaryContainer",
    "tertiary",
    "onTertiary",
    "tertiaryContainer",
    "onTertiaryContainer",
    "outline",
    "outlineVariant",
    "onErrorContainer",
    "onError",
    "inverseSurface",
    "inversePrimary",
    "inverseOnSurface",
    "background",
    "onBackground",
    "error",
    "scrim",
];

/// Role name → colour string, as declared by a `Theme` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    roles: HashMap<&'static str, String>,
}

impl Theme {
    /// Read every known role from `node`; missing roles become empty strings.
    ///
    /// ```sml
    /// Theme { primary: "#FF6200EE" onPrimary: "#FFFFFF" }
    /// ```
    pub fn from_element(node: &Element, sink: &mut dyn DiagnosticSink) -> Self {
        let roles = THEME_ROLES
            .iter()
            .map(|&role| (role, get_string(node, role, "", sink)))
            .collect();
        Self { roles }
    }

    pub fn set(&mut self, role: &str, value: impl Into<String>) {
        if let Some(&role) = THEME_ROLES.iter().find(|&&r| r == role) {
            self.roles.insert(role, value.into());
        }
    }

    /// `None` for names that are not theme roles.
    pub fn role(&self, role: &str) -> Option<&str> {
        if !THEME_ROLES.iter().any(|&r| r == role) {
            return None;
        }
        Some(self.roles.get(role).map(String::as_str).unwrap_or(""))
    }
}

/// Resolve a colour property value.
///
/// `#...` is parsed as hex; anything else is looked up as a theme role, with
/// unknown names (and the empty string) falling back to `default`. Hex that does
/// not parse, including an empty role, yields opaque black.
pub fn resolve_color(theme: &Theme, value: &str, default: &str) -> Color {
    let hex = if value.starts_with('#') {
        value
    } else {
        theme.role(value).unwrap_or(default)
    };
    Color::from_hex(hex).unwrap_or(Color::BLACK)
}

// ── Font weight / alignment ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    /// Case-insensitive, surrounding whitespace ignored. Unknown names are `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "thin" => Self::Thin,
            "extralight" => Self::ExtraLight,
            "light" => Self::Light,
            "medium" => Self::Medium,
            "semibold" => Self::SemiBold,
            "bold" => Self::Bold,
            "extrabold" => Self::ExtraBold,
            "black" => Self::Black,
            _ => Self::Normal,
        }
    }

    /// CSS-style numeric weight.
    pub fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::ExtraLight => 200,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
            Self::Black => 900,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    /// `left`, `center`, `right`; anything else is `Start`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "center" => Self::Center,
            "right" => Self::End,
            _ => Self::Start,
        }
    }
}

/// The node's `fontWeight` property.
pub fn get_font_weight(node: &Element, sink: &mut dyn DiagnosticSink) -> FontWeight {
    FontWeight::from_name(&get_string(node, "fontWeight", "", sink))
}

/// The node's `textAlign` property.
pub fn get_text_align(node: &Element, sink: &mut dyn DiagnosticSink) -> TextAlign {
    TextAlign::from_name(&get_string(node, "textAlign", "", sink))
}

/// The node's colour property `key`, resolved against `theme`.
pub fn get_color(
    node: &Element,
    key: &str,
    theme: &Theme,
    default: &str,
    sink: &mut dyn DiagnosticSink,
) -> Color {
    resolve_color(theme, &get_string(node, key, default, sink), default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    #[test]
    fn hex_forms() {
        assert_eq!(Color::from_hex("#102030"), Some(Color::rgb(0x10, 0x20, 0x30)));
        assert_eq!(Color::from_hex("#80102030"), Some(Color::argb(0x80, 0x10, 0x20, 0x30)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zz0000"), None);
        assert_eq!(Color::from_hex("#+1+2+3"), None);
        assert_eq!(Color::from_hex("#ä00000"), None);
    }

    #[test]
    fn theme_roles_resolve() {
        let node = parse_str(r##"Theme { primary: "#FF0000" onPrimary: "#80FFFFFF" }"##).unwrap();
        let mut warnings: Vec<String> = Vec::new();
        let theme = Theme::from_element(&node, &mut warnings);

        assert_eq!(resolve_color(&theme, "primary", "#000000"), Color::rgb(255, 0, 0));
        assert_eq!(resolve_color(&theme, "onPrimary", "#000000"), Color::argb(0x80, 255, 255, 255));
        assert_eq!(resolve_color(&theme, "#00FF00", "#000000"), Color::rgb(0, 255, 0));
        // unknown name uses the default
        assert_eq!(resolve_color(&theme, "sparkle", "#0000FF"), Color::rgb(0, 0, 255));
        assert_eq!(resolve_color(&theme, "", "#0000FF"), Color::rgb(0, 0, 255));
        // a declared-but-empty role is black
        assert_eq!(resolve_color(&theme, "scrim", "#0000FF"), Color::BLACK);
        assert!(theme.role("sparkle").is_none());
    }

    #[test]
    fn theme_set_ignores_unknown_roles() {
        let mut theme = Theme::default();
        theme.set("surface", "#FFFFFF");
        theme.set("glow", "#FFFFFF");
        assert_eq!(theme.role("surface"), Some("#FFFFFF"));
        assert_eq!(theme.role("outline"), Some(""));
        assert_eq!(theme.role("glow"), None);
    }

    #[test]
    fn font_weight_and_align() {
        let node = parse_str(r#"Text { fontWeight: " SemiBold " textAlign: "CENTER" }"#).unwrap();
        let mut warnings: Vec<String> = Vec::new();
        assert_eq!(get_font_weight(&node, &mut warnings), FontWeight::SemiBold);
        assert_eq!(get_text_align(&node, &mut warnings), TextAlign::Center);

        let plain = parse_str("Text { }").unwrap();
        assert_eq!(get_font_weight(&plain, &mut warnings), FontWeight::Normal);
        assert_eq!(get_text_align(&plain, &mut warnings), TextAlign::Start);
        assert_eq!(FontWeight::from_name("heavy"), FontWeight::Normal);
        assert_eq!(FontWeight::Bold.value(), 700);
        assert_eq!(TextAlign::from_name("right"), TextAlign::End);
    }

    #[test]
    fn color_property() {
        let node = parse_str(r#"Text { color: "primary" }"#).unwrap();
        let mut theme = Theme::default();
        theme.set("primary", "#112233");
        let mut warnings: Vec<String> = Vec::new();
        assert_eq!(get_color(&node, "color", &theme, "#000000", &mut warnings), Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(get_color(&node, "bg", &theme, "#FFFFFF", &mut warnings), Color::rgb(255, 255, 255));
    }
}
