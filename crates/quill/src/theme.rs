//! Color tables supplied by the host theme system.
//!
//! Both tables fall back entry-by-entry to the built-in Rose Pine palette:
//! `Default` carries the palette, and struct-level `#[serde(default)]` fills
//! any key a partial theme file omits.

use serde::{Deserialize, Serialize};

/// Theme colors consumed by the markdown renderer.
///
/// Serialized field names match the host theme keys (`foregroundMuted`,
/// `backgroundAlt`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub border: String,
    pub primary: String,
    pub foreground_muted: String,
    pub background_alt: String,
    pub accent: String,
    pub success: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            border: "#6e6a86".into(),
            primary: "#c4a7e7".into(),
            foreground_muted: "#908caa".into(),
            background_alt: "#26233a".into(),
            accent: "#ebbcba".into(),
            success: "#9ccfd8".into(),
        }
    }
}

/// Semantic color role a highlight category maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Keyword,
    String,
    Comment,
    Number,
    Function,
    Operator,
    Property,
    Type,
    Variable,
    Punctuation,
    Default,
}

/// Display colors for syntax highlight roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyntaxColors {
    pub keyword: String,
    pub string: String,
    pub comment: String,
    pub number: String,
    pub function: String,
    pub operator: String,
    pub property: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub variable: String,
    pub punctuation: String,
    pub default: String,
}

impl Default for SyntaxColors {
    fn default() -> Self {
        Self {
            keyword: "#c4a7e7".into(),     // iris
            string: "#f6c177".into(),      // gold
            comment: "#6e6a86".into(),     // muted
            number: "#ebbcba".into(),      // rose
            function: "#9ccfd8".into(),    // foam
            operator: "#eb6f92".into(),    // love
            property: "#31748f".into(),    // pine
            ty: "#c4a7e7".into(),          // iris
            variable: "#e0def4".into(),    // text
            punctuation: "#908caa".into(), // subtle
            default: "#e0def4".into(),     // text
        }
    }
}

impl SyntaxColors {
    /// Display color for a role.
    pub fn role(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Keyword => &self.keyword,
            ColorRole::String => &self.string,
            ColorRole::Comment => &self.comment,
            ColorRole::Number => &self.number,
            ColorRole::Function => &self.function,
            ColorRole::Operator => &self.operator,
            ColorRole::Property => &self.property,
            ColorRole::Type => &self.ty,
            ColorRole::Variable => &self.variable,
            ColorRole::Punctuation => &self.punctuation,
            ColorRole::Default => &self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_fills_defaults() {
        let colors: ThemeColors = serde_json::from_str(r##"{"primary": "#ffffff"}"##).unwrap();
        assert_eq!(colors.primary, "#ffffff");
        assert_eq!(colors.border, "#6e6a86");
        assert_eq!(colors.success, "#9ccfd8");
    }

    #[test]
    fn test_camel_case_keys() {
        let colors: ThemeColors =
            serde_json::from_str(r##"{"foregroundMuted": "#111111", "backgroundAlt": "#222222"}"##)
                .unwrap();
        assert_eq!(colors.foreground_muted, "#111111");
        assert_eq!(colors.background_alt, "#222222");
    }

    #[test]
    fn test_syntax_type_key() {
        let colors: SyntaxColors = serde_json::from_str(r##"{"type": "#333333"}"##).unwrap();
        assert_eq!(colors.ty, "#333333");
        assert_eq!(colors.keyword, "#c4a7e7");
    }

    #[test]
    fn test_role_lookup() {
        let colors = SyntaxColors::default();
        assert_eq!(colors.role(ColorRole::Comment), "#6e6a86");
        assert_eq!(colors.role(ColorRole::Default), "#e0def4");
    }
}
