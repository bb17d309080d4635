//! Bracket themes: how a matched open/close pair and its contents are drawn.
//!
//! The set of recognized bracket pairs is fixed. A rule set carries a list
//! of [`MatchColor`] themes, and the renderer hands them out round-robin to
//! bracket characters in the order they first open, so the theme for a group
//! depends on how many distinct brackets have opened before it, not on which
//! bracket it is.

use std::fmt;

use mc_color::Color;
use serde::{Deserialize, Serialize};

use crate::css::Declarations;

/// Every recognized `(open, close)` bracket pair.
pub const BRACKET_PAIRS: [(&str, &str); 6] = [
    ("(", ")"),
    ("[", "]"),
    ("{", "}"),
    ("|", "|"),
    ("⌊", "⌋"),
    ("⌈", "⌉"),
];

/// Closing partner for an opening bracket.
#[must_use]
pub fn closing_for(open: &str) -> Option<&'static str> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|&(_, close)| close)
}

/// Whether `ch` closes some bracket pair.
#[must_use]
pub fn is_closing(ch: &str) -> bool {
    BRACKET_PAIRS.iter().any(|(_, c)| *c == ch)
}

// ─── BorderPosition ──────────────────────────────────────────────────────────

/// Which edges of a bracketed group get a border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BorderPosition {
    #[default]
    None,
    Above,
    Below,
    Box,
}

impl BorderPosition {
    pub const ALL: [Self; 4] = [Self::None, Self::Above, Self::Below, Self::Box];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Above => "Above",
            Self::Below => "Below",
            Self::Box => "Box",
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// The border-style declaration for this position.
    const fn style_property(self) -> (&'static str, &'static str) {
        match self {
            Self::None => ("border-style", "none"),
            Self::Above => ("border-top-style", "solid"),
            Self::Below => ("border-bottom-style", "solid"),
            Self::Box => ("border-style", "solid"),
        }
    }
}

impl fmt::Display for BorderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── MatchColor ──────────────────────────────────────────────────────────────

/// Visual treatment for one nesting theme.
///
/// The paren colors apply to the bracket characters. The inside background
/// and border apply to the span wrapping the bracketed content. With
/// `include_parens` set, the brackets take the inside background instead of
/// their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MatchRecord", rename_all = "camelCase")]
pub struct MatchColor {
    #[serde(rename = "fgParenColor")]
    pub fg_paren: Color,
    #[serde(rename = "bgParenColor")]
    pub bg_paren: Color,
    pub include_parens: bool,
    #[serde(rename = "bgInsideColor")]
    pub bg_inside: Color,
    pub border_position: BorderPosition,
    pub border_thickness: String,
    pub border_color: Color,
}

impl Default for MatchColor {
    fn default() -> Self {
        Self {
            fg_paren: Color::BLACK,
            bg_paren: Color::TRANSPARENT,
            include_parens: false,
            bg_inside: Color::TRANSPARENT,
            border_position: BorderPosition::None,
            border_thickness: String::new(),
            border_color: Color::BLACK,
        }
    }
}

impl MatchColor {
    /// Background for the bracket characters themselves.
    #[must_use]
    pub const fn paren_background(&self) -> Color {
        if self.include_parens {
            self.bg_inside
        } else {
            self.bg_paren
        }
    }

    /// Inline style for the span around a bracketed group.
    ///
    /// Nested groups get a 1px margin so adjacent borders stay visible.
    #[must_use]
    pub fn build_style(&self, nested: bool) -> Declarations {
        let mut decl = Declarations::new();
        if nested {
            decl.push("margin", "1px");
        }
        if !self.bg_inside.is_transparent() {
            decl.push("background-color", self.bg_inside.to_css_alpha_hex());
        }
        let (property, value) = self.border_position.style_property();
        decl.push(property, value);
        if !self.border_thickness.is_empty() {
            decl.push("border-width", &self.border_thickness);
        }
        decl.push("border-color", self.border_color.to_hex());
        decl
    }
}

/// Persisted shape. Missing or `null` colors take the defaults, and an
/// unrecognized border position reads as `None`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchRecord {
    #[serde(default)]
    fg_paren_color: Option<Color>,
    #[serde(default)]
    bg_paren_color: Option<Color>,
    #[serde(default)]
    include_parens: bool,
    #[serde(default)]
    bg_inside_color: Option<Color>,
    #[serde(default)]
    border_position: Option<String>,
    #[serde(default)]
    border_thickness: Option<String>,
    #[serde(default)]
    border_color: Option<Color>,
}

impl From<MatchRecord> for MatchColor {
    fn from(record: MatchRecord) -> Self {
        let defaults = Self::default();
        Self {
            fg_paren: record.fg_paren_color.unwrap_or(defaults.fg_paren),
            bg_paren: record.bg_paren_color.unwrap_or(defaults.bg_paren),
            include_parens: record.include_parens,
            bg_inside: record.bg_inside_color.unwrap_or(defaults.bg_inside),
            border_position: record
                .border_position
                .as_deref()
                .and_then(BorderPosition::from_name)
                .unwrap_or_default(),
            border_thickness: record.border_thickness.unwrap_or_default(),
            border_color: record.border_color.unwrap_or(defaults.border_color),
        }
    }
}
