//! Pattern rules: how a single matching character is drawn.

use mc_color::Color;
use serde::{Deserialize, Serialize};

use crate::css::Declarations;
use crate::error::Result;
use crate::pattern::Pattern;

/// Style keywords that map to `font-weight` instead of `font-style`.
const WEIGHT_KEYWORDS: [&str; 2] = ["bold", "bolder"];

/// A character pattern plus the colors, font style, and spacing applied to
/// every character it matches.
///
/// `style` is a free-form keyword (`normal`, `italic`, `bold`, ...) and
/// `spacing` a CSS length such as `0.222em`; either may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleRecord")]
pub struct ColorRule {
    pub pattern: Pattern,
    #[serde(rename = "fgColor")]
    pub fg: Color,
    #[serde(rename = "bgColor")]
    pub bg: Color,
    pub style: String,
    pub spacing: String,
}

/// Raw text values for a rule, as they arrive from an editor form.
///
/// Empty color strings mean "unset": black foreground, transparent
/// background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleValues<'a> {
    pub fg: &'a str,
    pub bg: &'a str,
    pub style: &'a str,
    pub spacing: &'a str,
}

impl ColorRule {
    /// Black on transparent, no style, no spacing.
    #[must_use]
    pub const fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            fg: Color::BLACK,
            bg: Color::TRANSPARENT,
            style: String::new(),
            spacing: String::new(),
        }
    }

    /// Build a rule from a pattern source and form values.
    ///
    /// # Errors
    ///
    /// Fails when `pattern` does not compile.
    pub fn from_values(pattern: &str, values: RuleValues<'_>) -> Result<Self> {
        Ok(Self::new(Pattern::new(pattern)?)
            .with_colors(parse_or(values.fg, Color::BLACK), parse_or(values.bg, Color::TRANSPARENT))
            .with_style(values.style)
            .with_spacing(values.spacing))
    }

    #[must_use]
    pub fn with_colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: &str) -> Self {
        style.clone_into(&mut self.style);
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: &str) -> Self {
        spacing.clone_into(&mut self.spacing);
        self
    }

    /// Whether the style keyword is a font weight rather than a font style.
    #[must_use]
    pub fn is_weight(&self) -> bool {
        WEIGHT_KEYWORDS
            .iter()
            .any(|k| self.style.eq_ignore_ascii_case(k))
    }

    /// Inline style for a span drawn with this rule.
    ///
    /// Colors use `#rrggbbaa` so the transparent sentinel renders as no
    /// color at all.
    #[must_use]
    pub fn build_style(&self) -> Declarations {
        let mut decl = Declarations::new();
        decl.push("color", self.fg.to_css_alpha_hex())
            .push("background-color", self.bg.to_css_alpha_hex());
        if !self.style.is_empty() {
            let property = if self.is_weight() { "font-weight" } else { "font-style" };
            decl.push(property, &self.style);
        }
        if !self.spacing.is_empty() {
            decl.push("margin-left", &self.spacing)
                .push("margin-right", &self.spacing);
        }
        decl
    }
}

/// Parse a color from form text, or `unset` when the text is blank.
pub(crate) fn parse_or(text: &str, unset: Color) -> Color {
    if text.trim().is_empty() {
        unset
    } else {
        Color::parse(text)
    }
}

/// Persisted shape. Older files store `null` for unset colors and may omit
/// style or spacing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleRecord {
    pattern: Pattern,
    #[serde(default)]
    fg_color: Option<Color>,
    #[serde(default)]
    bg_color: Option<Color>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    spacing: Option<String>,
}

impl From<RuleRecord> for ColorRule {
    fn from(record: RuleRecord) -> Self {
        Self {
            pattern: record.pattern,
            fg: record.fg_color.unwrap_or(Color::BLACK),
            bg: record.bg_color.unwrap_or(Color::TRANSPARENT),
            style: record.style.unwrap_or_default(),
            spacing: record.spacing.unwrap_or_default(),
        }
    }
}
