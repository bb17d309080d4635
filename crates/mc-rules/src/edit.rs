//! Editing helpers: field setters, temporary per-character rule sets, and
//! the preview merge used before committing an edit.
//!
//! Field setters replace string-keyed property paths with two small enums.
//! A front end maps its input widgets to a [`RuleField`] or [`MatchField`]
//! and hands over the raw text; `apply` does the parsing.

use mc_color::Color;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Result, RuleError};
use crate::matching::{BorderPosition, MatchColor};
use crate::pattern::{Pattern, escape_char};
use crate::registry::ColoringRules;
use crate::rule::{ColorRule, RuleValues, parse_or};

/// Stand-in character for an empty edit box. It cannot be typed, so the
/// rules built for it never match real input.
pub const UNTYPEABLE: &str = "\u{FFFF}";

/// Name given to scratch rule sets built during editing.
const TEMP_NAME: &str = "temp";

// ─── Pattern Rule Fields ─────────────────────────────────────────────────────

/// An editable property of a [`ColorRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    Foreground,
    Background,
    Style,
    Spacing,
}

impl RuleField {
    pub const ALL: [Self; 4] = [Self::Foreground, Self::Background, Self::Style, Self::Spacing];

    /// Persisted property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Foreground => "fgColor",
            Self::Background => "bgColor",
            Self::Style => "style",
            Self::Spacing => "spacing",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Set this field on `rule` from raw text. Blank colors reset to the
    /// rule defaults.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches [`MatchField::apply`].
    pub fn apply(self, rule: &mut ColorRule, value: &str) -> Result<()> {
        match self {
            Self::Foreground => rule.fg = parse_or(value, Color::BLACK),
            Self::Background => rule.bg = parse_or(value, Color::TRANSPARENT),
            Self::Style => value.clone_into(&mut rule.style),
            Self::Spacing => value.clone_into(&mut rule.spacing),
        }
        Ok(())
    }
}

// ─── Bracket Theme Fields ────────────────────────────────────────────────────

/// An editable property of a [`MatchColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    ParenForeground,
    ParenBackground,
    IncludeParens,
    InsideBackground,
    BorderPosition,
    BorderThickness,
    BorderColor,
}

impl MatchField {
    pub const ALL: [Self; 7] = [
        Self::ParenForeground,
        Self::ParenBackground,
        Self::IncludeParens,
        Self::InsideBackground,
        Self::BorderPosition,
        Self::BorderThickness,
        Self::BorderColor,
    ];

    /// Persisted property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ParenForeground => "fgParenColor",
            Self::ParenBackground => "bgParenColor",
            Self::IncludeParens => "includeParens",
            Self::InsideBackground => "bgInsideColor",
            Self::BorderPosition => "borderPosition",
            Self::BorderThickness => "borderThickness",
            Self::BorderColor => "borderColor",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Set this field on `theme` from raw text.
    ///
    /// # Errors
    ///
    /// - [`RuleError::FieldType`] if `includeParens` is not `true`/`false`.
    /// - [`RuleError::InvalidValue`] for an unknown border position.
    pub fn apply(self, theme: &mut MatchColor, value: &str) -> Result<()> {
        match self {
            Self::ParenForeground => theme.fg_paren = parse_or(value, Color::BLACK),
            Self::ParenBackground => theme.bg_paren = parse_or(value, Color::TRANSPARENT),
            Self::IncludeParens => {
                theme.include_parens =
                    value.trim().parse().map_err(|_| RuleError::FieldType {
                        field: self.name(),
                        expected: "true or false",
                    })?;
            }
            Self::InsideBackground => theme.bg_inside = parse_or(value, Color::TRANSPARENT),
            Self::BorderPosition => {
                theme.border_position = BorderPosition::from_name(value.trim()).ok_or_else(|| {
                    RuleError::InvalidValue {
                        field: self.name(),
                        value: value.to_string(),
                    }
                })?;
            }
            Self::BorderThickness => value.trim().clone_into(&mut theme.border_thickness),
            Self::BorderColor => theme.border_color = parse_or(value, Color::BLACK),
        }
        Ok(())
    }
}

impl ColoringRules {
    /// A copy of this rule set with one field of bracket theme `index` set.
    ///
    /// # Errors
    ///
    /// [`RuleError::NoSuchMatch`] if `index` is out of range, or whatever
    /// [`MatchField::apply`] reports for the value.
    pub fn with_match_field(&self, index: usize, field: MatchField, value: &str) -> Result<Self> {
        let mut edited = self.clone();
        let theme = edited
            .matches
            .get_mut(index)
            .ok_or(RuleError::NoSuchMatch(index))?;
        field.apply(theme, value)?;
        Ok(edited)
    }
}

// ─── Scratch Rule Sets ───────────────────────────────────────────────────────

fn chars_or_placeholder(chars: &str) -> &str {
    if chars.is_empty() { UNTYPEABLE } else { chars }
}

/// One rule per character of `chars`, all with the same form values.
///
/// An empty `chars` yields a single rule for [`UNTYPEABLE`]. Repeated
/// characters collapse to one rule.
///
/// # Errors
///
/// Fails only if an escaped character is rejected by the regex engine.
pub fn rules_for_chars(chars: &str, values: RuleValues<'_>) -> Result<ColoringRules> {
    let mut rules = ColoringRules::new(TEMP_NAME);
    for ch in chars_or_placeholder(chars).graphemes(true) {
        let rule = ColorRule::from_values(&escape_char(ch), values)?;
        rules.replace(ch, rule);
    }
    Ok(rules)
}

/// Rules drawing `chars` in the complementary pair of `source`'s background.
///
/// A transparent background counts as white. Style and spacing are copied
/// from `source`.
///
/// # Errors
///
/// Fails only if an escaped character is rejected by the regex engine.
pub fn complementary_rules(chars: &str, source: &ColorRule) -> Result<ColoringRules> {
    let base = if source.bg.is_transparent() {
        Color::hsl(0.0, 0.0, 100.0)
    } else {
        source.bg
    };
    let (fg, bg) = base.to_complementary();

    let mut rules = ColoringRules::new(TEMP_NAME);
    for ch in chars_or_placeholder(chars).graphemes(true) {
        let rule = ColorRule::new(Pattern::literal(ch)?)
            .with_colors(fg, bg)
            .with_style(&source.style)
            .with_spacing(&source.spacing);
        rules.replace(ch, rule);
    }
    Ok(rules)
}

/// The rule set an edit would produce: `edited` over `opposite` over
/// `current`. None of the inputs change; committing means swapping the
/// shared handle to the returned value.
#[must_use]
pub fn preview(current: &ColoringRules, edited: &ColoringRules, opposite: &ColoringRules) -> ColoringRules {
    current.merge(&opposite.merge(edited))
}
