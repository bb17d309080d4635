//! The built-in rule set used when nothing else has been loaded.
//!
//! Digits 3 and 8 get swapped red/green treatment (the pair most often
//! confused), letters are italic, operators get breathing room, and
//! relations are drawn white-on-dark. Three bracket themes cycle through
//! nested groups: a thin box, an underline, and a heavier box.

use mc_color::Color;

use crate::matching::{BorderPosition, MatchColor};
use crate::pattern::Pattern;
use crate::registry::ColoringRules;
use crate::rule::ColorRule;

/// Name of the built-in rule set.
pub const DEFAULT_RULE_NAME: &str = "default coloring rules";

/// Look up a built-in rule set by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_rules(name: &str) -> Option<ColoringRules> {
    match name {
        "default" | DEFAULT_RULE_NAME => Some(default_rules()),
        _ => None,
    }
}

/// List all built-in rule set names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &[DEFAULT_RULE_NAME]
}

/// The default rule set.
#[must_use]
pub fn default_rules() -> ColoringRules {
    let green = Color::hsl(130.0, 70.0, 43.0);
    let red = Color::hsl(4.0, 90.0, 50.0);
    let white = Color::hsl(0.0, 0.0, 100.0);
    let paren_bg = Color::hsl(0.0, 0.0, 40.0);

    let mut rules = ColoringRules::new(DEFAULT_RULE_NAME);
    rules.patterns = vec![
        fixed("3").with_colors(green, red).with_style("normal"),
        fixed("8").with_colors(red, green).with_style("normal"),
        fixed(r"\(")
            .with_colors(white, paren_bg)
            .with_style("normal")
            .with_spacing("0.167em"),
        fixed(r"\)")
            .with_colors(white, paren_bg)
            .with_style("normal")
            .with_spacing("0.167em"),
        fixed("[0-9]").with_style("normal"),
        fixed("[a-zA-Z]").with_style("italic"),
        fixed(r"\+|×|÷|±").with_style("normal").with_spacing(".222em"),
        fixed("-").with_style("bold").with_spacing(".222em"),
        fixed(r"\|").with_style("bold"),
        fixed("<|=|>|≠|≤|≥")
            .with_colors(white, Color::hsl(160.0, 10.0, 10.0))
            .with_style("normal")
            .with_spacing(".278em"),
    ];

    let paren_fg = Color::hsl(240.0, 100.0, 70.0);
    let paren_bg = Color::hsl(0.0, 0.0, 60.0);
    let border = Color::hsl(0.0, 0.0, 50.0);
    let theme = |bg_inside: Color, position: BorderPosition, thickness: &str| MatchColor {
        fg_paren: paren_fg,
        bg_paren: paren_bg,
        include_parens: false,
        bg_inside,
        border_position: position,
        border_thickness: thickness.to_string(),
        border_color: border,
    };
    rules.matches = vec![
        theme(Color::hsl(240.0, 100.0, 95.0), BorderPosition::Box, "0.111em"),
        theme(Color::hsl(270.0, 100.0, 95.0), BorderPosition::Below, "2px"),
        theme(Color::TRANSPARENT, BorderPosition::Box, "0.222em"),
    ];
    rules
}

fn fixed(source: &str) -> ColorRule {
    ColorRule::new(Pattern::new(source).expect("built-in pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            let rules = builtin_rules(name).unwrap_or_else(|| panic!("{name} should resolve"));
            assert_eq!(rules.name, *name);
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_rules("nonexistent").is_none());
    }

    #[test]
    fn default_alias() {
        assert_eq!(builtin_rules("default"), Some(default_rules()));
    }

    #[test]
    fn default_shape() {
        let rules = default_rules();
        assert_eq!(rules.patterns.len(), 10);
        assert_eq!(rules.matches.len(), 3);
    }

    #[test]
    fn pattern_sources_are_unique() {
        let rules = default_rules();
        let sources: HashSet<_> = rules.patterns.iter().map(|r| r.pattern.source()).collect();
        assert_eq!(sources.len(), rules.patterns.len());
    }

    #[test]
    fn three_and_eight_swap_colors() {
        let rules = default_rules();
        let three = rules.match_char("3").unwrap();
        let eight = rules.match_char("8").unwrap();
        assert_eq!(three.fg, eight.bg);
        assert_eq!(three.bg, eight.fg);
    }

    #[test]
    fn specific_rules_outrank_generic() {
        let rules = default_rules();
        assert_eq!(rules.match_char("3").unwrap().pattern.source(), "3");
        assert_eq!(rules.match_char("5").unwrap().pattern.source(), "[0-9]");
        assert_eq!(rules.match_char("(").unwrap().spacing, "0.167em");
    }

    #[test]
    fn operator_styles() {
        let rules = default_rules();
        assert_eq!(rules.match_char("x").unwrap().style, "italic");
        assert!(rules.match_char("-").unwrap().is_weight());
        assert_eq!(rules.match_char("÷").unwrap().spacing, ".222em");
        assert_eq!(rules.match_char("≤").unwrap().spacing, ".278em");
        assert!(rules.match_char("|").unwrap().is_weight());
        assert!(rules.match_char("?").is_none());
    }

    #[test]
    fn themes_cycle_through_borders() {
        let positions: Vec<_> = default_rules()
            .matches
            .iter()
            .map(|m| m.border_position)
            .collect();
        assert_eq!(
            positions,
            [BorderPosition::Box, BorderPosition::Below, BorderPosition::Box]
        );
    }
}
