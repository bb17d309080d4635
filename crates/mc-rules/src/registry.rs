//! The rule set: ordered pattern rules plus bracket themes.
//!
//! Pattern rules are tried front to back and the first hit wins, so list
//! order is priority. [`ColoringRules::replace`] overwrites a rule with the
//! same pattern source in place, or puts a new one at the front where it
//! outranks everything already present.
//!
//! Editing never happens through a shared reference. Callers clone (or
//! [`merge`](ColoringRules::merge), which clones) and then swap the result
//! in, leaving the old value intact for anyone still reading it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::{self, MatchColor};
use crate::pattern::{Pattern, escape_char};
use crate::rule::ColorRule;

/// A named, ordered collection of pattern rules and bracket themes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringRules {
    pub name: String,
    pub patterns: Vec<ColorRule>,
    pub matches: Vec<MatchColor>,
}

impl ColoringRules {
    /// An empty rule set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patterns: Vec::new(),
            matches: Vec::new(),
        }
    }

    // ─── Lookup ──────────────────────────────────────────────────────────

    /// First pattern rule that matches `ch`.
    ///
    /// Single regex metacharacters are escaped before testing, so `(` is
    /// looked up as `\(`.
    #[must_use]
    pub fn match_char(&self, ch: &str) -> Option<&ColorRule> {
        let probe = escape_char(ch);
        self.patterns.iter().find(|rule| rule.pattern.is_match(&probe))
    }

    /// Bracket theme for a round-robin slot. Wraps around the theme list;
    /// `None` only when there are no themes at all.
    #[must_use]
    pub fn match_color(&self, match_index: usize) -> Option<&MatchColor> {
        match_index
            .checked_rem(self.matches.len())
            .and_then(|i| self.matches.get(i))
    }

    /// Rule for an opening bracket drawn with theme `match_index`.
    ///
    /// `None` if `ch` is not an opening bracket or there are no themes.
    #[must_use]
    pub fn match_open(&self, ch: &str, match_index: usize) -> Option<ColorRule> {
        matching::closing_for(ch)?;
        self.bracket_rule(ch, match_index)
    }

    /// Rule for a closing bracket drawn with theme `match_index`.
    ///
    /// `None` if `ch` is not a closing bracket or there are no themes.
    #[must_use]
    pub fn match_close(&self, ch: &str, match_index: usize) -> Option<ColorRule> {
        if !matching::is_closing(ch) {
            return None;
        }
        self.bracket_rule(ch, match_index)
    }

    /// The character's own rule (for style and spacing) recolored with the
    /// theme's paren colors.
    fn bracket_rule(&self, ch: &str, match_index: usize) -> Option<ColorRule> {
        let theme = self.match_color(match_index)?;
        let base = match self.match_char(ch) {
            Some(rule) => rule.clone(),
            // Bracket characters always escape to a valid literal.
            None => ColorRule::new(Pattern::literal(ch).ok()?),
        };
        Some(base.with_colors(theme.fg_paren, theme.paren_background()))
    }

    // ─── Editing ─────────────────────────────────────────────────────────

    /// Install `rule` as the rule for `ch`.
    ///
    /// `ch` is escaped the same way [`Pattern::literal`] escapes it and
    /// compared against existing pattern sources. A hit is overwritten in
    /// place; otherwise the rule is inserted at the front.
    pub fn replace(&mut self, ch: &str, rule: ColorRule) {
        let key = escape_char(ch);
        if let Some(slot) = self
            .patterns
            .iter_mut()
            .find(|existing| existing.pattern.source() == key)
        {
            *slot = rule;
        } else {
            self.patterns.insert(0, rule);
        }
    }

    /// A new rule set: a clone of `self` with every pattern rule of `overlay`
    /// applied through [`replace`](Self::replace). Neither input changes.
    ///
    /// Only pattern rules are merged; `self` keeps its own bracket themes.
    #[must_use]
    pub fn merge(&self, overlay: &Self) -> Self {
        let mut merged = self.clone();
        for rule in &overlay.patterns {
            merged.replace(rule.pattern.source(), rule.clone());
        }
        debug!(
            base = %self.name,
            overlay = %overlay.name,
            patterns = merged.patterns.len(),
            "merged rule sets"
        );
        merged
    }
}
