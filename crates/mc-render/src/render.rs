//! The span-rendering engine.
//!
//! A single left-to-right pass with recursive descent at each opening
//! bracket. Each level knows only the closing character it is waiting for;
//! seeing it ends the level, and the caller draws the close with the
//! close-side bracket rule. Brackets are never checked for balance.
//!
//! Bracket themes are handed out round-robin. The first time a bracket
//! character opens during a render it claims the next theme slot, and every
//! later open of that character reuses the slot. So in `(a[b]c)` the
//! parentheses take theme 0 and the square brackets theme 1, whatever the
//! nesting.
//!
//! Rendering reads the rule set and nothing else; the same text and rules
//! always produce the same markup.

use std::collections::HashMap;

use mc_rules::{ColoringRules, matching};
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::markup::{Markup, Node};

/// Default limit on bracket nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard ceiling on [`RenderOptions::max_depth`]. Each nesting level costs a
/// stack frame, so larger settings are clamped to this.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Knobs for a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest bracket nesting drawn as groups. Opens beyond this are drawn
    /// as ordinary characters. Clamped to [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
    /// Escape HTML-special characters in character content.
    pub escape_html: bool,
}

impl RenderOptions {
    /// `max_depth` with the ceiling applied.
    #[must_use]
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            escape_html: true,
        }
    }
}

/// Render `text` into a styled markup tree.
#[must_use]
pub fn render(text: &str, rules: &ColoringRules, options: &RenderOptions) -> Markup {
    let mut renderer = Renderer {
        chars: text.graphemes(true).collect(),
        pos: 0,
        rules,
        max_depth: options.effective_max_depth(),
        depth: 0,
        slots: HashMap::new(),
        next_slot: 0,
        guard_tripped: false,
    };
    let (nodes, _) = renderer.level(None);
    let markup = Markup::new(nodes);
    debug!(
        chars = renderer.chars.len(),
        nodes = markup.node_count(),
        rules = %rules.name,
        "rendered"
    );
    markup
}

/// Render `text` straight to HTML spans.
#[must_use]
pub fn render_html(text: &str, rules: &ColoringRules, options: &RenderOptions) -> String {
    render(text, rules, options).to_html(options.escape_html)
}

struct Renderer<'a> {
    chars: Vec<&'a str>,
    pos: usize,
    rules: &'a ColoringRules,
    max_depth: usize,
    depth: usize,
    /// Theme slot claimed by each bracket character, in first-open order.
    slots: HashMap<&'a str, usize>,
    next_slot: usize,
    guard_tripped: bool,
}

impl<'a> Renderer<'a> {
    /// Render until `close` (left unconsumed) or end of input. The flag is
    /// true when `close` was found.
    fn level(&mut self, close: Option<&str>) -> (Vec<Node>, bool) {
        let mut out = Vec::new();
        while let Some(&ch) = self.chars.get(self.pos) {
            if close == Some(ch) {
                return (out, true);
            }
            self.pos += 1;
            match self.opening(ch) {
                Some((close_ch, slot)) => self.bracket(ch, close_ch, slot, &mut out),
                None => out.push(Node::styled(ch, self.rules.match_char(ch))),
            }
        }
        (out, false)
    }

    /// If `ch` starts a group here, its closing partner and theme slot.
    fn opening(&mut self, ch: &'a str) -> Option<(&'static str, usize)> {
        let close = matching::closing_for(ch)?;
        if self.rules.matches.is_empty() {
            return None;
        }
        if self.depth >= self.max_depth {
            if !self.guard_tripped {
                warn!(max_depth = self.max_depth, "bracket nesting too deep, drawing plainly");
                self.guard_tripped = true;
            }
            return None;
        }
        let slot = *self.slots.entry(ch).or_insert_with(|| {
            let slot = self.next_slot;
            self.next_slot += 1;
            slot
        });
        Some((close, slot))
    }

    fn bracket(&mut self, open: &'a str, close: &str, slot: usize, out: &mut Vec<Node>) {
        out.push(Node::styled(open, self.rules.match_open(open, slot).as_ref()));

        self.depth += 1;
        let (inner, closed) = self.level(Some(close));
        self.depth -= 1;

        if !closed {
            // Ran off the end: no group, and nothing to close.
            out.extend(inner);
            return;
        }

        match self.rules.match_color(slot) {
            Some(theme) if !inner.is_empty() => out.push(Node::Group {
                style: theme.build_style(self.depth > 0).into_string(),
                children: inner,
            }),
            _ => out.extend(inner),
        }

        let close_ch = self.chars[self.pos];
        self.pos += 1;
        out.push(Node::styled(close_ch, self.rules.match_close(close_ch, slot).as_ref()));
    }
}
