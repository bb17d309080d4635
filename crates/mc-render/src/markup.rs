//! Styled markup tree and its HTML form.
//!
//! Every character becomes its own span, styled or bare. Bracketed content
//! is wrapped in one more span carrying the group style. Nothing else is
//! emitted, so the HTML can be pasted straight into an editable region.

use mc_rules::ColorRule;

/// One node of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single character (one grapheme cluster) and its inline style, if
    /// any rule matched it.
    Char { text: String, style: Option<String> },
    /// The content between a matched bracket pair.
    Group { style: String, children: Vec<Self> },
}

impl Node {
    /// A character drawn with `rule`, or bare when there is none.
    #[must_use]
    pub fn styled(text: &str, rule: Option<&ColorRule>) -> Self {
        Self::Char {
            text: text.to_string(),
            style: rule.map(|r| r.build_style().into_string()),
        }
    }

    /// Number of nodes in this subtree, counting `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Char { .. } => 1,
            Self::Group { children, .. } => 1 + children.iter().map(Self::count).sum::<usize>(),
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Self::Char { text, .. } => out.push_str(text),
            Self::Group { children, .. } => children.iter().for_each(|c| c.write_text(out)),
        }
    }

    fn write_html(&self, out: &mut String, escape: bool) {
        match self {
            Self::Char { text, style } => {
                match style {
                    Some(style) => open_span(out, style),
                    None => out.push_str("<span>"),
                }
                if escape {
                    escape_into(out, text);
                } else {
                    out.push_str(text);
                }
                out.push_str("</span>");
            }
            Self::Group { style, children } => {
                open_span(out, style);
                for child in children {
                    child.write_html(out, escape);
                }
                out.push_str("</span>");
            }
        }
    }
}

/// A rendered expression: a sequence of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    nodes: Vec<Node>,
}

impl Markup {
    #[must_use]
    pub const fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total node count across the whole tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::count).sum()
    }

    /// The characters of the tree with all styling removed.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_text(&mut out);
        }
        out
    }

    /// HTML span markup. With `escape`, `&`, `<`, `>` and `"` in character
    /// content become entities; style attributes are always escaped.
    #[must_use]
    pub fn to_html(&self, escape: bool) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out, escape);
        }
        out
    }
}

fn open_span(out: &mut String, style: &str) {
    out.push_str("<span style=\"");
    escape_into(out, style);
    out.push_str("\">");
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
