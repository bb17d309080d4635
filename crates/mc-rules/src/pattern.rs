//! Character patterns: a compiled regex that remembers its source text.
//!
//! Two patterns are the same rule key when their source text is equal, no
//! matter how they were built. A pattern persists as its bare source string;
//! a source wrapped in `/.../` delimiters is accepted and unwrapped.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RuleError};

/// Regex metacharacters escaped when a single character becomes a pattern.
///
/// `]` and `}` are left alone; they are literals when unpaired.
const SPECIAL: &str = r"\^$.|?*+()[{";

/// Escape a character (one grapheme) so it can be compiled as a literal
/// pattern.
///
/// A single code point is escaped only if it is in [`SPECIAL`]. A grapheme
/// of several code points, such as a bracket with a combining mark, goes
/// through [`regex::escape`].
#[must_use]
pub fn escape_char(ch: &str) -> Cow<'_, str> {
    let mut chars = ch.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if SPECIAL.contains(c) => Cow::Owned(format!("\\{c}")),
        (Some(_), None) | (None, _) => Cow::Borrowed(ch),
        (Some(_), Some(_)) => match regex::escape(ch) {
            escaped if escaped == ch => Cow::Borrowed(ch),
            escaped => Cow::Owned(escaped),
        },
    }
}

/// A compiled single-character pattern.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from its source text, unwrapping `/.../` if present.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] when the source is not a valid
    /// regular expression.
    pub fn new(source: &str) -> Result<Self> {
        let source = strip_delimiters(source);
        Regex::new(source)
            .map(|regex| Self { regex })
            .map_err(|error| RuleError::InvalidPattern {
                source_text: source.to_string(),
                error,
            })
    }

    /// Pattern matching exactly `ch`, with regex metacharacters escaped.
    ///
    /// # Errors
    ///
    /// The escaped text is always a valid regex, so this only fails if the
    /// regex engine rejects it on size.
    pub fn literal(ch: &str) -> Result<Self> {
        Self::new(&escape_char(ch))
    }

    /// The source text this pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn strip_delimiters(source: &str) -> &str {
    if source.len() > 2 && source.starts_with('/') && source.ends_with('/') {
        &source[1..source.len() - 1]
    } else {
        source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source().hash(state);
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(&source).map_err(serde::de::Error::custom)
    }
}
