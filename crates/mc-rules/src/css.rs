//! Inline style declaration builder.

use std::fmt::{self, Display, Write};

/// An ordered list of CSS declarations rendered as `prop: value;` pairs
/// separated by single spaces, ready for a `style="..."` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    text: String,
}

impl Declarations {
    #[must_use]
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Append one declaration.
    pub fn push(&mut self, property: &str, value: impl Display) -> &mut Self {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(self.text, "{property}: {value};");
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
