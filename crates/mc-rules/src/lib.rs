//! # mc-rules: character coloring rules
//!
//! Decides how each character of a math expression is drawn.
//!
//! # Architecture
//!
//! ```text
//! pattern.rs:   Pattern (regex + source text, escaping of single chars)
//!     │
//!     ▼
//! rule.rs:      ColorRule (pattern → colors, font style, spacing)
//! matching.rs:  MatchColor (bracket theme) + fixed bracket-pair table
//!     │
//!     ▼
//! registry.rs:  ColoringRules (first-match lookup, replace, merge)
//!     │
//!     ├──► builtin.rs:  default rule set
//!     ├──► persist.rs:  versioned JSON, legacy upgrade
//!     ├──► edit.rs:     field setters, scratch rule sets, preview
//!     └──► handle.rs:   shared current rule set (snapshot / swap)
//! ```
//!
//! Every style a rule produces is an inline CSS declaration list built by
//! [`css::Declarations`].

pub mod builtin;
pub mod css;
pub mod edit;
pub mod error;
pub mod handle;
pub mod matching;
pub mod pattern;
pub mod persist;
pub mod registry;
pub mod rule;

pub use builtin::{DEFAULT_RULE_NAME, default_rules};
pub use error::{Result, RuleError};
pub use handle::RulesHandle;
pub use matching::{BorderPosition, MatchColor};
pub use pattern::Pattern;
pub use registry::ColoringRules;
pub use rule::{ColorRule, RuleValues};
