//! # mc-render: styled span rendering for math expressions
//!
//! Turns a string and a [`ColoringRules`](mc_rules::ColoringRules) snapshot
//! into a tree of styled spans, with an extra wrapper span around the
//! content of every matched bracket pair.
//!
//! ```text
//! "(a[b]c)"
//!     │ render
//!     ▼
//! (  group[theme 0, top]{ a  [  group[theme 1, nested]{ b }  ]  c }  )
//! ```
//!
//! Rendering is a pure function of its inputs. Hold an `Arc` snapshot from
//! [`RulesHandle`](mc_rules::RulesHandle) for the duration of a render and
//! concurrent edits cannot affect it.

pub mod markup;
pub mod render;

pub use markup::{Markup, Node};
pub use render::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, RenderOptions, render, render_html};
