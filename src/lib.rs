//! mathcolor: command-line front end for the math coloring engine.
//!
//! The engine lives in the `mc-color`, `mc-rules` and `mc-render` crates.
//! This crate adds the pieces that touch the outside world: argument
//! parsing, the config file, and the on-disk store of named rule sets.

pub mod cli;
pub mod config;
pub mod store;

pub use config::Config;
pub use store::RuleStore;
