//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mathcolor")]
#[command(about = "Color-code math expressions with editable character rules")]
#[command(
    long_about = "Renders a math expression as HTML spans, one per character, colored by \
                  pattern rules. Matched brackets wrap their content in an extra span so \
                  nesting is visible. Rule sets can be edited, previewed and kept in a \
                  named store."
)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/mathcolor/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render an expression to HTML spans
    Render {
        /// Expression to render (read from stdin when omitted)
        text: Option<String>,
        /// Stored or built-in rule set to use instead of the current one
        #[arg(long)]
        rules: Option<String>,
        /// Emit character content without HTML escaping
        #[arg(long)]
        no_escape: bool,
    },

    /// Print the built-in default rule set as JSON
    Defaults,

    /// Show the complementary foreground/background pair for a color
    Complement {
        /// Color as hsl(h,s%,l%), rgb(r,g,b), #rrggbb or #rgb
        color: String,
    },

    /// Print a rule set as JSON
    Export {
        /// Stored or built-in rule set to export instead of the current one
        #[arg(long)]
        rules: Option<String>,
    },

    /// Add a rule set from a JSON file to the store and make it current
    Import {
        /// Path to the JSON file
        file: PathBuf,
        /// Replace a stored rule set with the same name
        #[arg(long)]
        force: bool,
    },

    /// Manage stored rule sets
    #[command(subcommand)]
    Store(StoreCommands),

    /// Preview a character rule on top of the current rule set
    Edit {
        /// Characters the rule applies to
        chars: String,
        /// Foreground color
        #[arg(long, default_value = "")]
        fg: String,
        /// Background color
        #[arg(long, default_value = "")]
        bg: String,
        /// Font style or weight (normal, italic, bold, ...)
        #[arg(long, default_value = "")]
        style: String,
        /// Horizontal margin, e.g. 0.222em
        #[arg(long, default_value = "")]
        spacing: String,
        /// Characters that get the complementary colors
        #[arg(long)]
        opposite: Option<String>,
        /// Expression to preview with (defaults to the edited characters)
        #[arg(long)]
        sample: Option<String>,
        /// Store the result under this name and make it current
        #[arg(long)]
        save: Option<String>,
        /// Replace a stored rule set with the same name
        #[arg(long)]
        force: bool,
    },

    /// Change one field of a bracket match theme
    EditMatch {
        /// Theme index (0-based)
        index: usize,
        /// fgParenColor, bgParenColor, includeParens, bgInsideColor,
        /// borderPosition, borderThickness or borderColor
        field: String,
        /// New value
        value: String,
        /// Expression to preview with
        #[arg(long, default_value = "(a[b]c)")]
        sample: String,
        /// Store the result under this name and make it current
        #[arg(long)]
        save: Option<String>,
        /// Replace a stored rule set with the same name
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum StoreCommands {
    /// List stored rule sets
    List,
    /// Store the current rule set under a name and make it the startup set
    Save {
        name: String,
        /// Replace a stored rule set with the same name
        #[arg(long)]
        force: bool,
    },
    /// Make a stored rule set the current one
    Load { name: String },
    /// Delete every stored rule set
    RemoveAll,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_with_flags() {
        let cli = Cli::try_parse_from(["mathcolor", "-vv", "render", "(1+2)", "--no-escape"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render { text, rules, no_escape } => {
                assert_eq!(text.as_deref(), Some("(1+2)"));
                assert_eq!(rules, None);
                assert!(no_escape);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn parses_store_save() {
        let cli = Cli::try_parse_from(["mathcolor", "store", "save", "mine", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Store(StoreCommands::Save { ref name, force: true }) if name == "mine"
        ));
    }

    #[test]
    fn edit_defaults_to_unset_values() {
        let cli = Cli::try_parse_from(["mathcolor", "edit", "xy", "--fg", "#f00"]).unwrap();
        match cli.command {
            Commands::Edit { chars, fg, bg, style, opposite, .. } => {
                assert_eq!(chars, "xy");
                assert_eq!(fg, "#f00");
                assert!(bg.is_empty() && style.is_empty());
                assert_eq!(opposite, None);
            }
            other => panic!("expected edit, got {other:?}"),
        }
    }
}
