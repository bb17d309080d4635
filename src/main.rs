// SPDX-License-Identifier: MIT
//
// mathcolor: color-coded rendering of math expressions.
//
// This binary wires the engine crates to a command line:
//
//   mc-color  → color parsing, conversion, contrast and complements
//   mc-rules  → pattern rules, bracket themes, persistence, editing
//   mc-render → span tree and HTML output
//
// Every command follows the same path:
//
//   args → Config (TOML) → RuleStore (current / named rule set)
//        → RulesHandle snapshot → render / edit → stdout
//
// Logs go to stderr so rendered HTML on stdout stays clean.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;
use tracing::level_filters::LevelFilter;

use mathcolor::cli::{Cli, Commands, StoreCommands};
use mathcolor::{Config, RuleStore};
use mc_color::{Color, CssFormat};
use mc_render::{RenderOptions, render_html};
use mc_rules::builtin::builtin_names;
use mc_rules::edit::{self, MatchField};
use mc_rules::{ColoringRules, RuleValues, RulesHandle, default_rules, persist};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config)?;

    let store = RuleStore::new(config.store_dir()?);
    debug!(store = %store.dir().display(), "using rule store");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &config, &store, &mut out)
}

fn init_logging(verbose: u8, config: &Config) -> Result<()> {
    let level = match verbose {
        0 => config.level_filter()?,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

// ─── Command Dispatch ───────────────────────────────────────────────────────

fn run(command: Commands, config: &Config, store: &RuleStore, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Render { text, rules, no_escape } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let rules = match rules {
                Some(name) => store.load(&name)?,
                None => store.current()?,
            };
            let options = RenderOptions {
                escape_html: !no_escape,
                ..config.render_options()
            };
            writeln!(out, "{}", render_html(&text, &rules, &options))?;
        }

        Commands::Defaults => {
            writeln!(out, "{}", persist::to_json(&default_rules())?)?;
        }

        Commands::Complement { color } => {
            let (fg, bg) = Color::parse(&color).to_complementary();
            writeln!(out, "fg: {} ({})", fg.to_css(CssFormat::Hsl), fg.to_hex())?;
            writeln!(out, "bg: {} ({})", bg.to_css(CssFormat::Hsl), bg.to_hex())?;
        }

        Commands::Export { rules } => {
            let rules = match rules {
                Some(name) => store.load(&name)?,
                None => store.current()?,
            };
            writeln!(out, "{}", persist::to_json(&rules)?)?;
        }

        Commands::Import { file, force } => {
            let name = store.import(&file, force)?;
            writeln!(out, "Imported {name}")?;
        }

        Commands::Store(cmd) => run_store(cmd, store, out)?,

        Commands::Edit {
            chars,
            fg,
            bg,
            style,
            spacing,
            opposite,
            sample,
            save,
            force,
        } => {
            let handle = RulesHandle::new(store.current()?);
            let values = RuleValues {
                fg: &fg,
                bg: &bg,
                style: &style,
                spacing: &spacing,
            };
            let edited = edit::rules_for_chars(&chars, values)?;
            let opposite = match (opposite, edited.patterns.first()) {
                (Some(other), Some(source)) => edit::complementary_rules(&other, source)?,
                _ => ColoringRules::new("temp"),
            };
            handle.swap(edit::preview(&handle.snapshot(), &edited, &opposite));

            let sample = sample.unwrap_or(chars);
            preview_and_save(&handle, &sample, config, store, save.as_deref(), force, out)?;
        }

        Commands::EditMatch {
            index,
            field,
            value,
            sample,
            save,
            force,
        } => {
            let Some(field) = MatchField::from_name(&field) else {
                let names: Vec<_> = MatchField::ALL.into_iter().map(MatchField::name).collect();
                bail!("Unknown match field {field:?} (expected one of: {})", names.join(", "));
            };
            let handle = RulesHandle::new(store.current()?);
            let edited = handle
                .snapshot()
                .with_match_field(index, field, &value)
                .with_context(|| format!("Could not set {} on theme {index}", field.name()))?;
            handle.swap(edited);

            preview_and_save(&handle, &sample, config, store, save.as_deref(), force, out)?;
        }
    }
    Ok(())
}

fn run_store(command: StoreCommands, store: &RuleStore, out: &mut impl Write) -> Result<()> {
    match command {
        StoreCommands::List => {
            let startup = store.startup_name()?;
            let names = store.list()?;
            if names.is_empty() {
                writeln!(out, "No stored rule sets in {}", store.dir().display())?;
            }
            let marker = |name: &str| if startup.as_deref() == Some(name) { "*" } else { " " };
            for name in &names {
                writeln!(out, "{} {name}", marker(name))?;
            }
            for name in builtin_names() {
                if !names.iter().any(|n| n == name) {
                    writeln!(out, "{} {name} (built-in)", marker(name))?;
                }
            }
        }
        StoreCommands::Save { name, force } => {
            store.save(&name, &store.current()?, force)?;
            writeln!(out, "Saved {}", name.trim())?;
        }
        StoreCommands::Load { name } => {
            store.set_startup(&name)?;
            writeln!(out, "{name} is now the current rule set")?;
        }
        StoreCommands::RemoveAll => {
            let removed = store.remove_all()?;
            writeln!(out, "Removed {removed} rule set(s)")?;
        }
    }
    Ok(())
}

/// Print the sample rendered with the handle's current rules, then store
/// them when a name was given. Unsaved edits are flagged on stderr.
fn preview_and_save(
    handle: &RulesHandle,
    sample: &str,
    config: &Config,
    store: &RuleStore,
    save: Option<&str>,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    let rules = handle.snapshot();
    writeln!(out, "{}", render_html(sample, &rules, &config.render_options()))?;

    if let Some(name) = save {
        store.save(name, &rules, force)?;
        handle.mark_saved(true);
        writeln!(out, "Saved {}", name.trim())?;
    }
    if let Some(notice) = unsaved_notice(handle) {
        eprintln!("{notice}");
    }
    Ok(())
}

fn unsaved_notice(handle: &RulesHandle) -> Option<String> {
    (!handle.is_saved()).then(|| {
        format!("{} (NOT SAVED): pass --save NAME to keep this edit", handle.snapshot().name)
    })
}

fn read_stdin() -> Result<String> {
    let text = io::read_to_string(io::stdin()).context("Failed to read expression from stdin")?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}
