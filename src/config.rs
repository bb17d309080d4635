//! Configuration file for the command-line front end.
//!
//! Optional TOML at `<config dir>/mathcolor/config.toml`. Every field has a
//! default, so a missing file or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use mc_render::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, RenderOptions};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

const APP_DIR: &str = "mathcolor";
const CONFIG_FILE: &str = "config.toml";
const RULES_DIR: &str = "rules";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where named rule sets are kept. Defaults to `<data dir>/mathcolor/rules`.
    pub store_dir: Option<PathBuf>,
    /// Deepest bracket nesting drawn as groups.
    pub max_depth: usize,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: "warn".to_string(),
        }
    }
}

/// Default config file path (`~/.config/mathcolor/config.toml` on Linux).
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    /// Load from `path`, or from [`config_path`] when `None`. A file that
    /// does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => config_path()?,
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_DEPTH_LIMIT).contains(&self.max_depth) {
            bail!(
                "Invalid config: max_depth must be between 1 and {MAX_DEPTH_LIMIT}, got {}",
                self.max_depth
            );
        }
        self.level_filter()?;
        Ok(())
    }

    /// The configured log level.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .with_context(|| format!("Invalid config: unknown log_level {:?}", self.log_level))
    }

    /// Resolved rule store directory.
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }
        let data = dirs::data_dir().context("Could not determine data directory")?;
        Ok(data.join(APP_DIR).join(RULES_DIR))
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_depth: self.max_depth,
            ..RenderOptions::default()
        }
    }
}
