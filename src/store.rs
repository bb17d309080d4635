//! Named rule sets on disk.
//!
//! One JSON file per rule set, in the versioned envelope written by
//! [`mc_rules::persist`], plus a small `startup` file naming the set that
//! becomes current when the program starts. Files that do not look like a
//! rule set are ignored by listing and loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use mc_rules::builtin::builtin_rules;
use mc_rules::{ColoringRules, default_rules, persist};
use serde_json::Value;
use tracing::{debug, warn};

const EXTENSION: &str = "json";
const STARTUP_FILE: &str = "startup";

#[derive(Debug, Clone)]
pub struct RuleStore {
    dir: PathBuf,
}

impl RuleStore {
    /// A store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all stored rule sets, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read rule store: {}", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            match read_rule_set(&path) {
                Some(rules) => names.push(rules.name),
                None => debug!(path = %path.display(), "skipping non-rule file"),
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    /// Store `rules` under `name` and make it the startup rule set. The
    /// stored copy carries `name` as its rule set name. An existing entry is
    /// only replaced with `overwrite`.
    pub fn save(&self, name: &str, rules: &ColoringRules, overwrite: bool) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            bail!("You must type a name for the rule");
        }
        if self.contains(name) && !overwrite {
            bail!("A rule named {name} already exists (use --force to replace it)");
        }

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create rule store: {}", self.dir.display()))?;
        let mut named = rules.clone();
        named.name = name.to_string();
        let json = persist::to_json(&named)?;
        let path = self.path_for(name);
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(name, path = %path.display(), "saved rule set");
        self.write_startup(name)
    }

    /// A stored rule set, or a built-in one when nothing is stored under
    /// `name`.
    pub fn load(&self, name: &str) -> Result<ColoringRules> {
        read_rule_set(&self.path_for(name))
            .or_else(|| builtin_rules(name))
            .with_context(|| format!("No rule found for {name}"))
    }

    /// Validate the JSON file at `path`, store it under its own name and make
    /// it the startup rule set. Returns that name.
    pub fn import(&self, path: &Path, overwrite: bool) -> Result<String> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        if !persist::looks_like_rule_set(&value) {
            bail!("{} does not contain rules for coloring math", path.display());
        }
        let rules = persist::from_value(value)?;
        let name = rules.name.clone();
        self.save(&name, &rules, overwrite)?;
        Ok(name)
    }

    /// Delete every stored rule set and the startup choice. Returns how many
    /// rule sets were removed.
    pub fn remove_all(&self) -> Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(EXTENSION) {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                removed += 1;
            }
        }
        let startup = self.dir.join(STARTUP_FILE);
        if startup.exists() {
            fs::remove_file(&startup)
                .with_context(|| format!("Failed to remove {}", startup.display()))?;
        }
        Ok(removed)
    }

    pub fn startup_name(&self) -> Result<Option<String>> {
        let path = self.dir.join(STARTUP_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let name = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = name.trim();
        Ok((!name.is_empty()).then(|| name.to_string()))
    }

    /// Make `name` the rule set loaded at startup.
    pub fn set_startup(&self, name: &str) -> Result<()> {
        self.load(name)?;
        self.write_startup(name)
    }

    fn write_startup(&self, name: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create rule store: {}", self.dir.display()))?;
        let path = self.dir.join(STARTUP_FILE);
        fs::write(&path, name).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// The startup rule set, or the built-in defaults when none is chosen
    /// or the chosen one has gone missing.
    pub fn current(&self) -> Result<ColoringRules> {
        let Some(name) = self.startup_name()? else {
            return Ok(default_rules());
        };
        self.load(&name).or_else(|err| {
            warn!(name, error = %err, "startup rule set unavailable, using defaults");
            Ok(default_rules())
        })
    }

    /// File for `name`. Characters other than letters, digits, space, `-`
    /// and `_` are percent-encoded so any name maps to one flat file.
    fn path_for(&self, name: &str) -> PathBuf {
        let mut stem = String::with_capacity(name.len());
        for c in name.chars() {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_') {
                stem.push(c);
            } else {
                let mut buf = [0; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    stem.push_str(&format!("%{byte:02X}"));
                }
            }
        }
        self.dir.join(format!("{stem}.{EXTENSION}"))
    }
}

fn read_rule_set(path: &Path) -> Option<ColoringRules> {
    let text = fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&text).ok()?;
    if !persist::looks_like_rule_set(&value) {
        return None;
    }
    persist::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_for_encodes_separators() {
        let store = RuleStore::new("/store");
        assert_eq!(store.path_for("my rules"), PathBuf::from("/store/my rules.json"));
        assert_eq!(store.path_for("a/b"), PathBuf::from("/store/a%2Fb.json"));
        assert_eq!(store.path_for(".."), PathBuf::from("/store/%2E%2E.json"));
    }

    #[test]
    fn save_renames_stored_copy() {
        let dir = TempDir::new().unwrap();
        let store = RuleStore::new(dir.path());
        store.save("mine", &default_rules(), false).unwrap();

        let loaded = store.load("mine").unwrap();
        assert_eq!(loaded.name, "mine");
        assert_eq!(loaded.patterns, default_rules().patterns);
    }

    #[test]
    fn empty_name_rejected() {
        let dir = TempDir::new().unwrap();
        let store = RuleStore::new(dir.path());
        let err = store.save("  ", &default_rules(), true).unwrap_err();
        assert_eq!(err.to_string(), "You must type a name for the rule");
    }

    #[test]
    fn builtin_names_load_without_a_file() {
        let dir = TempDir::new().unwrap();
        let store = RuleStore::new(dir.path());
        assert_eq!(store.load("default").unwrap(), default_rules());
        assert_eq!(store.load(mc_rules::DEFAULT_RULE_NAME).unwrap(), default_rules());

        store.save("default", &ColoringRules::new("x"), false).unwrap();
        assert!(store.load("default").unwrap().patterns.is_empty());
    }

    #[test]
    fn current_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let store = RuleStore::new(dir.path().join("missing"));
        assert_eq!(store.current().unwrap(), default_rules());
        assert_eq!(store.startup_name().unwrap(), None);
    }
}
