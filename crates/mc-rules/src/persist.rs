//! Reading and writing rule sets as JSON.
//!
//! The current format wraps the rule set in a version envelope:
//!
//! ```text
//! { "version": "0.2", "data": { "name": ..., "patterns": [...], "matches": [...] } }
//! ```
//!
//! Files written before versioning are the bare `{ name, patterns, matches }`
//! object whose `matches` held open/close rule pairs. Those pairs do not map
//! onto the current bracket themes, so upgrading keeps the name and pattern
//! rules and drops the matches.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Result, RuleError};
use crate::registry::ColoringRules;
use crate::rule::ColorRule;

/// Version stamped on everything this crate writes.
pub const FORMAT_VERSION: &str = "0.2";

#[derive(Serialize)]
struct Envelope<'a> {
    version: &'a str,
    data: &'a ColoringRules,
}

/// Pre-versioning layout. Old match pairs are kept only as raw JSON so they
/// can be counted and discarded.
#[derive(Deserialize)]
struct LegacyRuleSet {
    name: String,
    patterns: Vec<ColorRule>,
    #[serde(default)]
    matches: Vec<Value>,
}

/// Every on-disk shape this crate can read, one variant per format version.
enum StoredRuleSet {
    V0_1(LegacyRuleSet),
    V0_2(ColoringRules),
}

impl StoredRuleSet {
    fn read(value: Value) -> Result<Self> {
        if !looks_like_rule_set(&value) {
            return Err(RuleError::NotARuleSet);
        }
        let Value::Object(mut map) = value else {
            return Err(RuleError::NotARuleSet);
        };
        let Some(version) = map.get("version").cloned() else {
            return Ok(Self::V0_1(serde_json::from_value(Value::Object(map))?));
        };
        let data = map.remove("data").ok_or(RuleError::NotARuleSet)?;
        match version.as_str() {
            Some("0.1") => Ok(Self::V0_1(serde_json::from_value(data)?)),
            Some(FORMAT_VERSION) => Ok(Self::V0_2(serde_json::from_value(data)?)),
            Some(other) => Err(RuleError::UnsupportedVersion(other.to_string())),
            None => Err(RuleError::UnsupportedVersion(version.to_string())),
        }
    }

    fn upgrade(self) -> ColoringRules {
        match self {
            Self::V0_1(legacy) => upgrade_v0_1(legacy),
            Self::V0_2(rules) => rules,
        }
    }
}

/// v0.1 → v0.2: keep name and patterns, drop the open/close match pairs.
fn upgrade_v0_1(legacy: LegacyRuleSet) -> ColoringRules {
    info!(
        name = %legacy.name,
        dropped_matches = legacy.matches.len(),
        "upgraded pre-versioned rule set; bracket rules were not carried over"
    );
    ColoringRules {
        name: legacy.name,
        patterns: legacy.patterns,
        matches: Vec::new(),
    }
}

/// Whether `value` has the outline of a rule set, in either format: a
/// non-empty `name` plus `patterns` and `matches` arrays.
#[must_use]
pub fn looks_like_rule_set(value: &Value) -> bool {
    let body = match (value.get("version"), value.get("data")) {
        (Some(_), Some(data)) => data,
        _ => value,
    };
    body.get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty())
        && body.get("patterns").is_some_and(Value::is_array)
        && body.get("matches").is_some_and(Value::is_array)
}

/// Serialize to the current versioned JSON tree.
///
/// # Errors
///
/// Returns [`RuleError::Json`] if serialization fails.
pub fn to_value(rules: &ColoringRules) -> Result<Value> {
    Ok(serde_json::to_value(Envelope {
        version: FORMAT_VERSION,
        data: rules,
    })?)
}

/// Serialize to pretty-printed versioned JSON.
///
/// # Errors
///
/// Returns [`RuleError::Json`] if serialization fails.
pub fn to_json(rules: &ColoringRules) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Envelope {
        version: FORMAT_VERSION,
        data: rules,
    })?)
}

/// Read a rule set from a JSON tree in any supported format.
///
/// # Errors
///
/// - [`RuleError::NotARuleSet`] if the value lacks the rule-set outline.
/// - [`RuleError::UnsupportedVersion`] for an unknown version string.
/// - [`RuleError::Json`] if a field has the wrong shape or a pattern does
///   not compile.
pub fn from_value(value: Value) -> Result<ColoringRules> {
    let rules = StoredRuleSet::read(value)?.upgrade();
    debug!(
        name = %rules.name,
        patterns = rules.patterns.len(),
        matches = rules.matches.len(),
        "loaded rule set"
    );
    Ok(rules)
}

/// Read a rule set from JSON text in any supported format.
///
/// # Errors
///
/// As [`from_value`], plus [`RuleError::Json`] for text that is not JSON.
pub fn from_json(text: &str) -> Result<ColoringRules> {
    from_value(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::default_rules;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // ── Writing ──────────────────────────────────────────────────────────

    #[test]
    fn envelope_shape() {
        let value = to_value(&default_rules()).unwrap();
        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["data"]["name"], "default coloring rules");
        assert_eq!(value["data"]["patterns"][0]["pattern"], "3");
        assert_eq!(value["data"]["matches"][1]["borderPosition"], "Below");
    }

    #[test]
    fn roundtrip_preserves_rules() {
        let rules = default_rules();
        let back = from_json(&to_json(&rules).unwrap()).unwrap();
        assert_eq!(back.patterns.len(), rules.patterns.len());
        for (a, b) in back.patterns.iter().zip(&rules.patterns) {
            assert_eq!(a.pattern.source(), b.pattern.source());
            assert_eq!(a.build_style(), b.build_style());
        }
        assert_eq!(back, rules);
    }

    // ── Legacy Upgrade ───────────────────────────────────────────────────

    #[test]
    fn legacy_shape_drops_matches() {
        let legacy = json!({
            "name": "old",
            "patterns": [
                { "pattern": "/[0-9]/", "fgColor": null, "bgColor": null, "style": "normal", "spacing": "" },
                { "pattern": "x", "fgColor": { "enc": "hsl", "c1": 4, "c2": 90, "c3": 50 },
                  "bgColor": null, "style": "italic", "spacing": "" }
            ],
            "matches": [
                { "openCh": "\\(", "closeCh": "\\)", "topMatchColor": {}, "nestedMatchColor": {} }
            ]
        });
        let rules = from_value(legacy).unwrap();
        assert_eq!(rules.name, "old");
        assert_eq!(rules.patterns.len(), 2);
        assert_eq!(rules.patterns[0].pattern.source(), "[0-9]");
        assert!(rules.matches.is_empty());
    }

    #[test]
    fn versioned_legacy_data_is_upgraded() {
        let value = json!({
            "version": "0.1",
            "data": { "name": "old", "patterns": [], "matches": [ {} ] }
        });
        assert!(from_value(value).unwrap().matches.is_empty());
    }

    // ── Rejection ────────────────────────────────────────────────────────

    #[test]
    fn unknown_version_is_rejected() {
        let value = json!({
            "version": "9.9",
            "data": { "name": "future", "patterns": [], "matches": [] }
        });
        assert!(matches!(from_value(value), Err(RuleError::UnsupportedVersion(v)) if v == "9.9"));
    }

    #[test]
    fn garbage_is_not_a_rule_set() {
        assert!(matches!(from_json(r#"{"hello": 1}"#), Err(RuleError::NotARuleSet)));
        assert!(matches!(from_json("[1, 2]"), Err(RuleError::NotARuleSet)));
        assert!(matches!(from_json("not json"), Err(RuleError::Json(_))));
    }

    #[test]
    fn bad_pattern_is_a_json_error() {
        let value = json!({
            "name": "broken",
            "patterns": [ { "pattern": "(" } ],
            "matches": []
        });
        assert!(matches!(from_value(value), Err(RuleError::Json(_))));
    }

    // ── Outline Check ────────────────────────────────────────────────────

    #[test]
    fn looks_like_both_formats() {
        assert!(looks_like_rule_set(&json!({ "name": "a", "patterns": [], "matches": [] })));
        assert!(looks_like_rule_set(&to_value(&default_rules()).unwrap()));
    }

    #[test]
    fn looks_like_requires_every_field() {
        assert!(!looks_like_rule_set(&json!({ "name": "a", "patterns": [] })));
        assert!(!looks_like_rule_set(&json!({ "name": "", "patterns": [], "matches": [] })));
        assert!(!looks_like_rule_set(&json!({ "name": "a", "patterns": {}, "matches": [] })));
        assert!(!looks_like_rule_set(&json!("a string")));
        assert!(!looks_like_rule_set(&json!({ "version": "0.2", "data": {} })));
    }
}
