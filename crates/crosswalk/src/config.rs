use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::CrosswalkError;
use crate::rules::{RuleBase, TargetRef};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrosswalkConfig {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub assemble: AssembleConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default)]
    pub mode: RulesMode,
    #[serde(default, rename = "keyword")]
    pub keywords: Vec<KeywordEntry>,
    #[serde(default, rename = "prefix")]
    pub prefixes: BTreeMap<String, TargetRef>,
    #[serde(default, rename = "division")]
    pub divisions: BTreeMap<String, TargetRef>,
}

/// How configured tables combine with the built-in ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesMode {
    /// Built-in tables plus configured entries; configured keys win.
    #[default]
    Extend,
    /// Configured entries only.
    Replace,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordEntry {
    pub keyword: String,
    pub code: String,
    pub title: String,
}

// ---------------------------------------------------------------------------
// Assemble + Extract
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssembleConfig {
    /// Log progress every N records.
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
    /// Worker threads for matching. 1 = sequential.
    #[serde(default = "default_shards")]
    pub shards: usize,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            progress_every: default_progress_every(),
            shards: default_shards(),
        }
    }
}

fn default_progress_every() -> usize {
    500
}

fn default_shards() -> usize {
    1
}

/// Minimum record yields below which a run is flagged as anomalous.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractConfig {
    #[serde(default = "default_min_records")]
    pub min_source_records: usize,
    #[serde(default = "default_min_records")]
    pub min_target_records: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_source_records: default_min_records(),
            min_target_records: default_min_records(),
        }
    }
}

fn default_min_records() -> usize {
    1
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CrosswalkConfig {
    pub fn from_toml(input: &str) -> Result<Self, CrosswalkError> {
        let config: CrosswalkConfig =
            toml::from_str(input).map_err(|e| CrosswalkError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CrosswalkError> {
        if self.assemble.shards == 0 {
            return Err(CrosswalkError::ConfigValidation(
                "assemble.shards must be at least 1".into(),
            ));
        }
        if self.assemble.progress_every == 0 {
            return Err(CrosswalkError::ConfigValidation(
                "assemble.progress_every must be at least 1".into(),
            ));
        }

        for entry in &self.rules.keywords {
            if entry.keyword.trim().is_empty() {
                return Err(CrosswalkError::ConfigValidation(
                    "keyword must not be empty".into(),
                ));
            }
            // Titles are lower-cased before matching.
            if entry.keyword != entry.keyword.to_lowercase() {
                return Err(CrosswalkError::ConfigValidation(format!(
                    "keyword '{}' must be lower-case",
                    entry.keyword
                )));
            }
            validate_target(&format!("keyword '{}'", entry.keyword), &entry.code, &entry.title)?;
        }

        for (prefix, target) in &self.rules.prefixes {
            if prefix.len() != 4 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CrosswalkError::ConfigValidation(format!(
                    "prefix '{prefix}' must be exactly 4 digits"
                )));
            }
            validate_target(&format!("prefix '{prefix}'"), &target.code, &target.title)?;
        }

        for (division, target) in &self.rules.divisions {
            if division.len() != 1 || !division.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CrosswalkError::ConfigValidation(format!(
                    "division '{division}' must be a single digit"
                )));
            }
            validate_target(&format!("division '{division}'"), &target.code, &target.title)?;
        }

        Ok(())
    }

    /// Build the rule base this config describes.
    pub fn rule_base(&self) -> RuleBase {
        let mut rules = match self.rules.mode {
            RulesMode::Extend => RuleBase::builtin().clone(),
            RulesMode::Replace => RuleBase::empty(),
        };
        for entry in &self.rules.keywords {
            rules.insert_keyword(
                entry.keyword.clone(),
                TargetRef::new(entry.code.clone(), entry.title.clone()),
            );
        }
        for (prefix, target) in &self.rules.prefixes {
            rules.insert_prefix(prefix.clone(), target.clone());
        }
        for (division, target) in &self.rules.divisions {
            rules.insert_division(division.clone(), target.clone());
        }
        rules
    }

    /// True when the built-in tables are used unchanged.
    pub fn uses_builtin_rules(&self) -> bool {
        self.rules.mode == RulesMode::Extend
            && self.rules.keywords.is_empty()
            && self.rules.prefixes.is_empty()
            && self.rules.divisions.is_empty()
    }
}

fn validate_target(what: &str, code: &str, title: &str) -> Result<(), CrosswalkError> {
    if !is_target_code(code) {
        return Err(CrosswalkError::ConfigValidation(format!(
            "{what}: target code '{code}' is not NN-NNNN.NN"
        )));
    }
    if title.trim().is_empty() {
        return Err(CrosswalkError::ConfigValidation(format!(
            "{what}: target title must not be empty"
        )));
    }
    Ok(())
}

/// `NN-NNNN.NN`
pub fn is_target_code(code: &str) -> bool {
    let b = code.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            2 => *c == b'-',
            7 => *c == b'.',
            _ => c.is_ascii_digit(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EXTEND: &str = r#"
[rules]
mode = "extend"

[[rules.keyword]]
keyword = "vlogger"
code = "27-3043.00"
title = "Writers and Authors"

[rules.prefix."1111"]
code = "11-1011.00"
title = "Chief Executives"

[rules.division."0"]
code = "55-3019.00"
title = "Military Enlisted Tactical Operations and Air/Weapons Specialists and Crew Members"

[assemble]
progress_every = 100
shards = 4
"#;

    #[test]
    fn parse_extend() {
        let config = CrosswalkConfig::from_toml(EXTEND).unwrap();
        assert_eq!(config.rules.mode, RulesMode::Extend);
        assert_eq!(config.rules.keywords.len(), 1);
        assert_eq!(config.assemble.shards, 4);
        assert_eq!(config.assemble.progress_every, 100);
        assert_eq!(config.extract.min_source_records, 1);
        assert!(!config.uses_builtin_rules());

        let rules = config.rule_base();
        let sizes = rules.sizes();
        assert_eq!(sizes.keywords, 190);
        assert_eq!(sizes.prefixes, 430);
        assert_eq!(sizes.divisions, 10);
        assert_eq!(rules.prefix("1111").unwrap().code, "11-1011.00");
    }

    #[test]
    fn empty_config_uses_builtin() {
        let config = CrosswalkConfig::from_toml("").unwrap();
        assert!(config.uses_builtin_rules());
        assert_eq!(config.assemble.progress_every, 500);
        assert_eq!(config.assemble.shards, 1);
        assert_eq!(config.rule_base().sizes(), RuleBase::builtin().sizes());
    }

    #[test]
    fn replace_drops_builtin() {
        let input = r#"
[rules]
mode = "replace"

[[rules.keyword]]
keyword = "advocate"
code = "23-1011.00"
title = "Lawyers"
"#;
        let rules = CrosswalkConfig::from_toml(input).unwrap().rule_base();
        let sizes = rules.sizes();
        assert_eq!(sizes.keywords, 1);
        assert_eq!(sizes.prefixes, 0);
        assert_eq!(sizes.divisions, 0);
    }

    #[test]
    fn rejects_uppercase_keyword() {
        let input = r#"
[[rules.keyword]]
keyword = "Advocate"
code = "23-1011.00"
title = "Lawyers"
"#;
        let err = CrosswalkConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("lower-case"), "{err}");
    }

    #[test]
    fn rejects_bad_prefix_key() {
        let input = r#"
[rules.prefix."111"]
code = "11-1031.00"
title = "Legislators"
"#;
        let err = CrosswalkConfig::from_toml(input).unwrap_err();
        assert!(matches!(err, CrosswalkError::ConfigValidation(_)));
    }

    #[test]
    fn rejects_bad_target_code() {
        let input = r#"
[rules.division."9"]
code = "53-7199"
title = "Material Moving Workers, All Other"
"#;
        let err = CrosswalkConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("NN-NNNN.NN"), "{err}");
    }

    #[test]
    fn rejects_zero_shards() {
        let err = CrosswalkConfig::from_toml("[assemble]\nshards = 0\n").unwrap_err();
        assert!(matches!(err, CrosswalkError::ConfigValidation(_)));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = CrosswalkConfig::from_toml("[rules]\nmode = \"merge\"\n").unwrap_err();
        assert!(matches!(err, CrosswalkError::ConfigParse(_)));
    }

    #[test]
    fn target_code_shape() {
        assert!(is_target_code("23-1011.00"));
        assert!(!is_target_code("23-1011.0"));
        assert!(!is_target_code("2311011.00"));
        assert!(!is_target_code("ab-cdef.gh"));
    }

    #[test]
    fn builtin_targets_are_well_formed() {
        for target in RuleBase::builtin().targets() {
            assert!(is_target_code(&target.code), "{}", target.code);
            assert!(!target.title.is_empty());
        }
    }
}
