//! Matching rule base: keyword triggers, hierarchy prefixes, division defaults.
//!
//! The built-in tables are assembled once per process and shared read-only by
//! every matcher call. Custom rule bases (from config or tests) are ordinary
//! owned values with the same shape.

mod hierarchy;
mod keywords;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Target taxonomy code + title attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRef {
    pub code: String,
    pub title: String,
}

impl TargetRef {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
        }
    }
}

/// A keyword trigger. `keyword` is compared against lower-cased titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: String,
    pub target: TargetRef,
}

#[derive(Debug, Clone, Default)]
pub struct RuleBase {
    /// Insertion order is kept; it breaks ties between equal-length keywords.
    keywords: Vec<KeywordRule>,
    prefixes: HashMap<String, TargetRef>,
    divisions: HashMap<String, TargetRef>,
}

static BUILTIN: OnceLock<RuleBase> = OnceLock::new();

impl RuleBase {
    /// Empty rule base. Every lookup resolves to the unresolved tier.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The NCO 2015 → O*NET tables shipped with the engine.
    pub fn builtin() -> &'static RuleBase {
        BUILTIN.get_or_init(|| {
            let mut rules = RuleBase::empty();
            for (keyword, code, title) in keywords::KEYWORD_RULES {
                rules.insert_keyword(*keyword, TargetRef::new(*code, *title));
            }
            for (prefix, code, title) in hierarchy::PREFIX_RULES {
                rules.insert_prefix(*prefix, TargetRef::new(*code, *title));
            }
            for (division, code, title) in hierarchy::DIVISION_RULES {
                rules.insert_division(*division, TargetRef::new(*code, *title));
            }
            rules
        })
    }

    /// Add a keyword rule. Re-inserting an existing keyword replaces its
    /// target but keeps its position.
    pub fn insert_keyword(&mut self, keyword: impl Into<String>, target: TargetRef) {
        let keyword = keyword.into();
        match self.keywords.iter_mut().find(|r| r.keyword == keyword) {
            Some(existing) => existing.target = target,
            None => self.keywords.push(KeywordRule { keyword, target }),
        }
    }

    pub fn insert_prefix(&mut self, prefix: impl Into<String>, target: TargetRef) {
        self.prefixes.insert(prefix.into(), target);
    }

    pub fn insert_division(&mut self, division: impl Into<String>, target: TargetRef) {
        self.divisions.insert(division.into(), target);
    }

    /// Builder form of [`insert_keyword`](Self::insert_keyword).
    pub fn with_keyword(mut self, keyword: &str, code: &str, title: &str) -> Self {
        self.insert_keyword(keyword, TargetRef::new(code, title));
        self
    }

    pub fn with_prefix(mut self, prefix: &str, code: &str, title: &str) -> Self {
        self.insert_prefix(prefix, TargetRef::new(code, title));
        self
    }

    pub fn with_division(mut self, division: &str, code: &str, title: &str) -> Self {
        self.insert_division(division, TargetRef::new(code, title));
        self
    }

    pub fn keywords(&self) -> &[KeywordRule] {
        &self.keywords
    }

    pub fn prefix(&self, key: &str) -> Option<&TargetRef> {
        self.prefixes.get(key)
    }

    pub fn division(&self, key: &str) -> Option<&TargetRef> {
        self.divisions.get(key)
    }

    pub fn divisions(&self) -> impl Iterator<Item = (&str, &TargetRef)> {
        self.divisions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every target reachable from any table, keyword order first.
    pub fn targets(&self) -> impl Iterator<Item = &TargetRef> {
        self.keywords
            .iter()
            .map(|r| &r.target)
            .chain(self.prefixes.values())
            .chain(self.divisions.values())
    }

    pub fn sizes(&self) -> RuleTableSizes {
        RuleTableSizes {
            keywords: self.keywords.len(),
            prefixes: self.prefixes.len(),
            divisions: self.divisions.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleTableSizes {
    pub keywords: usize,
    pub prefixes: usize,
    pub divisions: usize,
}
