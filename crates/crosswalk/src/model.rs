use serde::Serialize;

use crate::rules::{RuleTableSizes, TargetRef};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One NCO entry recovered from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    /// NCO 2015 code, `NNNN.NNNN`.
    pub primary_code: String,
    /// NCO 2004 code, `NNNN.NN`, when the concordance lists one.
    pub secondary_code: Option<String>,
    pub title: String,
}

/// One O*NET occupation recovered from the target document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRecord {
    /// `NN-NNNN.NN`
    pub code: String,
    pub title: String,
}

/// Per-page text of both documents, as handed over by the document reader.
/// Pages may be empty.
#[derive(Debug, Clone, Default)]
pub struct CrosswalkInput {
    pub source_pages: Vec<String>,
    pub target_pages: Vec<String>,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Keyword,
    FinePrefix,
    CoarsePrefix,
    Division,
    Unresolved,
}

impl MatchTier {
    pub fn score(self) -> u8 {
        match self {
            Self::Keyword => 95,
            Self::FinePrefix => 80,
            Self::CoarsePrefix => 75,
            Self::Division => 60,
            Self::Unresolved => 0,
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::FinePrefix => write!(f, "fine_prefix"),
            Self::CoarsePrefix => write!(f, "coarse_prefix"),
            Self::Division => write!(f, "division"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Result of resolving one title + code against the rule base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub target: Option<TargetRef>,
    pub tier: MatchTier,
}

impl MatchOutcome {
    pub fn resolved(target: &TargetRef, tier: MatchTier) -> Self {
        Self {
            target: Some(target.clone()),
            tier,
        }
    }

    pub fn unresolved() -> Self {
        Self {
            target: None,
            tier: MatchTier::Unresolved,
        }
    }

    /// Target code, empty when unresolved.
    pub fn code(&self) -> &str {
        self.target.as_ref().map(|t| t.code.as_str()).unwrap_or("")
    }

    /// Target title, empty when unresolved.
    pub fn title(&self) -> &str {
        self.target.as_ref().map(|t| t.title.as_str()).unwrap_or("")
    }

    pub fn score(&self) -> u8 {
        self.tier.score()
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One row of the crosswalk. Column order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrosswalkEntry {
    pub source_primary_code: String,
    pub source_secondary_code: Option<String>,
    pub source_title: String,
    pub target_code: String,
    pub target_title: String,
    pub confidence_score: u8,
    pub tier: MatchTier,
}

impl CrosswalkEntry {
    pub fn new(record: &SourceRecord, outcome: &MatchOutcome) -> Self {
        Self {
            source_primary_code: record.primary_code.clone(),
            source_secondary_code: record.secondary_code.clone(),
            source_title: record.title.clone(),
            target_code: outcome.code().to_string(),
            target_title: outcome.title().to_string(),
            confidence_score: outcome.score(),
            tier: outcome.tier,
        }
    }

    pub fn has_secondary_code(&self) -> bool {
        self.source_secondary_code
            .as_deref()
            .is_some_and(|c| !c.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Summary + Result
// ---------------------------------------------------------------------------

/// Score-band counts over a crosswalk. Diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityStats {
    pub total_records: usize,
    /// score >= 90
    pub semantic_matches: usize,
    /// 80..=89
    pub prefix_matches: usize,
    /// 60..=79
    pub division_matches: usize,
    /// 1..=59, only reachable with inconsistent custom rules
    pub low_matches: usize,
    /// score == 0
    pub no_matches: usize,
    /// Entries carrying a non-empty NCO 2004 code.
    pub secondary_code_coverage: usize,
}

impl QualityStats {
    /// Share of `count` in the total, as a percentage. Zero for an empty crosswalk.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.total_records as f64
        }
    }

    pub fn secondary_code_ratio(&self) -> f64 {
        self.percent(self.secondary_code_coverage) / 100.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrosswalkMeta {
    pub engine_version: String,
    pub run_at: String,
    pub rules: RuleTableSizes,
    pub source_records: usize,
    pub target_records: usize,
    /// Rule targets absent from the extracted target taxonomy.
    pub unknown_target_codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrosswalkResult {
    pub meta: CrosswalkMeta,
    pub stats: QualityStats,
    pub anomalies: Vec<String>,
    pub entries: Vec<CrosswalkEntry>,
}
