//! `occwalk-crosswalk`: NCO 2015 to O*NET occupation crosswalk engine.
//!
//! Pure engine crate: receives per-page document text, returns typed records,
//! tiered matches and quality statistics. No CLI or IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod model;
pub mod rules;
pub mod summary;

pub use config::CrosswalkConfig;
pub use engine::{assemble, assemble_sharded, run};
pub use error::CrosswalkError;
pub use extract::{RecordExtractor, SourceExtractor, TargetExtractor};
pub use matcher::find_match;
pub use model::{
    CrosswalkEntry, CrosswalkInput, CrosswalkResult, MatchOutcome, MatchTier, QualityStats,
    SourceRecord, TargetRecord,
};
pub use rules::{RuleBase, TargetRef};
