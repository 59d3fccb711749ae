use std::collections::{BTreeSet, HashSet};
use std::thread;

use crate::config::CrosswalkConfig;
use crate::error::CrosswalkError;
use crate::extract::{RecordExtractor, SourceExtractor, TargetExtractor};
use crate::matcher::find_match;
use crate::model::{
    CrosswalkEntry, CrosswalkInput, CrosswalkMeta, CrosswalkResult, QualityStats, SourceRecord,
    TargetRecord,
};
use crate::rules::RuleBase;
use crate::summary::compute_stats;

/// Match every source record in input order. One entry per record.
pub fn assemble(
    rules: &RuleBase,
    records: &[SourceRecord],
) -> Result<(Vec<CrosswalkEntry>, QualityStats), CrosswalkError> {
    let entries = match_records(rules, records, 0, records.len(), usize::MAX)?;
    let stats = compute_stats(&entries);
    Ok((entries, stats))
}

/// Same output as [`assemble`], with contiguous shards matched on scoped
/// threads. The rule base is only read.
pub fn assemble_sharded(
    rules: &RuleBase,
    records: &[SourceRecord],
    shards: usize,
    progress_every: usize,
) -> Result<(Vec<CrosswalkEntry>, QualityStats), CrosswalkError> {
    let shards = shards.max(1);
    let progress_every = progress_every.max(1);
    let entries = if shards == 1 || records.len() < 2 {
        match_records(rules, records, 0, records.len(), progress_every)?
    } else {
        let chunk = records.len().div_ceil(shards);
        let results: Vec<Result<Vec<CrosswalkEntry>, CrosswalkError>> = thread::scope(|s| {
            let handles: Vec<_> = records
                .chunks(chunk)
                .enumerate()
                .map(|(i, shard)| {
                    let offset = i * chunk;
                    let total = records.len();
                    s.spawn(move || match_records(rules, shard, offset, total, progress_every))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| {
                    h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        });

        let mut entries = Vec::with_capacity(records.len());
        for shard in results {
            entries.extend(shard?);
        }
        entries
    };

    let stats = compute_stats(&entries);
    Ok((entries, stats))
}

fn match_records(
    rules: &RuleBase,
    records: &[SourceRecord],
    offset: usize,
    total: usize,
    progress_every: usize,
) -> Result<Vec<CrosswalkEntry>, CrosswalkError> {
    let mut entries = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let outcome = find_match(rules, &record.title, &record.primary_code)?;
        entries.push(CrosswalkEntry::new(record, &outcome));

        let done = offset + i + 1;
        if done % progress_every == 0 {
            log::info!("Processed {done}/{total} records");
        }
    }
    Ok(entries)
}

/// Extract both documents, build the crosswalk, and check yields and target
/// coverage.
pub fn run(config: &CrosswalkConfig, input: &CrosswalkInput) -> Result<CrosswalkResult, CrosswalkError> {
    let owned;
    let rules: &RuleBase = if config.uses_builtin_rules() {
        RuleBase::builtin()
    } else {
        owned = config.rule_base();
        &owned
    };

    let source_records = SourceExtractor::new()?.extract(&input.source_pages);
    log::info!("Total NCO records: {}", source_records.len());
    let target_records = TargetExtractor::new()?.extract(&input.target_pages);
    log::info!("Total O*NET records: {}", target_records.len());

    let mut anomalies = Vec::new();
    if source_records.len() < config.extract.min_source_records {
        anomalies.push(format!(
            "source document yielded {} records (expected at least {})",
            source_records.len(),
            config.extract.min_source_records
        ));
    }
    if target_records.len() < config.extract.min_target_records {
        anomalies.push(format!(
            "target document yielded {} records (expected at least {})",
            target_records.len(),
            config.extract.min_target_records
        ));
    }

    let (entries, stats) = assemble_sharded(
        rules,
        &source_records,
        config.assemble.shards,
        config.assemble.progress_every,
    )?;

    let unknown_target_codes = if target_records.is_empty() {
        Vec::new()
    } else {
        unknown_targets(&entries, &target_records)
    };
    if !unknown_target_codes.is_empty() {
        anomalies.push(format!(
            "{} matched target codes are not in the target document",
            unknown_target_codes.len()
        ));
    }

    for a in &anomalies {
        log::warn!("{a}");
    }

    Ok(CrosswalkResult {
        meta: CrosswalkMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            rules: rules.sizes(),
            source_records: source_records.len(),
            target_records: target_records.len(),
            unknown_target_codes,
        },
        stats,
        anomalies,
        entries,
    })
}

/// Matched target codes that the extracted target taxonomy does not list.
/// Sorted, deduplicated.
pub fn unknown_targets(entries: &[CrosswalkEntry], targets: &[TargetRecord]) -> Vec<String> {
    let known: HashSet<&str> = targets.iter().map(|t| t.code.as_str()).collect();
    entries
        .iter()
        .map(|e| e.target_code.as_str())
        .filter(|code| !code.is_empty() && !known.contains(code))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchTier;

    fn record(code: &str, title: &str, legacy: Option<&str>) -> SourceRecord {
        SourceRecord {
            primary_code: code.into(),
            secondary_code: legacy.map(String::from),
            title: title.into(),
        }
    }

    fn advocate_rules() -> RuleBase {
        RuleBase::empty()
            .with_keyword("advocate", "23-1011.00", "Lawyers")
            .with_division("1", "11-1021.00", "General and Operations Managers")
    }

    #[test]
    fn assemble_keeps_order_and_unmatched() {
        let records = vec![
            record("1111.0001", "Senior Advocate", Some("1111.01")),
            record("9999.0001", "Unrecognized Title", None),
        ];
        let (entries, stats) = assemble(&advocate_rules(), &records).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].confidence_score, 95);
        assert_eq!(entries[0].target_code, "23-1011.00");
        assert_eq!(entries[1].confidence_score, 0);
        assert_eq!(entries[1].target_code, "");
        assert_eq!(entries[1].tier, MatchTier::Unresolved);
        assert_eq!(stats.semantic_matches, 1);
        assert_eq!(stats.no_matches, 1);
        assert_eq!(stats.secondary_code_coverage, 1);
    }

    #[test]
    fn assemble_propagates_empty_code() {
        let records = vec![record("", "Advocate", None)];
        assert!(assemble(&advocate_rules(), &records).is_err());
    }

    #[test]
    fn sharded_equals_sequential() {
        let rules = RuleBase::builtin();
        let titles = ["Advocate", "Chief Legislator", "Mycologist", "Unknown", "Potter", "Clerk"];
        let records: Vec<SourceRecord> = (0..97)
            .map(|i| {
                let code = format!("{}{:03}.{:04}", 1 + i % 9, (i * 37) % 1000, i);
                record(&code, titles[i % titles.len()], None)
            })
            .collect();

        let (seq, seq_stats) = assemble(rules, &records).unwrap();
        for shards in [2, 3, 8, 200] {
            let (par, par_stats) = assemble_sharded(rules, &records, shards, 10).unwrap();
            assert_eq!(par, seq, "shards={shards}");
            assert_eq!(par_stats, seq_stats);
        }
    }

    #[test]
    fn unknown_targets_sorted_and_deduped() {
        let records = vec![
            record("1111.0001", "Advocate", None),
            record("1111.0002", "Advocate", None),
            record("1200.0001", "Manager", None),
            record("9999.0001", "Unknown", None),
        ];
        let (entries, _) = assemble(&advocate_rules(), &records).unwrap();
        let targets = vec![TargetRecord {
            code: "11-1021.00".into(),
            title: "General and Operations Managers".into(),
        }];
        assert_eq!(unknown_targets(&entries, &targets), vec!["23-1011.00".to_string()]);
    }

    #[test]
    fn run_flags_empty_extraction() {
        let config = CrosswalkConfig::default();
        let input = CrosswalkInput {
            source_pages: vec![String::new()],
            target_pages: vec!["23-1011.00 Lawyers".into()],
        };
        let result = run(&config, &input).unwrap();
        assert_eq!(result.meta.source_records, 0);
        assert_eq!(result.meta.target_records, 1);
        assert!(result.entries.is_empty());
        assert_eq!(result.anomalies.len(), 1);
        assert!(result.anomalies[0].contains("source document"));
    }

    #[test]
    fn run_reports_unknown_targets() {
        let config = CrosswalkConfig::default();
        let input = CrosswalkInput {
            source_pages: vec!["1111.0001 Senior Advocate 1111.01".into()],
            target_pages: vec!["11-1031.00 Legislators".into()],
        };
        let result = run(&config, &input).unwrap();
        assert_eq!(result.entries[0].target_code, "23-1011.00");
        assert_eq!(result.meta.unknown_target_codes, vec!["23-1011.00".to_string()]);
        assert!(result.anomalies.iter().any(|a| a.contains("not in the target document")));
    }
}
