use crate::model::{CrosswalkEntry, QualityStats};

/// Compute score-band counts and legacy-code coverage.
pub fn compute_stats(entries: &[CrosswalkEntry]) -> QualityStats {
    let mut stats = QualityStats {
        total_records: entries.len(),
        ..QualityStats::default()
    };

    for e in entries {
        match e.confidence_score {
            90..=u8::MAX => stats.semantic_matches += 1,
            80..=89 => stats.prefix_matches += 1,
            60..=79 => stats.division_matches += 1,
            1..=59 => stats.low_matches += 1,
            0 => stats.no_matches += 1,
        }
        if e.has_secondary_code() {
            stats.secondary_code_coverage += 1;
        }
    }

    stats
}
