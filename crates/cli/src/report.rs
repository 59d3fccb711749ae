//! Human-readable validation report for a crosswalk run.

use std::fmt::Write;

use occwalk_crosswalk::CrosswalkResult;

const RULE: &str = "======================================================================";

pub fn format_report(result: &CrosswalkResult) -> String {
    let s = &result.stats;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "VALIDATION REPORT - NCO TO O*NET SEMANTIC CROSSWALK");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total records: {}", s.total_records);
    let _ = writeln!(out);
    let _ = writeln!(out, "Matching Quality:");
    let bands = [
        ("Semantic keyword match (>=90)", s.semantic_matches),
        ("NCO prefix match (80-89)", s.prefix_matches),
        ("Division fallback (60-79)", s.division_matches),
        ("Low confidence (<60)", s.low_matches),
        ("No match", s.no_matches),
    ];
    for (label, count) in bands {
        let _ = writeln!(out, "  {label}: {count} ({:.1}%)", s.percent(count));
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "NCO 2004 Coverage: {} ({:.1}%)",
        s.secondary_code_coverage,
        s.percent(s.secondary_code_coverage)
    );

    if !result.meta.unknown_target_codes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Target codes missing from O*NET document: {}",
            result.meta.unknown_target_codes.join(", ")
        );
    }
    if !result.anomalies.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Anomalies:");
        for a in &result.anomalies {
            let _ = writeln!(out, "  - {a}");
        }
    }
    let _ = writeln!(out, "{RULE}");
    out
}
