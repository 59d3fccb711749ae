use crate::error::CrosswalkError;
use crate::model::{MatchOutcome, MatchTier};
use crate::rules::{KeywordRule, RuleBase};

/// Resolve an NCO title + code to an O*NET target.
///
/// Tiers are tried in order and the first hit wins:
/// keyword (95), 4-digit prefix (80), 3-digit group head (75),
/// division (60). Nothing found is a valid outcome with score 0.
pub fn find_match(
    rules: &RuleBase,
    title: &str,
    primary_code: &str,
) -> Result<MatchOutcome, CrosswalkError> {
    if primary_code.is_empty() {
        return Err(CrosswalkError::EmptyPrimaryCode {
            title: title.to_string(),
        });
    }

    if let Some(rule) = longest_keyword(rules, title) {
        return Ok(MatchOutcome::resolved(&rule.target, MatchTier::Keyword));
    }

    let fine = leading(primary_code, 4);
    if let Some(target) = rules.prefix(fine) {
        return Ok(MatchOutcome::resolved(target, MatchTier::FinePrefix));
    }

    // Group heads are stored under their `NNN0` unit group.
    let coarse = format!("{}0", leading(primary_code, 3));
    if let Some(target) = rules.prefix(&coarse) {
        return Ok(MatchOutcome::resolved(target, MatchTier::CoarsePrefix));
    }

    if let Some(target) = rules.division(leading(primary_code, 1)) {
        return Ok(MatchOutcome::resolved(target, MatchTier::Division));
    }

    Ok(MatchOutcome::unresolved())
}

/// Longest keyword contained in the lower-cased title. Equal lengths keep the
/// earlier rule.
fn longest_keyword<'r>(rules: &'r RuleBase, title: &str) -> Option<&'r KeywordRule> {
    let title_lower = title.to_lowercase();
    let mut best: Option<&KeywordRule> = None;
    for rule in rules.keywords() {
        if !title_lower.contains(rule.keyword.as_str()) {
            continue;
        }
        let longer = match best {
            Some(b) => rule.keyword.chars().count() > b.keyword.chars().count(),
            None => true,
        };
        if longer {
            best = Some(rule);
        }
    }
    best
}

/// First `n` characters of `code`, or all of it when shorter.
fn leading(code: &str, n: usize) -> &str {
    match code.char_indices().nth(n) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rules() -> RuleBase {
        RuleBase::empty()
            .with_keyword("principal", "11-9032.00", "Education Administrators, K-12")
            .with_keyword("principal, college", "11-9033.00", "Education Administrators, Postsecondary")
            .with_keyword("advocate", "23-1011.00", "Lawyers")
            .with_prefix("1111", "11-1031.00", "Legislators")
            .with_prefix("2310", "25-1099.00", "Postsecondary Teachers, All Other")
            .with_division("2", "19-4099.00", "Life, Physical, and Social Science Technicians, All Other")
    }

    #[test]
    fn longest_keyword_wins() {
        let m = find_match(&sample_rules(), "Principal, College of Arts", "2310.0100").unwrap();
        assert_eq!(m.tier, MatchTier::Keyword);
        assert_eq!(m.code(), "11-9033.00");
        assert_eq!(m.score(), 95);
    }

    #[test]
    fn keyword_order_does_not_matter_for_length() {
        let rules = RuleBase::empty()
            .with_keyword("principal, college", "11-9033.00", "Postsecondary")
            .with_keyword("principal", "11-9032.00", "K-12");
        let m = find_match(&rules, "principal, college of arts", "2310.0100").unwrap();
        assert_eq!(m.code(), "11-9033.00");
    }

    #[test]
    fn equal_length_tie_keeps_first_inserted() {
        let rules = RuleBase::empty()
            .with_keyword("singer", "27-2042.00", "Musicians and Singers")
            .with_keyword("dancer", "27-2031.00", "Dancers");
        let m = find_match(&rules, "Singer and Dancer", "2653.0100").unwrap();
        assert_eq!(m.code(), "27-2042.00");
    }

    #[test]
    fn keyword_beats_prefix() {
        let m = find_match(&sample_rules(), "Senior Advocate", "1111.0001").unwrap();
        assert_eq!(m.tier, MatchTier::Keyword);
        assert_eq!(m.code(), "23-1011.00");
    }

    #[test]
    fn fine_prefix() {
        let m = find_match(&sample_rules(), "Member of Parliament", "1111.0100").unwrap();
        assert_eq!(m.tier, MatchTier::FinePrefix);
        assert_eq!(m.title(), "Legislators");
        assert_eq!(m.score(), 80);
    }

    #[test]
    fn coarse_prefix_uses_group_head() {
        let m = find_match(&sample_rules(), "Lecturer in Zoology", "2319.0200").unwrap();
        // "lecturer" is not in the sample keyword table
        assert_eq!(m.tier, MatchTier::CoarsePrefix);
        assert_eq!(m.code(), "25-1099.00");
        assert_eq!(m.score(), 75);
    }

    #[test]
    fn division_fallback() {
        let m = find_match(&sample_rules(), "Something Scientific", "2999.0001").unwrap();
        assert_eq!(m.tier, MatchTier::Division);
        assert_eq!(m.score(), 60);
    }

    #[test]
    fn unresolved_is_not_an_error() {
        let m = find_match(&sample_rules(), "Unrecognized Title", "9999.0001").unwrap();
        assert_eq!(m.tier, MatchTier::Unresolved);
        assert_eq!(m.code(), "");
        assert_eq!(m.title(), "");
        assert_eq!(m.score(), 0);
    }

    #[test]
    fn empty_code_fails_fast() {
        let err = find_match(&sample_rules(), "Advocate", "").unwrap_err();
        assert!(matches!(err, CrosswalkError::EmptyPrimaryCode { .. }));
    }

    #[test]
    fn short_code_falls_through_to_division() {
        let m = find_match(&sample_rules(), "Unknown", "2").unwrap();
        assert_eq!(m.tier, MatchTier::Division);
    }

    #[test]
    fn every_builtin_division_resolves() {
        let rules = RuleBase::builtin();
        for (division, target) in rules.divisions() {
            // x8x8 unit groups do not exist in NCO 2015
            let code = format!("{division}898.9999");
            let m = find_match(rules, "zzz", &code).unwrap();
            assert_eq!(m.tier, MatchTier::Division, "division {division}");
            assert_eq!(m.code(), target.code);
        }
    }

    #[test]
    fn builtin_distinguishes_biologist_from_dentist() {
        let m = find_match(RuleBase::builtin(), "Mycologist", "2131.0300").unwrap();
        assert_eq!(m.code(), "19-1029.04");
    }

    #[test]
    fn scores_are_tier_scores() {
        let rules = RuleBase::builtin();
        let cases = [
            ("Chief Legislator", "1111.0001"),
            ("Member of Parliament", "1111.0100"),
            ("Unknown", "5999.0000"),
            ("Unknown", "0999.0000"),
        ];
        for (title, code) in cases {
            let first = find_match(rules, title, code).unwrap();
            let second = find_match(rules, title, code).unwrap();
            assert_eq!(first, second);
            assert!([0, 60, 75, 80, 95].contains(&first.score()));
        }
    }

    #[test]
    fn leading_handles_short_codes() {
        assert_eq!(leading("1111.0001", 4), "1111");
        assert_eq!(leading("12", 4), "12");
        assert_eq!(leading("7", 1), "7");
    }
}
