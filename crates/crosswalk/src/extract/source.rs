//! NCO 2015 concordance table lines: `NNNN.NNNN  Title  [NNNN.NN]`.

use regex::Regex;

use super::RecordExtractor;
use crate::error::CrosswalkError;
use crate::model::SourceRecord;

/// Running titles and volume banners.
const SKIP_CONTAINS: &[&str] = &["National Classification of Occupations", "VOLUME"];

/// Division / sub-division / group / family heading lines.
const SKIP_PREFIXES: &[&str] = &["Division", "Sub-", "Group", "Family"];

pub struct SourceExtractor {
    with_legacy: Regex,
    without_legacy: Regex,
    legacy_suffix: Regex,
}

impl SourceExtractor {
    pub fn new() -> Result<Self, CrosswalkError> {
        Ok(Self {
            with_legacy: Regex::new(r"^(\d{4}\.\d{4})\s+(.+?)\s+(\d{4}\.\d{2})$")?,
            without_legacy: Regex::new(r"^(\d{4}\.\d{4})\s+(.+)$")?,
            legacy_suffix: Regex::new(r"\d{4}\.\d{2}$")?,
        })
    }
}

impl RecordExtractor for SourceExtractor {
    type Record = SourceRecord;

    fn name(&self) -> &'static str {
        "nco"
    }

    fn is_noise(&self, line: &str) -> bool {
        if SKIP_CONTAINS.iter().any(|s| line.contains(s)) {
            return true;
        }
        // Column header repeated at the top of each page
        if line.contains("NCO 2015") && line.contains("NCO 2004") {
            return true;
        }
        SKIP_PREFIXES.iter().any(|p| line.starts_with(p))
    }

    fn parse_line(&self, line: &str) -> Option<SourceRecord> {
        if let Some(caps) = self.with_legacy.captures(line) {
            return Some(SourceRecord {
                primary_code: caps[1].to_string(),
                secondary_code: Some(caps[3].to_string()),
                title: caps[2].trim().to_string(),
            });
        }

        // A trailing legacy code that failed the full pattern is not a title.
        if self.legacy_suffix.is_match(line) {
            return None;
        }

        let caps = self.without_legacy.captures(line)?;
        Some(SourceRecord {
            primary_code: caps[1].to_string(),
            secondary_code: None,
            title: caps[2].trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SourceExtractor {
        SourceExtractor::new().unwrap()
    }

    #[test]
    fn line_with_legacy_code() {
        let r = extractor().parse_line("1111.0001 Chief Legislator 1111.01").unwrap();
        assert_eq!(r.primary_code, "1111.0001");
        assert_eq!(r.title, "Chief Legislator");
        assert_eq!(r.secondary_code.as_deref(), Some("1111.01"));
    }

    #[test]
    fn line_without_legacy_code() {
        let r = extractor().parse_line("1111.0002 Deputy Legislator").unwrap();
        assert_eq!(r.primary_code, "1111.0002");
        assert_eq!(r.title, "Deputy Legislator");
        assert_eq!(r.secondary_code, None);
    }

    #[test]
    fn wide_layout_spacing() {
        let r = extractor()
            .parse_line("2131.0300      Mycologist             2211.30")
            .unwrap();
        assert_eq!(r.title, "Mycologist");
        assert_eq!(r.secondary_code.as_deref(), Some("2211.30"));
    }

    #[test]
    fn heading_is_noise() {
        let x = extractor();
        assert!(x.is_noise("Division 1 — Managers"));
        assert!(x.is_noise("Sub-Division 11 Chief Executives"));
        assert!(x.is_noise("Group 111 Legislators and Senior Officials"));
        assert!(x.is_noise("Family 1111 Legislators"));
        assert!(x.is_noise("NCO 2015 Title NCO 2004"));
        assert!(x.is_noise("National Classification of Occupations - 2015"));
        assert!(x.is_noise("VOLUME I"));
        assert!(!x.is_noise("1111.0001 Chief Legislator 1111.01"));
    }

    #[test]
    fn heading_produces_no_record() {
        let records = extractor().extract(&["Division 1 — Managers"]);
        assert!(records.is_empty());
    }

    #[test]
    fn prose_is_dropped() {
        let x = extractor();
        assert!(x.parse_line("The occupations listed below are grouped by skill level.").is_none());
        assert!(x.parse_line("1111.0001").is_none());
        assert!(x.parse_line("111.0001 Short Code").is_none());
    }

    #[test]
    fn bare_legacy_suffix_is_dropped() {
        // code + legacy code with no title between them
        assert!(extractor().parse_line("1111.0001 1111.01").is_none());
    }

    #[test]
    fn extract_keeps_document_order_across_pages() {
        let pages = [
            "National Classification of Occupations\nNCO 2015   Title   NCO 2004\n1111.0100 Member of Parliament 1111.10",
            "",
            "Family 1112 Senior Government Officials\n1112.0100 Administrative Official\nSee note 3 below.",
        ];
        let records = extractor().extract(&pages);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].primary_code, "1111.0100");
        assert_eq!(records[1].primary_code, "1112.0100");
        assert_eq!(records[1].secondary_code, None);
    }
}
