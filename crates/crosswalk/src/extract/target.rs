//! O*NET occupation list lines: `[job zone | Not available]  NN-NNNN.NN  Title  [Bright Outlook]`.

use regex::Regex;

use super::RecordExtractor;
use crate::error::CrosswalkError;
use crate::model::TargetRecord;

/// Site navigation and table chrome.
const SKIP_CONTAINS: &[&str] = &[
    "See All Occupations",
    "onetonline.org",
    "Data-level",
    "Show Job Zones",
    "Show occupations",
    "Save Table",
    "Find in list",
];

/// All three must be present for the column header row.
const HEADER_TOKENS: &[&str] = &["Job Zone", "Code", "Occupation"];

pub struct TargetExtractor {
    /// Tried in order; each yields (code, title) from its last two groups.
    patterns: Vec<Regex>,
}

impl TargetExtractor {
    pub fn new() -> Result<Self, CrosswalkError> {
        const CODE: &str = r"\d{2}-\d{4}\.\d{2}";
        const TAIL: &str = r"\s+(.+?)(?:\s+Bright Outlook)?$";

        let patterns = vec![
            // bare code, optionally glued to a zone digit or marker
            Regex::new(&format!(r"^(?:Not available|\d)?\s*({CODE}){TAIL}"))?,
            // job zone digit column
            Regex::new(&format!(r"^(\d)\s+({CODE}){TAIL}"))?,
            // job zone not assigned
            Regex::new(&format!(r"^Not available\s+({CODE}){TAIL}"))?,
        ];
        Ok(Self { patterns })
    }
}

impl RecordExtractor for TargetExtractor {
    type Record = TargetRecord;

    fn name(&self) -> &'static str {
        "onet"
    }

    fn is_noise(&self, line: &str) -> bool {
        HEADER_TOKENS.iter().all(|t| line.contains(t))
            || SKIP_CONTAINS.iter().any(|s| line.contains(s))
    }

    fn parse_line(&self, line: &str) -> Option<TargetRecord> {
        self.patterns.iter().find_map(|re| {
            let caps = re.captures(line)?;
            let n = caps.len();
            Some(TargetRecord {
                code: caps[n - 2].to_string(),
                title: caps[n - 1].trim().to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TargetExtractor {
        TargetExtractor::new().unwrap()
    }

    #[test]
    fn bare_code_line() {
        let r = extractor().parse_line("23-1011.00 Lawyers").unwrap();
        assert_eq!(r.code, "23-1011.00");
        assert_eq!(r.title, "Lawyers");
    }

    #[test]
    fn job_zone_prefixed_line_strips_bright_outlook() {
        let r = extractor()
            .parse_line("5 29-1141.00 Registered Nurses Bright Outlook")
            .unwrap();
        assert_eq!(r.code, "29-1141.00");
        assert_eq!(r.title, "Registered Nurses");
    }

    #[test]
    fn not_available_prefixed_line() {
        let r = extractor()
            .parse_line("Not available 29-9099.01 Midwives")
            .unwrap();
        assert_eq!(r.code, "29-9099.01");
        assert_eq!(r.title, "Midwives");
    }

    #[test]
    fn title_with_commas_is_kept_whole() {
        let r = extractor()
            .parse_line("4 19-2042.00 Geoscientists, Except Hydrologists and Geographers")
            .unwrap();
        assert_eq!(r.title, "Geoscientists, Except Hydrologists and Geographers");
    }

    #[test]
    fn navigation_is_noise() {
        let x = extractor();
        assert!(x.is_noise("Job Zone Code Occupation"));
        assert!(x.is_noise("See All Occupations"));
        assert!(x.is_noise("https://www.onetonline.org/find/all"));
        assert!(x.is_noise("Save Table: XLSX CSV"));
        assert!(!x.is_noise("Code 11-1011.00 Chief Executives"));
    }

    #[test]
    fn non_record_lines_are_dropped() {
        let x = extractor();
        assert!(x.parse_line("Occupations with Bright Outlook are marked").is_none());
        assert!(x.parse_line("23-1011 Lawyers").is_none());
    }

    #[test]
    fn extract_over_pages() {
        let pages = [
            "All Occupations\nJob Zone Code Occupation\n4 11-1011.00 Chief Executives Bright Outlook",
            "Not available 11-1011.03 Chief Sustainability Officers\nhttps://www.onetonline.org/find/all",
        ];
        let records = extractor().extract(&pages);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Chief Executives");
        assert_eq!(records[1].code, "11-1011.03");
    }
}
