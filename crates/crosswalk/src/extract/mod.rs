//! Line-oriented record extraction from paginated document text.
//!
//! Pages are joined in order, split into trimmed non-empty lines, and each
//! line is either discarded as noise, parsed into a record, or silently
//! dropped when no record pattern fits. Document order is preserved.

mod source;
mod target;

pub use source::SourceExtractor;
pub use target::TargetExtractor;

use crate::error::CrosswalkError;
use crate::model::{SourceRecord, TargetRecord};

pub trait RecordExtractor {
    type Record;

    /// Short label used in log lines.
    fn name(&self) -> &'static str;

    /// Headers, headings and navigation text that never hold a record.
    fn is_noise(&self, line: &str) -> bool;

    /// Parse one trimmed line. `None` means the line is not a record.
    fn parse_line(&self, line: &str) -> Option<Self::Record>;

    fn extract<S: AsRef<str>>(&self, pages: &[S]) -> Vec<Self::Record> {
        let text = join_pages(pages);
        let mut lines = 0usize;
        let mut records = Vec::new();

        for line in data_lines(&text) {
            lines += 1;
            if self.is_noise(line) {
                continue;
            }
            if let Some(record) = self.parse_line(line) {
                records.push(record);
            }
        }

        log::debug!(
            "{}: {} pages, {} lines, {} records",
            self.name(),
            pages.len(),
            lines,
            records.len()
        );
        records
    }
}

/// Join non-empty pages with line breaks, in page order.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trimmed, non-empty lines of a text stream.
pub fn data_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Extract NCO records with a fresh [`SourceExtractor`].
pub fn extract_source_records<S: AsRef<str>>(
    pages: &[S],
) -> Result<Vec<SourceRecord>, CrosswalkError> {
    Ok(SourceExtractor::new()?.extract(pages))
}

/// Extract O*NET records with a fresh [`TargetExtractor`].
pub fn extract_target_records<S: AsRef<str>>(
    pages: &[S],
) -> Result<Vec<TargetRecord>, CrosswalkError> {
    Ok(TargetExtractor::new()?.extract(pages))
}
