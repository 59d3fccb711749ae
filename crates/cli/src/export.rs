//! Crosswalk CSV export.

use std::io::Write;
use std::path::Path;

use occwalk_crosswalk::CrosswalkEntry;

use crate::CliError;

pub const CSV_HEADER: [&str; 6] = [
    "NCO_2015_Code",
    "NCO_2004_Code",
    "NCO_Job_Title",
    "ONET_Code",
    "ONET_Job_Title",
    "Match_Score",
];

/// Write entries to `path`, replacing any existing file.
pub fn write_crosswalk_file(path: &Path, entries: &[CrosswalkEntry]) -> Result<(), CliError> {
    let f = std::fs::File::create(path)
        .map_err(|e| CliError::io(format!("cannot create {}: {}", path.display(), e)))?;
    write_crosswalk(std::io::BufWriter::new(f), entries)
}

/// Header is always written, even with zero entries.
pub fn write_crosswalk<W: Write>(writer: W, entries: &[CrosswalkEntry]) -> Result<(), CliError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| CliError::io(format!("CSV write error: {}", e)))?;

    for entry in entries {
        let score = entry.confidence_score.to_string();
        csv_writer
            .write_record([
                entry.source_primary_code.as_str(),
                entry.source_secondary_code.as_deref().unwrap_or(""),
                entry.source_title.as_str(),
                entry.target_code.as_str(),
                entry.target_title.as_str(),
                score.as_str(),
            ])
            .map_err(|e| CliError::io(format!("CSV write error: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CliError::io(format!("CSV flush error: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use occwalk_crosswalk::{MatchOutcome, MatchTier, SourceRecord, TargetRef};

    fn render(entries: &[CrosswalkEntry]) -> String {
        let mut buf = Vec::new();
        write_crosswalk(&mut buf, entries).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_only_for_empty_crosswalk() {
        assert_eq!(
            render(&[]),
            "NCO_2015_Code,NCO_2004_Code,NCO_Job_Title,ONET_Code,ONET_Job_Title,Match_Score\n"
        );
    }

    #[test]
    fn quotes_titles_with_commas() {
        let record = SourceRecord {
            primary_code: "2319.0100".into(),
            secondary_code: Some("2310.20".into()),
            title: "Principal, College of Arts".into(),
        };
        let target = TargetRef::new("11-9033.00", "Education Administrators, Postsecondary");
        let entry = CrosswalkEntry::new(&record, &MatchOutcome::resolved(&target, MatchTier::Keyword));

        let out = render(&[entry]);
        let line = out.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "2319.0100,2310.20,\"Principal, College of Arts\",11-9033.00,\"Education Administrators, Postsecondary\",95"
        );
    }

    #[test]
    fn unresolved_entry_has_empty_target_columns() {
        let record = SourceRecord {
            primary_code: "0110.0100".into(),
            secondary_code: None,
            title: "Commissioned Armed Forces Officer".into(),
        };
        let entry = CrosswalkEntry::new(&record, &MatchOutcome::unresolved());

        let out = render(&[entry]);
        assert_eq!(
            out.lines().nth(1).unwrap(),
            "0110.0100,,Commissioned Armed Forces Officer,,,0"
        );
    }
}
