//! Document reading: per-page text from PDFs (via pdftotext) or text files.

use std::path::Path;
use std::process::Command;

use crate::exit_codes::EXIT_IO;
use crate::CliError;

/// pdftotext separates pages with a form feed.
const PAGE_BREAK: char = '\u{c}';

/// Read a document as a sequence of page texts. `.pdf` files go through
/// pdftotext, anything else is read as UTF-8 text.
pub fn read_pages(file: &Path) -> Result<Vec<String>, CliError> {
    if !file.exists() {
        return Err(CliError::args(format!("File not found: {}", file.display())));
    }

    let text = if is_pdf(file) {
        run_pdftotext(file)?
    } else {
        let bytes = std::fs::read(file)
            .map_err(|e| CliError::io(format!("cannot read {}: {}", file.display(), e)))?;
        String::from_utf8(bytes)
            .map_err(|_| CliError::parse(format!("{} is not valid UTF-8 text", file.display())))?
    };

    let pages = split_pages(&text);
    log::debug!("{}: {} pages", file.display(), pages.len());
    Ok(pages)
}

pub fn split_pages(text: &str) -> Vec<String> {
    text.split(PAGE_BREAK).map(String::from).collect()
}

fn is_pdf(file: &Path) -> bool {
    file.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn run_pdftotext(file: &Path) -> Result<String, CliError> {
    which::which("pdftotext").map_err(|_| CliError {
        code: EXIT_IO,
        message: "pdftotext not installed (poppler-utils)".to_string(),
        hint: Some("Install with: apt install poppler-utils / brew install poppler".to_string()),
    })?;

    let file_str = file
        .to_str()
        .ok_or_else(|| CliError::args(format!("invalid file path: {}", file.display())))?;

    let output = Command::new("pdftotext")
        .args(["-layout", file_str, "-"])
        .output()
        .map_err(|e| CliError::io(format!("failed to run pdftotext: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::parse(format!(
            "pdftotext failed (exit {}): {}",
            output.status.code().unwrap_or(-1),
            stderr.trim(),
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
