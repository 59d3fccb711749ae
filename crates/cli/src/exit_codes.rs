//! CLI Exit Code Registry
//!
//! Single source of truth for `occwalk` exit codes. Scripts rely on them.
//!
//! | Range   | Domain     | Description                                   |
//! |---------|------------|-----------------------------------------------|
//! | 0       | Universal  | Success                                       |
//! | 1       | Universal  | General error (unspecified)                   |
//! | 2       | Universal  | Usage error (bad args, missing input file)    |
//! | 3-4     | Universal  | I/O and document parse failures               |
//! | 10-19   | crosswalk  | Extraction yield and rule config codes        |

use occwalk_crosswalk::CrosswalkError;

// =============================================================================
// Universal (0-4)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing input document.
pub const EXIT_USAGE: u8 = 2;

/// Cannot read an input or write an output file.
pub const EXIT_IO: u8 = 3;

/// Document text could not be extracted (pdftotext failure, non-UTF-8 text).
pub const EXIT_PARSE: u8 = 4;

// =============================================================================
// Crosswalk (10-19)
// =============================================================================

/// The source document yielded no records. The CSV is still written.
pub const EXIT_EMPTY_EXTRACTION: u8 = 10;

/// Rule config failed to parse or validate.
pub const EXIT_INVALID_RULES: u8 = 11;

/// Map an engine error to its exit code.
pub fn crosswalk_exit_code(err: &CrosswalkError) -> u8 {
    match err {
        CrosswalkError::ConfigParse(_) | CrosswalkError::ConfigValidation(_) => EXIT_INVALID_RULES,
        CrosswalkError::EmptyPrimaryCode { .. } => EXIT_USAGE,
        CrosswalkError::Pattern(_) => EXIT_ERROR,
    }
}
