use std::io::{self, IsTerminal, Write};
use std::path::Path;

use tablextract::{DetectionSettings, ExtractError, OpenOptions, PdfSource};

use crate::page_range::parse_page_range;

/// Open the input PDF, printing a user-facing message on failure.
///
/// Returns `Err(1)` if the file is missing, unreadable, or not a valid PDF.
pub fn open_source(
    file: &Path,
    password: Option<&str>,
    detection: &DetectionSettings,
) -> Result<PdfSource, i32> {
    let options = OpenOptions {
        password: password.map(str::to_string),
    };
    PdfSource::open(file, &options, detection).map_err(|e| report_error(&e))
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// `None` selects every page.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Option<Vec<usize>>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map(Some).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok(None),
    }
}

/// Print `err` to stderr and return the process exit code for it.
pub fn report_error(err: &ExtractError) -> i32 {
    tracing::debug!(?err, "extraction failed");
    eprintln!("Error: {err}");
    1
}

/// Prints "Scanning page N/M..." to stderr, only when stderr is a terminal.
pub struct ProgressReporter {
    is_tty: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report that page `current` of `total` selected pages is being scanned.
    pub fn report(&self, current: usize, total: usize) {
        if self.is_tty {
            eprint!("\rScanning page {current}/{total}...");
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line.
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
