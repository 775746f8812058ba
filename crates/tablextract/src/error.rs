//! Error type for opening documents and writing extracted tables.

use std::path::PathBuf;

use pdfplumber::PdfError;
use thiserror::Error;

/// Errors produced while extracting tables to spreadsheet files.
///
/// [`ExtractError::NotFound`] and [`ExtractError::Open`] are input errors;
/// [`ExtractError::CreateDir`] and [`ExtractError::Write`] are output errors.
/// [`ExtractError::Page`] is page-local and is recorded rather than returned
/// by [`Extractor::run`](crate::Extractor::run).
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input exists but could not be opened as a PDF document.
    #[error("failed to open PDF {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: PdfError,
    },

    /// Table detection failed on a single page (1-based page number).
    #[error("failed to read page {page}: {source}")]
    Page {
        page: usize,
        #[source]
        source: PdfError,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A spreadsheet file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
