//! Document access: page count and per-page table detection.
//!
//! [`TableSource`] abstracts the detection library so the extraction routine
//! can run against any document model. [`PdfSource`] is the implementation
//! backed by `pdfplumber`.

use std::path::Path;

use pdfplumber::{Pdf, PdfError, Table, TableSettings};

use crate::config::{DetectionSettings, OpenOptions};
use crate::error::ExtractError;
use crate::frame::RawTable;

/// A document whose pages can be scanned for tables.
pub trait TableSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Detect tables on the page at 0-based `index`, in detection order.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the page cannot be loaded or interpreted.
    fn page_tables(&self, index: usize) -> Result<Vec<RawTable>, PdfError>;
}

/// An open PDF document plus the detection settings applied to each page.
pub struct PdfSource {
    pdf: Pdf,
    settings: TableSettings,
}

impl PdfSource {
    /// Open the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if `path` does not exist, and
    /// [`ExtractError::Open`] if the file is unreadable, not a PDF, or
    /// encrypted without a matching password.
    pub fn open(
        path: &Path,
        options: &OpenOptions,
        detection: &DetectionSettings,
    ) -> Result<Self, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }

        let opened = match options.password.as_deref() {
            Some(password) => Pdf::open_file_with_password(path, password.as_bytes(), None),
            None => Pdf::open_file(path, None),
        };
        let pdf = opened.map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), pages = pdf.page_count(), "opened document");
        Ok(Self::new(pdf, detection))
    }

    /// Wrap an already opened document.
    pub fn new(pdf: Pdf, detection: &DetectionSettings) -> Self {
        Self {
            pdf,
            settings: detection.to_table_settings(),
        }
    }
}

impl TableSource for PdfSource {
    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn page_tables(&self, index: usize) -> Result<Vec<RawTable>, PdfError> {
        let page = self.pdf.page(index)?;
        Ok(page
            .find_tables(&self.settings)
            .iter()
            .map(raw_rows)
            .collect())
    }
}

/// Cell text of a detected table, row by row.
pub fn raw_rows(table: &Table) -> RawTable {
    table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
        .collect()
}
