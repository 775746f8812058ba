//! The extraction routine: scan pages, convert each table, write one workbook per table.

use std::fs;
use std::path::PathBuf;

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::frame::Frame;
use crate::naming::table_path;
use crate::source::TableSource;
use crate::xlsx::write_frame;

/// A table written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrittenTable {
    /// 1-based page number.
    pub page: usize,
    /// 1-based position of the table on its page.
    pub index: usize,
    pub path: PathBuf,
    /// Data rows, excluding the header.
    pub rows: usize,
    pub columns: usize,
}

/// A page whose tables could not be detected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedPage {
    /// 1-based page number.
    pub page: usize,
    pub error: String,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractReport {
    pub output_dir: PathBuf,
    /// Pages scanned, including skipped ones.
    pub pages_scanned: usize,
    /// Written tables in page order, then detection order.
    pub tables: Vec<WrittenTable>,
    /// Pages skipped because detection failed.
    pub skipped_pages: Vec<SkippedPage>,
}

impl ExtractReport {
    /// True when no table was written.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Writes every table of a [`TableSource`] into the configured output directory.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Run over `source` without progress reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::CreateDir`] or [`ExtractError::Write`] on
    /// output failures. Detection failures on a page are not errors: the
    /// page is logged, recorded in [`ExtractReport::skipped_pages`] and the
    /// run continues.
    pub fn run(&self, source: &impl TableSource) -> Result<ExtractReport, ExtractError> {
        self.run_with_progress(source, |_, _| {})
    }

    /// Like [`Extractor::run`], calling `progress(position, total)` before each
    /// page is scanned. `position` counts from 1 over the selected pages.
    pub fn run_with_progress(
        &self,
        source: &impl TableSource,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<ExtractReport, ExtractError> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| ExtractError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        let page_count = source.page_count();
        let indices: Vec<usize> = match &self.config.pages {
            Some(pages) => pages.iter().copied().filter(|&p| p < page_count).collect(),
            None => (0..page_count).collect(),
        };

        let mut report = ExtractReport {
            output_dir: output_dir.clone(),
            ..ExtractReport::default()
        };

        for (position, &idx) in indices.iter().enumerate() {
            progress(position + 1, indices.len());
            report.pages_scanned += 1;
            let page = idx + 1;

            let tables = match source.page_tables(idx) {
                Ok(tables) => tables,
                Err(source) => {
                    let err = ExtractError::Page { page, source };
                    tracing::warn!("skipping page {page}: {err}");
                    report.skipped_pages.push(SkippedPage {
                        page,
                        error: err.to_string(),
                    });
                    continue;
                }
            };

            for (i, rows) in tables.into_iter().enumerate() {
                let index = i + 1;
                let Some(frame) = Frame::from_rows(rows) else {
                    tracing::debug!("table {index} on page {page} is empty, skipping");
                    continue;
                };
                tracing::info!("found table {index} on page {page}");

                let path = table_path(output_dir, page, index);
                write_frame(&frame, &path).map_err(|source| ExtractError::Write {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!("saved table to {}", path.display());

                report.tables.push(WrittenTable {
                    page,
                    index,
                    path,
                    rows: frame.height(),
                    columns: frame.width(),
                });
            }
        }

        if report.is_empty() {
            tracing::warn!("no tables found");
        } else {
            tracing::info!("saved {} tables", report.tables.len());
        }

        Ok(report)
    }
}
