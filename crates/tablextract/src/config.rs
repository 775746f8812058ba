//! Run configuration: where to write, which pages to scan, how to detect.

use std::path::PathBuf;

use pdfplumber::{Strategy, TableSettings};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default tolerance for snapping, joining and text assignment.
pub const DEFAULT_TOLERANCE: f64 = 3.0;

/// Options for the extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Directory receiving one `.xlsx` file per table. Created if missing.
    pub output_dir: PathBuf,
    /// 0-based page indices to scan, in order. `None` scans every page.
    pub pages: Option<Vec<usize>>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pages: None,
        }
    }
}

impl ExtractConfig {
    /// Configuration writing into `output_dir`, scanning all pages.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            pages: None,
        }
    }

    /// Restrict the run to the given 0-based page indices.
    pub fn with_pages(mut self, pages: Vec<usize>) -> Self {
        self.pages = Some(pages);
        self
    }
}

/// Options for opening the input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Password for encrypted PDFs.
    pub password: Option<String>,
}

/// Table detection tuning handed to pdfplumber.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSettings {
    pub strategy: Strategy,
    /// Snap tolerance for aligning nearby edges.
    pub snap_tolerance: f64,
    /// Join tolerance for merging collinear edges.
    pub join_tolerance: f64,
    /// Tolerance for assigning text to cells.
    pub text_tolerance: f64,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Lattice,
            snap_tolerance: DEFAULT_TOLERANCE,
            join_tolerance: DEFAULT_TOLERANCE,
            text_tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DetectionSettings {
    /// Expand into pdfplumber settings, applying each tolerance to both axes.
    pub fn to_table_settings(&self) -> TableSettings {
        TableSettings {
            strategy: self.strategy,
            snap_tolerance: self.snap_tolerance,
            snap_x_tolerance: self.snap_tolerance,
            snap_y_tolerance: self.snap_tolerance,
            join_tolerance: self.join_tolerance,
            join_x_tolerance: self.join_tolerance,
            join_y_tolerance: self.join_tolerance,
            text_tolerance: self.text_tolerance,
            text_x_tolerance: self.text_tolerance,
            text_y_tolerance: self.text_tolerance,
            ..TableSettings::default()
        }
    }
}
