use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use pdfplumber::Strategy;
use tablextract::{DEFAULT_OUTPUT_DIR, DetectionSettings};

/// Extract every table from a PDF and save each one as an Excel (.xlsx) file.
#[derive(Debug, Parser)]
#[command(name = "tablextract", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory to write the .xlsx files into (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Summary format printed to stdout
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
    pub strategy: TableStrategy,

    /// Snap tolerance for aligning nearby edges (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub snap_tolerance: f64,

    /// Join tolerance for merging collinear edges (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub join_tolerance: f64,

    /// Text tolerance for assigning text to cells (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub text_tolerance: f64,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Log progress to stderr (repeat for debug output)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn detection_settings(&self) -> DetectionSettings {
        DetectionSettings {
            strategy: self.strategy.into(),
            snap_tolerance: self.snap_tolerance,
            join_tolerance: self.join_tolerance,
            text_tolerance: self.text_tolerance,
        }
    }
}

/// Format of the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// One line per written file, then a total
    Text,
    /// A single JSON object
    Json,
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableStrategy {
    /// Detect tables using visible ruling lines and rect edges
    Lattice,
    /// Like lattice, but only explicit line segments (no rect edges)
    LatticeStrict,
    /// Detect tables from text alignment (no borders needed)
    Stream,
}

impl From<TableStrategy> for Strategy {
    fn from(strategy: TableStrategy) -> Self {
        match strategy {
            TableStrategy::Lattice => Strategy::Lattice,
            TableStrategy::LatticeStrict => Strategy::LatticeStrict,
            TableStrategy::Stream => Strategy::Stream,
        }
    }
}
