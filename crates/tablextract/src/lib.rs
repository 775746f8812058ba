//! tablextract: write every table detected in a PDF to its own `.xlsx` file.
//!
//! Table detection is delegated to [`pdfplumber`]. This crate turns each
//! detected table into a [`Frame`] (first row as header, remaining rows as
//! records) and writes it to `table_page<p>_num<i>.xlsx` in an output
//! directory.
//!
//! ```ignore
//! use std::path::Path;
//! use tablextract::{DetectionSettings, ExtractConfig, Extractor, OpenOptions, PdfSource};
//!
//! let source = PdfSource::open(
//!     Path::new("report.pdf"),
//!     &OpenOptions::default(),
//!     &DetectionSettings::default(),
//! )?;
//! let report = Extractor::new(ExtractConfig::default()).run(&source)?;
//! println!("{} tables written", report.tables.len());
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod frame;
pub mod naming;
pub mod source;
pub mod xlsx;

pub use config::{DEFAULT_OUTPUT_DIR, DetectionSettings, ExtractConfig, OpenOptions};
pub use error::ExtractError;
pub use extract::{ExtractReport, Extractor, SkippedPage, WrittenTable};
pub use frame::{Frame, RawTable};
pub use naming::{table_file_name, table_path};
pub use source::{PdfSource, TableSource};
pub use xlsx::write_frame;
