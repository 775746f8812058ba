//! Deterministic output file names.

use std::path::{Path, PathBuf};

/// File extension of written workbooks.
pub const XLSX_EXTENSION: &str = "xlsx";

/// File name for the `index`-th table (1-based) found on page `page` (1-based).
///
/// ```
/// assert_eq!(tablextract::table_file_name(3, 2), "table_page3_num2.xlsx");
/// ```
pub fn table_file_name(page: usize, index: usize) -> String {
    format!("table_page{page}_num{index}.{XLSX_EXTENSION}")
}

/// Full output path for a table inside `output_dir`.
pub fn table_path(output_dir: &Path, page: usize, index: usize) -> PathBuf {
    output_dir.join(table_file_name(page, index))
}
