//! Serialize a [`Frame`] to a single-sheet `.xlsx` workbook.
//!
//! The layout mirrors a data frame exported without its index: a bold header
//! row of column labels, then one row per record. Empty cells are left blank.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};

use crate::frame::Frame;

/// Name of the only worksheet in every written workbook.
pub const SHEET_NAME: &str = "Sheet1";

/// Largest column count a worksheet accepts (XFD).
const MAX_COLUMNS: usize = 16_384;
/// Largest row count a worksheet accepts, header included.
const MAX_ROWS: usize = 1_048_576;

/// Build an in-memory workbook holding `frame`.
pub fn frame_to_workbook(frame: &Frame) -> Result<Workbook, XlsxError> {
    if frame.width() > MAX_COLUMNS || frame.height() + 1 > MAX_ROWS {
        return Err(XlsxError::RowColumnLimitError);
    }

    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, label) in frame.columns.iter().enumerate() {
        let col = col as u16;
        if label.is_empty() {
            worksheet.write_blank(0, col, &header_format)?;
        } else {
            worksheet.write_string_with_format(0, col, label, &header_format)?;
        }
    }

    for (row, record) in frame.records.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in record.iter().enumerate() {
            if let Some(text) = cell.as_deref().filter(|t| !t.is_empty()) {
                worksheet.write_string(row, col as u16, text)?;
            }
        }
    }

    worksheet.autofit();
    Ok(workbook)
}

/// Write `frame` to `path`, replacing any existing file.
pub fn write_frame(frame: &Frame, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = frame_to_workbook(frame)?;
    workbook.save(path)
}
