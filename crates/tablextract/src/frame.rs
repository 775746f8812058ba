//! Labeled tabular structure built from a detected table's raw rows.

/// Rows of cell text as returned by table detection. `None` marks an empty cell.
pub type RawTable = Vec<Vec<Option<String>>>;

/// A table with named columns: the first raw row becomes the header,
/// every following row a record.
///
/// All records have exactly `columns.len()` cells. Short rows are padded
/// with `None`; a row wider than the header widens the frame with
/// unnamed (empty) columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Column labels, whitespace-trimmed.
    pub columns: Vec<String>,
    /// Data rows, each padded to the frame width.
    pub records: Vec<Vec<Option<String>>>,
}

impl Frame {
    /// Build a frame from raw rows.
    ///
    /// Returns `None` for a table with no rows at all; there is nothing to
    /// label and nothing to write.
    pub fn from_rows(rows: RawTable) -> Option<Self> {
        let mut rows = rows.into_iter();
        let header = rows.next()?;
        let records: Vec<Vec<Option<String>>> = rows.collect();

        let width = records
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let mut columns: Vec<String> = header
            .into_iter()
            .map(|label| label.map(|l| l.trim().to_string()).unwrap_or_default())
            .collect();
        columns.resize(width, String::new());

        let records = records
            .into_iter()
            .map(|mut record| {
                record.resize(width, None);
                record
            })
            .collect();

        Some(Self { columns, records })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows, excluding the header.
    pub fn height(&self) -> usize {
        self.records.len()
    }

    /// Value at (`row`, `col`) of the data section, `None` if empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.records.get(row)?.get(col)?.as_deref()
    }
}
