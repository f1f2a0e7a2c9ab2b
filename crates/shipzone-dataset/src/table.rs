//! Raw tabular input: a header row plus string cells.

use std::io::Read;
use std::path::Path;

use crate::error::DatasetError;

/// A header row and its records, all cells kept as text.
///
/// Headers are trimmed of surrounding whitespace. Every record has exactly
/// `headers.len()` cells: short records are padded with empty cells and
/// surplus cells are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of the first header equal to `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read a CSV file with a header row.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened,
/// [`DatasetError::Csv`] on malformed CSV, or [`DatasetError::EmptyTable`]
/// if there is no header row.
pub fn read_table(path: &Path) -> Result<RawTable, DatasetError> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let table = read_table_from(file, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "table loaded"
    );
    Ok(table)
}

fn read_table_from<R: Read>(reader: R, label: &str) -> Result<RawTable, DatasetError> {
    let csv_err = |e: csv::Error| DatasetError::Csv {
        path: label.to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(DatasetError::EmptyTable {
            path: label.to_string(),
        });
    }

    let width = headers.len();
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let mut cells: Vec<String> = record.iter().take(width).map(str::to_string).collect();
        cells.resize(width, String::new());
        records.push(cells);
    }

    Ok(RawTable { headers, records })
}
