//! Annotated output table and collision-safe file naming.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use shipzone_core::AnnotatedRow;

use crate::error::DatasetError;
use crate::table::RawTable;

/// Computed columns, in output order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Nearest_Store",
    "Distance_km",
    "Zona",
    "Weight_Bulat",
    "Rates_kg",
    "Shipping_Cost_Rp",
];

/// Upper bound on `_N` suffixes tried after the timestamped name is taken.
const MAX_SUFFIX_ATTEMPTS: u32 = 1_000;

/// `Product_Sales_Analysis.csv` → `Product_Sales_Analysis20261019_101500.csv`.
#[must_use]
pub fn timestamped_path(base: &Path, now: NaiveDateTime) -> PathBuf {
    with_stem_suffix(base, &now.format("%Y%m%d_%H%M%S").to_string())
}

fn with_stem_suffix(base: &Path, suffix: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    base.with_file_name(name)
}

/// Create the output file without ever replacing an existing one.
///
/// Tries `base`, then the timestamped name, then the timestamped name with
/// `_1`, `_2`, … appended. Each attempt uses create-new semantics.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] on any error other than the name being taken,
/// or if every candidate is taken.
pub fn create_output_file(
    base: &Path,
    now: NaiveDateTime,
) -> Result<(PathBuf, File), DatasetError> {
    let stamped = timestamped_path(base, now);
    let stamp = now.format("%Y%m%d_%H%M%S").to_string();
    let candidates = std::iter::once(base.to_path_buf())
        .chain(std::iter::once(stamped))
        .chain((1..=MAX_SUFFIX_ATTEMPTS).map(|n| with_stem_suffix(base, &format!("{stamp}_{n}"))));

    for candidate in candidates {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => {
                if candidate != base {
                    tracing::info!(
                        requested = %base.display(),
                        actual = %candidate.display(),
                        "output file already exists; writing to a new name"
                    );
                }
                return Ok((candidate, file));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(DatasetError::Io {
                    path: candidate.display().to_string(),
                    source: e,
                })
            }
        }
    }

    Err(DatasetError::Io {
        path: base.display().to_string(),
        source: std::io::Error::new(
            ErrorKind::AlreadyExists,
            "no free output file name available",
        ),
    })
}

/// Header row for the output: input headers, then computed columns that are
/// not already present.
fn output_headers(input: &[String]) -> (Vec<String>, [usize; 6]) {
    let mut headers = input.to_vec();
    let mut positions = [0usize; 6];
    for (slot, name) in positions.iter_mut().zip(OUTPUT_COLUMNS) {
        *slot = if let Some(idx) = headers.iter().position(|h| h == name) {
            idx
        } else {
            headers.push(name.to_string());
            headers.len() - 1
        };
    }
    (headers, positions)
}

fn computed_cells(row: &AnnotatedRow) -> [String; 6] {
    [
        row.nearest_store().unwrap_or_default().to_string(),
        row.distance_km().to_string(),
        row.zone().unwrap_or_default().to_string(),
        row.weight_rounded().to_string(),
        row.rate_per_kg().to_string(),
        row.shipping_cost_display.clone(),
    ]
}

/// Write the annotated table to `file` (already created at `path`).
///
/// `table.records` and `rows` must be index-aligned. Computed columns
/// overwrite same-named input columns in place and are appended otherwise.
///
/// # Errors
///
/// Returns [`DatasetError::Csv`] if writing fails.
pub fn write_annotated(
    file: File,
    path: &Path,
    table: &RawTable,
    rows: &[AnnotatedRow],
) -> Result<(), DatasetError> {
    let csv_err = |e: csv::Error| DatasetError::Csv {
        path: path.display().to_string(),
        source: e,
    };

    let (headers, positions) = output_headers(&table.headers);
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&headers).map_err(csv_err)?;

    for (record, row) in table.records.iter().zip(rows) {
        let mut cells = record.clone();
        cells.resize(headers.len(), String::new());
        for (pos, value) in positions.iter().zip(computed_cells(row)) {
            cells[*pos] = value;
        }
        writer.write_record(&cells).map_err(csv_err)?;
    }

    writer.flush().map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "output table written");
    Ok(())
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
