use std::fs::File;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Log schema constants
// ---------------------------------------------------------------------------

/// Fixed input file, relative to the working directory.
pub const INPUT_FILE: &str = "powermeasure.csv";

/// The analyzer writes at least this many channel columns per row.
const MIN_COLUMNS: usize = 14;

// Column positions of the selected channels. Everything else is ignored.
const BACK_CURRENT: usize = 0;
const BACK_VOLTAGE: usize = 1;
const AUX_CURRENT: usize = 12;
const AUX_VOLTAGE: usize = 13;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure while reading the measurement log. Fatal either way: no partial
/// dataset is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing, unreadable, or failed mid-read.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row is malformed: too few columns, or a selected field that does
    /// not parse as a float. `row` is 1-based.
    #[error("row {row}: {message}")]
    DataFormat { row: usize, message: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a measurement log into a [`Dataset`], preserving row order.
///
/// Expected layout: headerless comma-delimited rows with at least 14
/// columns. Columns 0 and 1 are the back rail current/voltage, columns 12
/// and 13 the aux rail current/voltage:
///
/// ```csv
/// 1.52,12.01,0.0,...,0.21,12.05
/// 1.49,12.02,0.0,...,0.20,12.04
/// ```
///
/// An empty file yields an empty dataset.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    // Flexible: row width is validated here, per row, so a short row
    // surfaces as a DataFormat error with its row number.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let raw = match result {
            Ok(raw) => raw,
            Err(err) => return Err(csv_error(path, row, err)),
        };

        if raw.len() < MIN_COLUMNS {
            return Err(LoadError::DataFormat {
                row,
                message: format!(
                    "expected at least {MIN_COLUMNS} columns, got {}",
                    raw.len()
                ),
            });
        }

        records.push(Record {
            back_current: parse_field(&raw, BACK_CURRENT, "back_current", row)?,
            back_voltage: parse_field(&raw, BACK_VOLTAGE, "back_voltage", row)?,
            aux_current: parse_field(&raw, AUX_CURRENT, "aux_current", row)?,
            aux_voltage: parse_field(&raw, AUX_VOLTAGE, "aux_voltage", row)?,
        });
    }

    Ok(Dataset::from_records(records))
}

/// Parse one selected field as `f64`. The column bound was checked above.
fn parse_field(
    raw: &StringRecord,
    column: usize,
    name: &str,
    row: usize,
) -> Result<f64, LoadError> {
    let text = raw.get(column).unwrap_or("");
    text.parse().map_err(|_| LoadError::DataFormat {
        row,
        message: format!("{name} (column {column}): '{text}' is not a number"),
    })
}

/// Split a reader-level error into the taxonomy: I/O failures count as file
/// access problems, everything else (e.g. invalid UTF-8) as bad data.
fn csv_error(path: &Path, row: usize, err: csv::Error) -> LoadError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::DataFormat { row, message },
    }
}
