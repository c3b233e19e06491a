use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;
use dailyword_core::{RequiredColumns, WordRecord};
use tracing::debug;

use crate::errors::SelectError;

/// Eligible rows of a word list, in source order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<WordRecord>,
    /// Rows dropped because a required field was absent or blank.
    pub skipped: usize,
}

/// Load a CSV dataset from disk.
pub fn load_dataset(path: &Path, columns: &RequiredColumns) -> Result<Dataset, SelectError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SelectError::SourceNotFound(path.to_path_buf()),
        _ => SelectError::Io(err),
    })?;
    read_dataset(file, columns)
}

/// Parse a CSV dataset from any reader.
///
/// Rows shorter than the header are accepted and treated as incomplete.
pub fn read_dataset<R: Read>(input: R, columns: &RequiredColumns) -> Result<Dataset, SelectError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect::<Vec<_>>();
    let mut header_map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        header_map.entry(name.as_str()).or_insert(idx);
    }

    let mut positions = [0_usize; 4];
    let mut missing = Vec::new();
    for (slot, name) in positions.iter_mut().zip(columns.names()) {
        match header_map.get(name) {
            Some(position) => *slot = *position,
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(SelectError::Schema { missing });
    }

    let mut dataset = Dataset::default();
    for (row_index, row) in reader.records().enumerate() {
        let row = row?;
        match record_from_row(&row, &positions) {
            Some(record) => dataset.records.push(record),
            None => {
                dataset.skipped += 1;
                debug!(row = row_index + 1, "skipping incomplete row");
            }
        }
    }

    Ok(dataset)
}

fn record_from_row(row: &StringRecord, positions: &[usize; 4]) -> Option<WordRecord> {
    let [word, country, pronunciation, meaning] = positions.map(|idx| row.get(idx));
    WordRecord::new(word?, country?, pronunciation?, meaning?).ok()
}
