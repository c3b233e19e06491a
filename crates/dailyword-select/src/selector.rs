use std::path::Path;

use chrono::NaiveDate;
use dailyword_core::{DailySeed, RequiredColumns, WordRecord};
use tracing::{debug, error, info};

use crate::dataset::load_dataset;
use crate::draw::draw;
use crate::errors::SelectError;

/// Select the record for `today`, surfacing the failure reason.
pub fn try_select_daily(
    source: &Path,
    columns: &RequiredColumns,
    today: NaiveDate,
) -> Result<WordRecord, SelectError> {
    let dataset = load_dataset(source, columns)?;
    let seed = DailySeed::from_date(today);

    debug!(
        path = %source.display(),
        eligible = dataset.records.len(),
        skipped = dataset.skipped,
        seed = seed.value(),
        "dataset loaded"
    );

    draw(&dataset.records, seed)
        .cloned()
        .ok_or(SelectError::EmptyDataset {
            skipped: dataset.skipped,
        })
}

/// Select the record for `today`, or `None` when the dataset cannot provide one.
///
/// Every failure is logged here; callers render a fallback instead.
pub fn select_daily(
    source: &Path,
    columns: &RequiredColumns,
    today: NaiveDate,
) -> Option<WordRecord> {
    match try_select_daily(source, columns, today) {
        Ok(record) => {
            info!(
                event = "word_selected",
                date = %today,
                word = %record.word,
                "word selected"
            );
            Some(record)
        }
        Err(err) => {
            error!(
                event = "selection_failed",
                path = %source.display(),
                error = %err,
                "could not select today's word"
            );
            None
        }
    }
}
