use chrono::{NaiveDate, NaiveDateTime};
use dailyword_publish::{patch_file, render, write_full};
use dailyword_select::select_daily;
use tracing::info;

use crate::CliError;
use crate::settings::Settings;

/// Select today's word and patch it into the marked region of the document.
pub fn run_update(settings: &Settings, today: NaiveDate, dry_run: bool) -> Result<(), CliError> {
    let record = select_daily(&settings.dataset_path, &settings.columns, today);
    let block = render(record.as_ref(), today);
    let markers = settings.markers.to_markers();

    if dry_run {
        println!("{}\n{}\n{}", markers.start, block, markers.end);
        return Ok(());
    }

    patch_file(&settings.document_path, &markers, &block)?;
    log_updated(settings, record.as_ref());
    Ok(())
}

/// Select the word for `now` and regenerate the whole document.
pub fn run_regenerate(settings: &Settings, now: NaiveDateTime) -> Result<(), CliError> {
    let record = select_daily(&settings.dataset_path, &settings.columns, now.date());
    write_full(&settings.document_path, record.as_ref(), now)?;
    log_updated(settings, record.as_ref());
    Ok(())
}

/// Print today's block, or the selected record as JSON.
pub fn run_show(settings: &Settings, today: NaiveDate, json: bool) -> Result<(), CliError> {
    let record = select_daily(&settings.dataset_path, &settings.columns, today);
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", render(record.as_ref(), today));
    }
    Ok(())
}

fn log_updated(settings: &Settings, record: Option<&dailyword_core::WordRecord>) {
    match record {
        Some(record) => info!(
            event = "document_updated",
            path = %settings.document_path.display(),
            word = %record.word,
            meaning = %record.meaning,
            "document updated"
        ),
        None => info!(
            event = "document_updated",
            path = %settings.document_path.display(),
            "document updated with fallback message"
        ),
    }
}
