use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use dailyword_core::WordRecord;
use tracing::info;

use crate::atomic::write_bytes_atomic;
use crate::errors::PublishError;
use crate::region::{Markers, patch_region};
use crate::template::render_document;

/// Replace the marked region of the document at `path` with `inner`.
///
/// Nothing is written unless both markers are found.
pub fn patch_file(path: &Path, markers: &Markers, inner: &str) -> Result<(), PublishError> {
    let host = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => PublishError::SourceNotFound(path.to_path_buf()),
        _ => PublishError::Io(err),
    })?;

    let patched = patch_region(&host, &markers.start, &markers.end, inner)?;
    write_document(path, &patched)?;

    info!(
        event = "region_patched",
        path = %path.display(),
        changed = patched != host,
        "document region replaced"
    );
    Ok(())
}

/// Regenerate the whole document at `path`, overwriting any existing file.
pub fn write_full(
    path: &Path,
    record: Option<&WordRecord>,
    now: NaiveDateTime,
) -> Result<(), PublishError> {
    let document = render_document(record, now);
    write_document(path, &document)?;

    info!(
        event = "document_regenerated",
        path = %path.display(),
        bytes = document.len(),
        "document regenerated"
    );
    Ok(())
}

fn write_document(path: &Path, contents: &str) -> Result<(), PublishError> {
    write_bytes_atomic(path, contents.as_bytes()).map_err(|source| PublishError::Write {
        path: path.to_path_buf(),
        source,
    })
}
