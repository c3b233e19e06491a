use regex::Regex;

use crate::errors::PublishError;

pub const DEFAULT_START_MARKER: &str = "<!-- DAILY_WORD_START -->";
pub const DEFAULT_END_MARKER: &str = "<!-- DAILY_WORD_END -->";

/// Literal start/end strings delimiting the replaceable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Replace the first marked region of `host` with `inner`.
///
/// Markers are matched literally. The span runs from the first `start` to the
/// nearest `end` after it; later marker pairs are left untouched. The result
/// is `before + start + "\n" + inner + "\n" + end + after`.
pub fn patch_region(
    host: &str,
    start: &str,
    end: &str,
    inner: &str,
) -> Result<String, PublishError> {
    if start.is_empty() || !host.contains(start) {
        return Err(PublishError::MarkerNotFound {
            marker: start.to_string(),
        });
    }
    if end.is_empty() {
        return Err(PublishError::MarkerNotFound {
            marker: end.to_string(),
        });
    }

    let pattern = Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(start),
        regex::escape(end)
    ))?;
    let span = pattern
        .find(host)
        .ok_or_else(|| PublishError::MarkerNotFound {
            marker: end.to_string(),
        })?;

    let mut patched = String::with_capacity(host.len() + inner.len());
    patched.push_str(&host[..span.start()]);
    patched.push_str(start);
    patched.push('\n');
    patched.push_str(inner);
    patched.push('\n');
    patched.push_str(end);
    patched.push_str(&host[span.end()..]);
    Ok(patched)
}
