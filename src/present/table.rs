//! Aligned table, one row per match.

use super::NONE_DETECTED;
use crate::Detection;
use std::fmt::Write;
use std::path::Path;

/// Width of the tool-name column.
pub const NAME_WIDTH: usize = 22;

const HEADER: &str = "Tool                   | Type | Path\n\
                      -----------------------|------|-----\n";

/// Render detections as a table sorted by tool name, then path.
///
/// Tool names longer than [`NAME_WIDTH`] characters are truncated.
/// An empty scan renders as [`NONE_DETECTED`].
pub fn format_table(detections: &[Detection], directory: &Path) -> String {
    if detections.is_empty() {
        return NONE_DETECTED.to_string();
    }

    let mut rows: Vec<&Detection> = detections.iter().collect();
    rows.sort_by(|a, b| {
        a.tool_name()
            .cmp(b.tool_name())
            .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
    });

    let mut out = String::from(HEADER);
    for d in rows {
        let _ = writeln!(
            out,
            "{:<width$} | {} | {}",
            fit_name(d.tool_name()),
            d.kind.marker(),
            d.relative_to(directory).display(),
            width = NAME_WIDTH
        );
    }
    out
}

/// Truncate to [`NAME_WIDTH`] characters.
fn fit_name(name: &str) -> &str {
    match name.char_indices().nth(NAME_WIDTH) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}
