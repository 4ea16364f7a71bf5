//! Grouped, human-readable text.

use super::group_by_tool;
use crate::Detection;
use std::fmt::Write;
use std::path::Path;

/// Render detections grouped by tool.
///
/// Each group shows the tool name, description and URL, followed by one
/// `[file]`/`[dir ]` line per match. Groups are sorted by tool name.
///
/// An empty scan renders as
/// `No AI coding tool configurations detected in <directory>`.
pub fn format_plain(detections: &[Detection], directory: &Path) -> String {
    if detections.is_empty() {
        return format!(
            "No AI coding tool configurations detected in {}",
            directory.display()
        );
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "AI coding tools detected in {}:\n", directory.display());

    for (sig, hits) in group_by_tool(detections) {
        let _ = writeln!(out, "  {}", sig.name);
        let _ = writeln!(out, "    {}", sig.description);
        let _ = writeln!(out, "    {}", sig.url);
        out.push_str("    Files:\n");

        for d in hits {
            let _ = writeln!(
                out,
                "      [{}] {}",
                d.kind.marker(),
                d.relative_to(directory).display()
            );
        }
        out.push('\n');
    }

    out
}
