//! Comma-separated tool names.

use super::NONE_DETECTED;
use crate::Detection;
use std::collections::BTreeSet;

/// Render the distinct detected tool names, sorted and joined with `", "`.
///
/// An empty scan renders as [`NONE_DETECTED`].
pub fn format_compact(detections: &[Detection]) -> String {
    if detections.is_empty() {
        return NONE_DETECTED.to_string();
    }

    let names: BTreeSet<&str> = detections.iter().map(|d| d.tool_name()).collect();
    names.into_iter().collect::<Vec<_>>().join(", ")
}
