//! Rendering of scan results.
//!
//! Four renderers share one input, the detections from a single scan plus
//! the scanned directory:
//!
//! - [`plain`]: grouped, human-readable text (the default)
//! - [`json`]: a pretty-printed JSON document for scripts
//! - [`compact`]: a comma-separated list of tool names
//! - [`table`]: an aligned table with one row per match
//!
//! [`listing`] renders the registry itself and needs no scan.
//!
//! All renderers print paths relative to the scanned directory via
//! [`Detection::relative_to`], which falls back to the absolute path.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vibedetector::{detect, render, OutputFormat};
//!
//! let dir = Path::new("/path/to/project");
//! let detections = detect(dir);
//! println!("{}", render(OutputFormat::Table, &detections, dir).unwrap());
//! ```

mod compact;
mod json;
mod listing;
mod plain;
mod table;

pub use compact::format_compact;
pub use json::{format_json, JsonPath, JsonReport, JsonTool};
pub use listing::format_listing;
pub use plain::format_plain;
pub use table::format_table;

use crate::{Detection, OutputFormat, ScanError, ToolSignature};
use std::collections::BTreeMap;
use std::path::Path;

/// Message printed by the compact and table renderers for an empty scan.
pub const NONE_DETECTED: &str = "No AI coding tools detected";

/// Render `detections` in the requested format.
///
/// # Errors
///
/// Only [`OutputFormat::Json`] can fail, with [`ScanError::Serialization`].
pub fn render(
    format: OutputFormat,
    detections: &[Detection],
    directory: &Path,
) -> Result<String, ScanError> {
    match format {
        OutputFormat::Plain => Ok(format_plain(detections, directory)),
        OutputFormat::Json => format_json(detections, directory),
        OutputFormat::Compact => Ok(format_compact(detections)),
        OutputFormat::Table => Ok(format_table(detections, directory)),
    }
}

/// Group detections by tool for the plain and JSON renderers.
///
/// Groups are ordered by tool name (byte-wise); detections keep their scan
/// order inside a group.
pub(crate) fn group_by_tool(
    detections: &[Detection],
) -> Vec<(&'static ToolSignature, Vec<&Detection>)> {
    let mut groups: BTreeMap<&'static str, (&'static ToolSignature, Vec<&Detection>)> =
        BTreeMap::new();

    for d in detections {
        let sig = d.signature();
        groups.entry(sig.name).or_insert((sig, Vec::new())).1.push(d);
    }

    groups.into_values().collect()
}
