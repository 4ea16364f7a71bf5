//! JSON document for scripts.
//!
//! The field names and nesting are a compatibility surface:
//!
//! ```json
//! {
//!   "directory": "/abs/path",
//!   "detected": true,
//!   "tools": [
//!     {
//!       "name": "Cursor",
//!       "description": "AI-powered code editor",
//!       "url": "https://cursor.com",
//!       "paths": [
//!         { "path": ".cursorrules", "type": "file" },
//!         { "path": ".cursor", "type": "directory" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Directories are tagged `"directory"` here, unlike the `dir ` marker of
//! the text renderers.

use super::group_by_tool;
use crate::{Detection, EntryKind, ScanError};
use serde::Serialize;
use std::path::Path;

/// Top-level JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Absolute path of the scanned directory.
    pub directory: String,
    /// Whether anything was detected.
    pub detected: bool,
    /// Detected tools, sorted by name.
    pub tools: Vec<JsonTool>,
}

/// One detected tool.
#[derive(Debug, Clone, Serialize)]
pub struct JsonTool {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    /// Matches in scan order.
    pub paths: Vec<JsonPath>,
}

/// One matched path.
#[derive(Debug, Clone, Serialize)]
pub struct JsonPath {
    /// Path relative to the scanned directory.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl JsonReport {
    /// Build the document from a scan.
    pub fn new(detections: &[Detection], directory: &Path) -> Self {
        let tools = group_by_tool(detections)
            .into_iter()
            .map(|(sig, hits)| JsonTool {
                name: sig.name,
                description: sig.description,
                url: sig.url,
                paths: hits
                    .into_iter()
                    .map(|d| JsonPath {
                        path: d.relative_to(directory).to_string_lossy().into_owned(),
                        kind: d.kind,
                    })
                    .collect(),
            })
            .collect();

        Self {
            directory: directory.to_string_lossy().into_owned(),
            detected: !detections.is_empty(),
            tools,
        }
    }
}

/// Render detections as pretty-printed JSON with two-space indentation.
///
/// An empty scan still renders a full document with `"detected": false`
/// and an empty `tools` array.
pub fn format_json(detections: &[Detection], directory: &Path) -> Result<String, ScanError> {
    let report = JsonReport::new(detections, directory);
    Ok(serde_json::to_string_pretty(&report)?)
}
