//! Tool detection functions.

use crate::probe::probe;
use crate::{Detection, EntryKind, ToolKind};
use std::path::Path;
use tracing::debug;

/// Detect every known tool's configuration under `directory`.
///
/// Only first-level candidates relative to `directory` are checked; there
/// is no recursion and no directory listing. The caller is expected to
/// have validated that `directory` exists and is a directory (see
/// [`resolve_target`](crate::resolve_target)).
///
/// # Detection Process
///
/// For every tool in registry order:
///
/// 1. Each candidate file name that exists as a non-directory yields a
///    [`Detection`] with [`EntryKind::File`]
/// 2. Each candidate directory name that exists as a directory yields a
///    [`Detection`] with [`EntryKind::Directory`]
///
/// A candidate that cannot be checked (permission denied, broken symlink)
/// is treated as absent and the scan continues.
///
/// # Returns
///
/// Detections in registry order, then candidate order, files before
/// directories. Repeated calls on an unchanged filesystem return the same
/// list; nothing is cached between calls.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use vibedetector::detect;
///
/// for d in detect(Path::new("/path/to/project")) {
///     println!("{}: {}", d.tool_name(), d.path.display());
/// }
/// ```
pub fn detect(directory: &Path) -> Vec<Detection> {
    debug!(directory = %directory.display(), "scanning for tool configurations");

    let mut detections = Vec::new();
    for tool in ToolKind::all() {
        detections.extend(detect_tool(tool, directory));
    }

    debug!(count = detections.len(), "scan complete");
    detections
}

/// Detect a single tool's candidates under `directory`.
///
/// Returns zero, one or several detections, in candidate order with files
/// before directories.
///
/// ```rust,no_run
/// use std::path::Path;
/// use vibedetector::{detect_tool, ToolKind};
///
/// let hits = detect_tool(ToolKind::Cursor, Path::new("."));
/// println!("Cursor: {} match(es)", hits.len());
/// ```
pub fn detect_tool(tool: ToolKind, directory: &Path) -> Vec<Detection> {
    let sig = tool.signature();

    let files = sig
        .file_names
        .iter()
        .map(|name| (*name, EntryKind::File));
    let dirs = sig
        .dir_names
        .iter()
        .map(|name| (*name, EntryKind::Directory));

    files
        .chain(dirs)
        .filter_map(|(candidate, kind)| {
            probe(directory, candidate, kind).map(|path| Detection { tool, path, kind })
        })
        .collect()
}
