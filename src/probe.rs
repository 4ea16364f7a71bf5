//! Single-candidate existence check.

use crate::EntryKind;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Check whether `candidate` exists under `directory` as the expected kind.
///
/// The candidate is joined onto `directory`, so multi-segment names such as
/// `.github/copilot-instructions.md` are supported. Symlinks are followed.
///
/// # Returns
///
/// `Some(PathBuf)` with the joined path if the entry exists and its kind
/// matches `expected`, `None` otherwise. Any error from the filesystem
/// (permission denied, dangling symlink, ...) counts as absent.
pub(crate) fn probe(directory: &Path, candidate: &str, expected: EntryKind) -> Option<PathBuf> {
    let path = directory.join(candidate);

    let metadata = match std::fs::metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "probe failed, treating as absent");
            return None;
        }
    };

    let found = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    if found == expected {
        Some(path)
    } else {
        trace!(path = %path.display(), ?found, ?expected, "entry kind mismatch");
        None
    }
}
