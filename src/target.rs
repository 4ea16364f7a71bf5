//! Target directory resolution.

use crate::ScanError;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolve the directory to scan.
///
/// `None` means the current working directory. Relative paths are joined
/// onto the working directory, then `.` and `..` segments are removed
/// lexically (symlinks are not resolved). The result must exist and be a
/// directory.
///
/// # Errors
///
/// - [`ScanError::CurrentDir`] if a relative path needs the working
///   directory and it cannot be read
/// - [`ScanError::NotFound`] if the path cannot be stat'ed
/// - [`ScanError::NotADirectory`] if it exists but is not a directory
pub fn resolve_target(requested: Option<&Path>) -> Result<PathBuf, ScanError> {
    let requested = requested.unwrap_or_else(|| Path::new("."));
    let path = absolutize(requested)?;

    let metadata = std::fs::metadata(&path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "cannot stat target");
        ScanError::NotFound { path: path.clone() }
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory { path });
    }

    Ok(path)
}

fn absolutize(path: &Path) -> Result<PathBuf, ScanError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(ScanError::CurrentDir)?
            .join(path)
    };
    Ok(clean(&joined))
}

/// Lexically normalize an absolute path.
fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                }
            }
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean(Path::new("/a/b/")), PathBuf::from("/a/b"));
        assert_eq!(clean(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(clean(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_target(Some(dir.path())).unwrap();
        assert_eq!(resolved, clean(dir.path()));
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_resolve_dotted_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let dotted = dir.path().join("sub").join("..").join(".");

        let resolved = resolve_target(Some(&dotted)).unwrap();
        assert_eq!(resolved, clean(dir.path()));
    }

    #[test]
    fn test_resolve_default_is_current_dir() {
        let resolved = resolve_target(None).unwrap();
        assert_eq!(resolved, clean(&std::env::current_dir().unwrap()));
    }

    #[test]
    fn test_resolve_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = resolve_target(Some(&missing)).unwrap_err();
        assert!(matches!(err, ScanError::NotFound { ref path } if *path == missing));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_resolve_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("CLAUDE.md");
        std::fs::write(&file, "").unwrap();

        let err = resolve_target(Some(&file)).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory { .. }));
    }
}
