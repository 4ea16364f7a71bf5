//! Detection types representing scan results.

use crate::{ToolKind, ToolSignature};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// The kind of filesystem entry a candidate matched.
///
/// Serializes as its [`EntryKind::type_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular (non-directory) entry.
    File,
    /// A directory.
    Directory,
}

impl EntryKind {
    /// Four-character marker used by the grouped text and table layouts.
    ///
    /// ```rust
    /// use vibedetector::EntryKind;
    ///
    /// assert_eq!(EntryKind::File.marker(), "file");
    /// assert_eq!(EntryKind::Directory.marker(), "dir ");
    /// ```
    pub fn marker(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "dir ",
        }
    }

    /// Type tag used by the JSON document.
    ///
    /// This differs from [`EntryKind::marker`] for directories.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl Serialize for EntryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_tag())
    }
}

/// One confirmed hit for a tool's candidate under the scanned directory.
///
/// Holds the tool by kind, which resolves to its `'static` signature, so a
/// detection never owns registry data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The tool whose candidate matched.
    pub tool: ToolKind,

    /// Absolute path of the matched entry.
    pub path: PathBuf,

    /// Whether the entry is a file or a directory.
    pub kind: EntryKind,
}

impl Detection {
    /// The signature of the matched tool.
    pub fn signature(&self) -> &'static ToolSignature {
        self.tool.signature()
    }

    /// Name of the matched tool.
    pub fn tool_name(&self) -> &'static str {
        self.tool.display_name()
    }

    /// Whether the match is a directory.
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// The matched path relative to `directory`.
    ///
    /// Falls back to the absolute path when it does not live under
    /// `directory`.
    ///
    /// ```rust
    /// use std::path::{Path, PathBuf};
    /// use vibedetector::{Detection, EntryKind, ToolKind};
    ///
    /// let d = Detection {
    ///     tool: ToolKind::ClaudeCode,
    ///     path: PathBuf::from("/work/CLAUDE.md"),
    ///     kind: EntryKind::File,
    /// };
    /// assert_eq!(d.relative_to(Path::new("/work")), Path::new("CLAUDE.md"));
    /// assert_eq!(d.relative_to(Path::new("/elsewhere")), Path::new("/work/CLAUDE.md"));
    /// ```
    pub fn relative_to(&self, directory: &Path) -> &Path {
        match self.path.strip_prefix(directory) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => &self.path,
        }
    }
}
