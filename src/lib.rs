//! # vibedetector
//!
//! Detect configuration files and directories left by AI coding assistants
//! (Claude Code, Cursor, Windsurf, GitHub Copilot, Aider, ...) in a project
//! directory.
//!
//! Detection is a fixed set of existence checks relative to one directory:
//! no recursion, no file contents are read, and nothing is cached.
//!
//! ## Features
//!
//! - `ToolKind` enum and `ToolSignature` registry of supported tools
//! - `detect()` for scanning a directory, producing `Detection`s
//! - `render()` with plain, JSON, compact and table output formats
//! - `resolve_target()` for turning a user-supplied path into a checked,
//!   absolute directory
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vibedetector::{detect, render, resolve_target, OutputFormat};
//!
//! fn main() -> Result<(), vibedetector::ScanError> {
//!     let dir = resolve_target(Some(Path::new(".")))?;
//!     let detections = detect(&dir);
//!
//!     for d in &detections {
//!         println!("{} -> {}", d.tool_name(), d.relative_to(&dir).display());
//!     }
//!
//!     println!("{}", render(OutputFormat::Compact, &detections, &dir)?);
//!     Ok(())
//! }
//! ```

mod detect;
mod detection;
mod error;
mod options;
pub mod present;
mod probe;
mod target;
mod tool_kind;

pub use detect::{detect, detect_tool};
pub use detection::{Detection, EntryKind};
pub use error::{ScanError, EXIT_ERROR};
pub use options::OutputFormat;
pub use present::{render, NONE_DETECTED};
pub use target::resolve_target;
pub use tool_kind::{registry, ToolKind, ToolSignature};
