//! Output format selection.
//!
//! This module provides the [`OutputFormat`] enum and the lenient parsing
//! the command line relies on: an unrecognized format name renders as
//! [`OutputFormat::Plain`] instead of failing.

use std::str::FromStr;

/// How a scan result is rendered.
///
/// # Example
///
/// ```rust
/// use vibedetector::OutputFormat;
///
/// assert_eq!(OutputFormat::parse_lenient("json"), OutputFormat::Json);
/// assert_eq!(OutputFormat::parse_lenient("yaml"), OutputFormat::Plain);
/// assert_eq!(OutputFormat::Table.to_string(), "table");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text grouped by tool.
    #[default]
    Plain,
    /// Pretty-printed JSON document.
    Json,
    /// Comma-separated tool names.
    Compact,
    /// Aligned table, one row per match.
    Table,
}

impl OutputFormat {
    /// Parse a format name, falling back to [`OutputFormat::Plain`].
    ///
    /// Matching is case-sensitive.
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_str(name).unwrap_or_default()
    }

    /// Pick the format from the short (`-f`) and long (`--format`) flag
    /// values. The long spelling wins whenever it differs from the default.
    ///
    /// ```rust
    /// use vibedetector::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_flags("json", "plain"), OutputFormat::Json);
    /// assert_eq!(OutputFormat::from_flags("json", "table"), OutputFormat::Table);
    /// ```
    pub fn from_flags(short: &str, long: &str) -> Self {
        if long != Self::default().as_ref() {
            Self::parse_lenient(long)
        } else {
            Self::parse_lenient(short)
        }
    }
}
