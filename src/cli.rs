//! Command-line surface: argument parsing, mode selection, exit codes.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use vibedetector::present::format_listing;
use vibedetector::{detect, render, resolve_target, OutputFormat, ScanError};

/// At least one tool was detected (also used by version, list and help).
pub const EXIT_DETECTED: u8 = 0;
/// Nothing was detected.
pub const EXIT_NONE: u8 = 1;

const USAGE: &str = r#"vibedetector - Detect AI coding assistant configuration files

Usage: vibedetector [options] [directory]

Detects configuration files for various "vibe coding" tools including:
Claude Code, Cursor, Windsurf, GitHub Copilot, Aider, Cline, Zed,
Continue.dev, Kiro, Gemini CLI, and more.

Options:
  -f, --format string   Output format: plain, json, compact, table (default "plain")
  -l, --list            List all supported tools and their configuration files
  -q, --quiet           Quiet mode - only return exit code (0 if detected, 1 if not)
  -v, --version         Show version

Arguments:
  directory             Directory to scan (default: current directory)

Examples:
  vibedetector                    # Scan current directory
  vibedetector /path/to/project   # Scan specific directory
  vibedetector -f json            # Output as JSON
  vibedetector -f compact         # Just list tool names
  vibedetector -l                 # List all supported tools
  vibedetector -q && echo "Found" # Use in scripts

"#;

/// Detect AI coding assistant configuration files.
#[derive(Debug, Parser)]
#[command(
    name = "vibedetector",
    disable_version_flag = true,
    args_override_self = true,
    override_usage = "vibedetector [options] [directory]",
    override_help = USAGE
)]
pub struct Cli {
    /// Output format: plain, json, compact, table
    #[arg(short = 'f', value_name = "FORMAT", default_value = "plain")]
    pub format_short: String,

    /// Output format: plain, json, compact, table
    #[arg(long = "format", value_name = "FORMAT", default_value = "plain")]
    pub format_long: String,

    /// List all supported tools
    #[arg(short, long)]
    pub list: bool,

    /// Only return the exit code
    #[arg(short, long)]
    pub quiet: bool,

    /// Show version
    #[arg(short, long)]
    pub version: bool,

    /// Directory to scan (default: current directory). An empty value
    /// also means the current directory.
    pub directory: Option<OsString>,
}

impl Cli {
    /// The selected output format. `--format` wins over `-f` when it is
    /// not the default.
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_flags(&self.format_short, &self.format_long)
    }
}

/// Report a parse failure on stderr and return the exit code.
///
/// Help goes to stderr as well and exits successfully. Any other failure
/// prints clap's diagnostic followed by the full usage text.
pub fn report_parse_error(err: &clap::Error) -> u8 {
    let (text, code) = parse_error_text(err);
    eprint!("{}", text);
    code
}

fn parse_error_text(err: &clap::Error) -> (String, u8) {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            (err.render().to_string(), EXIT_DETECTED)
        }
        _ => (
            format!("{}\n{}", err.render(), USAGE),
            vibedetector::EXIT_ERROR,
        ),
    }
}

/// Run the parsed command, writing results to `out`.
///
/// Errors are reported on stderr as `Error: <message>`.
pub fn run(cli: &Cli, out: &mut impl Write) -> u8 {
    match execute(cli, out) {
        Ok(code) => code,
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn execute(cli: &Cli, out: &mut impl Write) -> Result<u8, ScanError> {
    if cli.version {
        writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        return Ok(EXIT_DETECTED);
    }

    if cli.list {
        write!(out, "{}", format_listing())?;
        return Ok(EXIT_DETECTED);
    }

    let directory = resolve_target(cli.directory.as_deref().map(Path::new))?;
    let detections = detect(&directory);
    let code = if detections.is_empty() {
        EXIT_NONE
    } else {
        EXIT_DETECTED
    };

    if cli.quiet {
        debug!(count = detections.len(), "quiet mode, skipping output");
        return Ok(code);
    }

    let format = cli.format();
    debug!(%format, "rendering");
    writeln!(out, "{}", render(format, &detections, &directory)?)?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vibedetector").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(args: &[&str]) -> (u8, String) {
        let cli = parse(args);
        let mut buf = Vec::new();
        let code = run(&cli, &mut buf);
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.format(), OutputFormat::Plain);
        assert!(!cli.list && !cli.quiet && !cli.version);
        assert!(cli.directory.is_none());
    }

    #[test]
    fn test_short_and_long_spellings() {
        let cli = parse(&["-f", "json", "-l", "-q", "-v", "/tmp"]);
        assert_eq!(cli.format(), OutputFormat::Json);
        assert!(cli.list && cli.quiet && cli.version);
        assert_eq!(cli.directory, Some(OsString::from("/tmp")));

        let cli = parse(&["--format", "table", "--list", "--quiet", "--version"]);
        assert_eq!(cli.format(), OutputFormat::Table);
        assert!(cli.list && cli.quiet && cli.version);
    }

    #[test]
    fn test_long_format_wins() {
        assert_eq!(parse(&["-f", "json", "--format", "compact"]).format(), OutputFormat::Compact);
        assert_eq!(parse(&["--format", "compact", "-f", "json"]).format(), OutputFormat::Compact);
        assert_eq!(parse(&["-f", "json", "--format", "plain"]).format(), OutputFormat::Json);
    }

    #[test]
    fn test_repeated_flags_allowed() {
        let cli = parse(&["-q", "--quiet", "-f", "json", "-f", "table"]);
        assert!(cli.quiet);
        assert_eq!(cli.format(), OutputFormat::Table);
    }

    #[test]
    fn test_unknown_format_is_plain() {
        assert_eq!(parse(&["-f", "yaml"]).format(), OutputFormat::Plain);
    }

    #[test]
    fn test_unknown_flag_is_error() {
        let err = Cli::try_parse_from(["vibedetector", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(report_parse_error(&err), 2);
    }

    #[test]
    fn test_parse_error_text_includes_usage() {
        let err = Cli::try_parse_from(["vibedetector", "--nope"]).unwrap_err();
        let (text, code) = parse_error_text(&err);
        assert_eq!(code, 2);
        assert!(text.contains("--nope"));
        assert!(text.contains("Options:\n  -f, --format"));
        assert!(text.ends_with("# Use in scripts\n\n"));
    }

    #[test]
    fn test_empty_directory_argument_is_current_dir() {
        let cli = parse(&[""]);
        assert_eq!(cli.directory, Some(OsString::new()));

        let mut buf = Vec::new();
        let code = run(&cli, &mut buf);
        assert_ne!(code, 2);
    }

    #[test]
    fn test_help_exits_zero() {
        let err = Cli::try_parse_from(["vibedetector", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.render().to_string().contains("Usage: vibedetector [options] [directory]"));
        assert_eq!(report_parse_error(&err), 0);
    }

    #[test]
    fn test_version() {
        let (code, out) = run_to_string(&["-v"]);
        assert_eq!(code, EXIT_DETECTED);
        assert_eq!(out, "vibedetector 1.0.0\n");
    }

    #[test]
    fn test_version_beats_list() {
        let (_, out) = run_to_string(&["--list", "--version"]);
        assert_eq!(out, "vibedetector 1.0.0\n");
    }

    #[test]
    fn test_list_ignores_format_and_quiet() {
        let (code, out) = run_to_string(&["-l", "-q", "-f", "json"]);
        assert_eq!(code, EXIT_DETECTED);
        assert!(out.starts_with("Supported AI coding tools:"));
    }

    #[test]
    fn test_scan_detected_and_not() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();

        let (code, out) = run_to_string(&["-f", "compact", path]);
        assert_eq!(code, EXIT_NONE);
        assert_eq!(out, "No AI coding tools detected\n");

        fs::write(dir.path().join("CLAUDE.md"), "").unwrap();
        let (code, out) = run_to_string(&["-f", "compact", path]);
        assert_eq!(code, EXIT_DETECTED);
        assert_eq!(out, "Claude Code\n");
    }

    #[test]
    fn test_quiet_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();

        let (code, out) = run_to_string(&["-q", "-f", "json", path]);
        assert_eq!(code, EXIT_NONE);
        assert!(out.is_empty());

        fs::create_dir(dir.path().join(".cursor")).unwrap();
        let (code, out) = run_to_string(&["--quiet", path]);
        assert_eq!(code, EXIT_DETECTED);
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let (code, out) = run_to_string(&[missing.to_str().unwrap()]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("CLAUDE.md");
        fs::write(&file, "").unwrap();

        let (code, _) = run_to_string(&["-q", file.to_str().unwrap()]);
        assert_eq!(code, 2);
    }
}
