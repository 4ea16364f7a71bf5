use clap::Parser;
use std::process::ExitCode;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only rendered results.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return ExitCode::from(cli::report_parse_error(&e)),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(cli::run(&cli, &mut out))
}
