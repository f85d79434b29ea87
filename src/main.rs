//! # depwalk - command-line entry point
//!
//! Parses arguments, sets up logging on stderr, runs one command and maps
//! failures to semantic exit codes (2 configuration, 3 source, 4 graph).

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

use clap::Parser;
use depwalk::cli::{Cli, OutputFormat};
use depwalk::commands::{execute, exit_code, render_error};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match execute(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            let rendered = render_error(&err, cli.global.format);
            match cli.global.format {
                OutputFormat::Json => println!("{rendered}"),
                OutputFormat::Text => eprintln!("{rendered}"),
            }
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Initialize tracing subscriber with environment filter.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
/// Logs always go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
