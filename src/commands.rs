//! CLI command handlers.
//!
//! Each handler resolves the configuration, loads the graph once and
//! renders a single report. Errors carry a typed `depwalk_core::Error`
//! underneath any added context so the exit code survives.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use anyhow::{Context, Result};
use depwalk_core::config::load_config_with_env;
use depwalk_core::{Config, Error};
use depwalk_graph::{
    CyclePolicy, GraphDocument, depth_first, direct_dependencies, topological_order_with,
};
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::json::{JsonError, JsonSuccess};
use crate::output::{TraversalMode, TraversalReport, config_text};
use crate::source::load_graph;

/// Execute a CLI command and return the rendered output.
///
/// # Errors
///
/// Returns error if configuration, loading the graph or a strict
/// traversal fails.
pub async fn execute(cli: &Cli) -> Result<String> {
    execute_with_env(cli, |key| std::env::var(key).ok()).await
}

/// Same as [`execute`] with an injectable environment lookup for the
/// `DEPWALK_*` configuration layer.
///
/// # Errors
///
/// See [`execute`].
pub async fn execute_with_env<F>(cli: &Cli, env: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config_with_env(&cli.global.config_sources(), env)
        .context("loading configuration")?;
    debug!(?config, command = ?cli.command, "configuration resolved");

    if cli.command == Commands::Config {
        return render_config(&config, cli.global.format);
    }

    let document = load_graph(&config)
        .await
        .with_context(|| format!("loading dependency graph from '{}'", config.repo_url))?;

    let report = run_traversal(&document, &config.package_name, &cli.command)?;
    render_report(&report, cli.global.format)
}

/// Run the traversal named by `command` over an already-loaded document.
/// Versions declared by the document are attached to the listed packages.
///
/// # Errors
///
/// Returns a cycle error only for `order --strict`.
pub fn run_traversal(
    document: &GraphDocument,
    package: &str,
    command: &Commands,
) -> Result<TraversalReport> {
    let graph = &document.graph;
    let report = match command {
        Commands::Direct => TraversalReport::new(
            package,
            TraversalMode::Direct,
            direct_dependencies(graph, package),
        ),
        Commands::Walk => {
            TraversalReport::new(package, TraversalMode::DepthFirst, depth_first(graph, package))
        }
        Commands::Order { strict } => {
            let policy = if *strict {
                CyclePolicy::Strict
            } else {
                CyclePolicy::Lenient
            };
            let order = topological_order_with(graph, package, policy).map_err(Error::from)?;
            TraversalReport::new(package, TraversalMode::InstallOrder, order)
        }
        Commands::Config => {
            return Err(anyhow::anyhow!("'config' does not run a traversal"));
        }
    };

    debug!(mode = ?report.mode, count = report.count, "traversal finished");
    Ok(report.with_versions(&document.versions))
}

/// Render a traversal report in the requested format.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render_report(report: &TraversalReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => JsonSuccess::new(report)
            .to_json()
            .context("serializing report"),
    }
}

fn render_config(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(config_text(config)),
        OutputFormat::Json => JsonSuccess::new(config)
            .to_json()
            .context("serializing configuration"),
    }
}

/// Render a failure in the requested format.
#[must_use]
pub fn render_error(err: &anyhow::Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {err:#}"),
        OutputFormat::Json => JsonError::from_error(err)
            .to_json()
            .unwrap_or_else(|_| format!("Error: {err:#}")),
    }
}

/// Process exit code for a failure: the typed class when known, else 1.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}
