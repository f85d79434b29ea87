//! Graph source loading.
//!
//! Reads the graph document named by the configuration, from disk for the
//! `local` and `test` modes or over HTTP for `remote`, and parses it. Any
//! failure is returned immediately: no retries and no partial graph.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::Path;
use std::time::Duration;

use depwalk_core::config::is_fixture_name;
use depwalk_core::{Config, Error, RepoMode, Result};
use depwalk_graph::{GraphDocument, read_document};
use tracing::{debug, info};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch and parse the dependency graph for `config`.
///
/// # Errors
///
/// Returns error if:
/// - The graph file cannot be read, or the remote fetch fails
/// - The server answers with a non-2xx status
/// - The document is malformed or contains empty names
/// - In `test` mode, a package name is not uppercase Latin letters
pub async fn load_graph(config: &Config) -> Result<GraphDocument> {
    let text = fetch_document(config).await?;
    let document = read_document(&config.package_name, &text)?;
    let graph = &document.graph;

    if config.repo_mode == RepoMode::Test {
        if let Some(name) = graph.find_package_name(is_fixture_name) {
            return Err(Error::invalid_fixture(name));
        }
    }

    info!(
        source = %config.repo_url,
        mode = %config.repo_mode,
        packages = graph.package_count(),
        edges = graph.edge_count(),
        versions = document.versions.len(),
        "dependency graph loaded"
    );
    Ok(document)
}

/// Raw graph document text for `config`.
///
/// # Errors
///
/// See [`load_graph`].
pub async fn fetch_document(config: &Config) -> Result<String> {
    match config.repo_mode {
        RepoMode::Local | RepoMode::Test => read_local(Path::new(&config.repo_url)).await,
        RepoMode::Remote => fetch_remote(&config.repo_url).await,
    }
}

async fn read_local(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading graph file");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::source_read_failed(path, e.to_string()))
}

async fn fetch_remote(url: &str) -> Result<String> {
    debug!(url, "fetching graph document");

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::fetch_failed(url, e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::fetch_failed(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::unexpected_status(url, status.to_string()));
    }

    response
        .text()
        .await
        .map_err(|e| Error::fetch_failed(url, e.to_string()))
}
