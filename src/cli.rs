//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use depwalk_core::{ConfigSources, PartialConfig};

/// depwalk - dependency graph walker
#[derive(Parser, Debug)]
#[command(name = "depwalk")]
#[command(version)]
#[command(about = "List a package's dependencies and compute an installation order")]
#[command(
    long_about = "depwalk reads a dependency graph (local file, HTTP URL or test repository), then lists direct dependencies, walks every reachable dependency depth-first, or prints a dependencies-first installation order."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (JSON, or TOML with a .toml extension). Defaults to ./config.json when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Package to analyse (overrides package_name)
    #[arg(short, long, global = true)]
    pub package: Option<String>,

    /// Graph location: file path or URL (overrides repo_url)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Source mode: local, remote or test (overrides repo_mode)
    #[arg(short, long, global = true)]
    pub mode: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Config layers described by these flags.
    #[must_use]
    pub fn config_sources(&self) -> ConfigSources {
        let sources = self
            .config
            .as_ref()
            .map_or_else(ConfigSources::default_file, ConfigSources::explicit);

        sources.with_overrides(PartialConfig {
            package_name: self.package.clone(),
            repo_url: self.source.clone(),
            repo_mode: self.mode.clone(),
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the package's direct dependencies
    Direct,

    /// Walk every reachable dependency depth-first (pre-order)
    Walk,

    /// Print an installation order, dependencies first
    Order {
        /// Fail on a dependency cycle instead of skipping the back edge
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// Show the resolved configuration
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable list
    #[default]
    Text,
    /// JSON envelope
    Json,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_order_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "depwalk", "order", "--strict", "--package", "A", "--format", "json",
        ])
        .unwrap();

        assert_eq!(cli.command, Commands::Order { strict: true });
        assert_eq!(cli.global.package.as_deref(), Some("A"));
        assert_eq!(cli.global.format, OutputFormat::Json);
    }

    #[test]
    fn defaults_to_text_and_optional_config_file() {
        let cli = Cli::try_parse_from(["depwalk", "walk"]).unwrap();
        let sources = cli.global.config_sources();

        assert_eq!(cli.global.format, OutputFormat::Text);
        assert!(!sources.file_required);
        assert_eq!(sources.overrides, PartialConfig::default());
    }

    #[test]
    fn explicit_config_file_is_required() {
        let cli = Cli::try_parse_from(["depwalk", "-c", "deps.toml", "direct"]).unwrap();
        let sources = cli.global.config_sources();

        assert!(sources.file_required);
        assert_eq!(sources.file, Some(PathBuf::from("deps.toml")));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["depwalk", "walk", "--format", "yaml"]).is_err());
    }
}
