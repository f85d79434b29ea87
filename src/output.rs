//! Traversal reports and their text rendering.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::collections::BTreeMap;

use depwalk_core::Config;
use depwalk_graph::PackageName;
use itertools::Itertools;
use serde::Serialize;

/// Which listing a report holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalMode {
    Direct,
    DepthFirst,
    InstallOrder,
}

/// Result of one traversal, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    pub package: PackageName,
    pub mode: TraversalMode,
    pub count: usize,
    pub packages: Vec<PackageName>,
    /// Declared version per listed package, when the source pinned one.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub versions: BTreeMap<PackageName, String>,
}

impl TraversalReport {
    #[must_use]
    pub fn new(
        package: impl Into<PackageName>,
        mode: TraversalMode,
        packages: Vec<PackageName>,
    ) -> Self {
        Self {
            package: package.into(),
            mode,
            count: packages.len(),
            packages,
            versions: BTreeMap::new(),
        }
    }

    /// Attach the versions of listed packages; unlisted entries are ignored.
    #[must_use]
    pub fn with_versions(mut self, versions: &BTreeMap<PackageName, String>) -> Self {
        self.versions = self
            .packages
            .iter()
            .filter_map(|name| versions.get_key_value(name))
            .map(|(name, version)| (name.clone(), version.clone()))
            .collect();
        self
    }

    /// Heading line followed by one `- name` (or `- name: version`) line
    /// per package.
    #[must_use]
    pub fn to_text(&self) -> String {
        if self.mode == TraversalMode::Direct && self.packages.is_empty() {
            return format!("{} has no direct dependencies.", self.package);
        }

        let heading = match self.mode {
            TraversalMode::Direct => format!("Direct dependencies of {}:", self.package),
            TraversalMode::DepthFirst => format!("Dependencies of {} (depth-first):", self.package),
            TraversalMode::InstallOrder => format!("Installation order for {}:", self.package),
        };

        std::iter::once(heading)
            .chain(self.packages.iter().map(|name| match self.versions.get(name) {
                Some(version) => format!("- {name}: {version}"),
                None => format!("- {name}"),
            }))
            .join("\n")
    }
}

/// Resolved configuration as `key: value` lines.
#[must_use]
pub fn config_text(config: &Config) -> String {
    [
        ("package_name", config.package_name.as_str()),
        ("repo_url", config.repo_url.as_str()),
        ("repo_mode", config.repo_mode.as_str()),
    ]
    .iter()
    .map(|(key, value)| format!("{key}: {value}"))
    .join("\n")
}
