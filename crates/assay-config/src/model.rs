// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at load time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Assay configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssayConfig {
    /// Plugin discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Where the registry searches for plugin manifests.
///
/// Passed explicitly to the registry builder; there is no ambient
/// process-wide search path state.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Ordered list of directories scanned for plugin manifests.
    /// Empty by default.
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_search_paths() {
        let config = AssayConfig::default();
        assert!(config.discovery.search_paths.is_empty());
    }
}
