// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./assay.toml` > `~/.config/assay/assay.toml` >
//! `/etc/assay/assay.toml` with environment variable overrides via the
//! `ASSAY_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AssayConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/assay/assay.toml` (system-wide)
/// 3. `~/.config/assay/assay.toml` (user XDG config)
/// 4. `./assay.toml` (local directory)
/// 5. `ASSAY_*` environment variables
pub fn load_config() -> Result<AssayConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AssayConfig::default()))
        .merge(Toml::file("/etc/assay/assay.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("assay/assay.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("assay.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AssayConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AssayConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AssayConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AssayConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `ASSAY_DISCOVERY_SEARCH_PATHS` must map to
/// `discovery.search_paths`, not `discovery.search.paths`.
fn env_provider() -> Env {
    Env::prefixed("ASSAY_").map(|key| {
        let mapped = key.as_str().replacen("discovery_", "discovery.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_str_picks_up_search_paths() {
        let toml = r#"
[discovery]
search_paths = ["/opt/assay/plugins", "plugins"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.discovery.search_paths.len(), 2);
        assert_eq!(
            config.discovery.search_paths[0],
            std::path::PathBuf::from("/opt/assay/plugins")
        );
    }

    #[test]
    fn load_from_str_empty_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert!(config.discovery.search_paths.is_empty());
    }

    #[test]
    fn load_from_str_rejects_unknown_section() {
        let toml = r#"
[discoverry]
search_paths = []
"#;
        assert!(load_config_from_str(toml).is_err());
    }
}
