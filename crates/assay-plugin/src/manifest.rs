// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `*.toml` files found in search locations.
//!
//! A manifest binds a plugin identity and version to a named implementation
//! from the constructor catalog. Manifests without an `identity` key are
//! treated as abstract or partial definitions and skipped without error,
//! since base definitions are expected to share the search space with
//! concrete ones.

use std::path::Path;

use assay_core::AssayError;
use serde::Deserialize;

/// Parsed plugin manifest describing one concrete plugin registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginManifest {
    /// Stable family name shared by all versions of this plugin.
    pub identity: String,
    /// Revision within the family; higher versions supersede lower ones.
    pub version: u32,
    /// Name of the constructor in the implementation catalog.
    pub implementation: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Optional author identifier.
    pub author: Option<String>,
}

/// Intermediate TOML deserialization struct for a manifest file.
#[derive(Debug, Deserialize)]
struct PluginManifestFile {
    plugin: PluginSection,
}

/// The `[plugin]` section of a manifest file.
#[derive(Debug, Deserialize)]
struct PluginSection {
    identity: Option<String>,
    #[serde(default = "default_version")]
    version: u32,
    implementation: Option<String>,
    description: Option<String>,
    author: Option<String>,
}

fn default_version() -> u32 {
    1
}

/// Parse a plugin manifest from TOML content.
///
/// Returns `Ok(None)` when the `[plugin]` section has no `identity` key (an
/// abstract definition, silently excluded from discovery). Malformed TOML, an
/// empty identity, a missing implementation, or version 0 are errors the
/// registry records as discovery diagnostics.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<Option<PluginManifest>, AssayError> {
    let file: PluginManifestFile = toml::from_str(toml_content)
        .map_err(|e| AssayError::Config(format!("invalid plugin manifest: {e}")))?;

    let section = file.plugin;

    let Some(identity) = section.identity else {
        return Ok(None);
    };

    if identity.is_empty() {
        return Err(AssayError::Config(
            "plugin manifest: identity must not be empty".to_string(),
        ));
    }

    if !identity
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AssayError::Config(format!(
            "plugin manifest: identity '{identity}' contains invalid characters \
             (only alphanumeric, hyphens, underscores allowed)"
        )));
    }

    if section.version == 0 {
        return Err(AssayError::Config(format!(
            "plugin manifest: version for '{identity}' must be at least 1"
        )));
    }

    let Some(implementation) = section.implementation else {
        return Err(AssayError::Config(format!(
            "plugin manifest: '{identity}' names no implementation"
        )));
    };

    if implementation.is_empty() {
        return Err(AssayError::Config(format!(
            "plugin manifest: implementation for '{identity}' must not be empty"
        )));
    }

    Ok(Some(PluginManifest {
        identity,
        version: section.version,
        implementation,
        description: section.description,
        author: section.author,
    }))
}

/// Loads and parses a plugin manifest from a file path.
pub fn load_plugin_manifest(path: &Path) -> Result<Option<PluginManifest>, AssayError> {
    let content = std::fs::read_to_string(path).map_err(|e| AssayError::Discovery {
        location: path.display().to_string(),
        message: format!("failed to read manifest: {e}"),
        source: Some(Box::new(e)),
    })?;
    parse_plugin_manifest(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let toml = r#"
[plugin]
identity = "json-refs"
version = 2
implementation = "json-refs"
description = "JSON reference extractor"
author = "Assay Contributors"
"#;
        let manifest = parse_plugin_manifest(toml).unwrap().unwrap();
        assert_eq!(manifest.identity, "json-refs");
        assert_eq!(manifest.version, 2);
        assert_eq!(manifest.implementation, "json-refs");
        assert_eq!(manifest.description.as_deref(), Some("JSON reference extractor"));
        assert_eq!(manifest.author.as_deref(), Some("Assay Contributors"));
    }

    #[test]
    fn parse_minimal_manifest_defaults_version_to_one() {
        let toml = r#"
[plugin]
identity = "file-stat"
implementation = "file-stat"
"#;
        let manifest = parse_plugin_manifest(toml).unwrap().unwrap();
        assert_eq!(manifest.version, 1);
        assert!(manifest.description.is_none());
        assert!(manifest.author.is_none());
    }

    #[test]
    fn missing_identity_is_skipped_not_an_error() {
        let toml = r#"
[plugin]
implementation = "json-refs"
description = "abstract base definition"
"#;
        assert_eq!(parse_plugin_manifest(toml).unwrap(), None);
    }

    #[test]
    fn empty_identity_is_malformed() {
        let toml = r#"
[plugin]
identity = ""
implementation = "json-refs"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("identity must not be empty"));
    }

    #[test]
    fn identity_with_invalid_characters_is_malformed() {
        let toml = r#"
[plugin]
identity = "bad identity!"
implementation = "json-refs"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("invalid characters"));
    }

    #[test]
    fn version_zero_is_malformed() {
        let toml = r#"
[plugin]
identity = "json-refs"
version = 0
implementation = "json-refs"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("at least 1"));
    }

    #[test]
    fn missing_implementation_is_malformed() {
        let toml = r#"
[plugin]
identity = "json-refs"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("names no implementation"));
    }

    #[test]
    fn invalid_toml_is_malformed() {
        let result = parse_plugin_manifest("not really toml [");
        assert!(result.is_err());
    }
}
