// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in JSON reference extractor.
//!
//! Viable for `.json` locators. Dependencies come from a top-level array of
//! reference strings (key `"references"` unless overridden via the
//! `json-refs.references_key` option); metadata comes from the top-level
//! `"metadata"` object.

use assay_core::{AssayError, AssetPlugin, Locator, Metadata, PluginOptions};

/// Extracts references and metadata from JSON asset descriptions.
pub struct JsonRefsPlugin {
    references_key: String,
}

impl JsonRefsPlugin {
    /// Creates the plugin, honoring the `json-refs.references_key` option.
    pub fn new(options: &PluginOptions) -> Self {
        Self {
            references_key: options
                .get_str("json-refs.references_key")
                .unwrap_or("references")
                .to_string(),
        }
    }

    fn parse(&self, locator: &Locator) -> Result<serde_json::Value, AssayError> {
        let content =
            std::fs::read_to_string(locator.as_path()).map_err(|e| AssayError::Plugin {
                identity: "json-refs".to_string(),
                message: format!("failed to read '{locator}': {e}"),
                source: Some(Box::new(e)),
            })?;
        serde_json::from_str(&content).map_err(|e| AssayError::Plugin {
            identity: "json-refs".to_string(),
            message: format!("'{locator}' is not valid JSON: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

impl AssetPlugin for JsonRefsPlugin {
    fn viable(&self, locator: &Locator) -> Result<bool, AssayError> {
        Ok(locator
            .as_path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
    }

    fn dependencies(&self, locator: &Locator) -> Result<Vec<String>, AssayError> {
        let document = self.parse(locator)?;
        let references = document
            .get(&self.references_key)
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Ok(references)
    }

    fn metadata(&self, locator: &Locator) -> Result<Metadata, AssayError> {
        let document = self.parse(locator)?;
        let metadata = document
            .get("metadata")
            .and_then(|v| v.as_object())
            .map(|object| {
                object
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(metadata)
    }
}
