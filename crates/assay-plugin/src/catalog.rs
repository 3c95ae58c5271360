// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in implementation catalog.
//!
//! The catalog names the constructors compiled into the binary. Manifests
//! found in search locations bind against these names; the default
//! descriptor set registers each builtin under its own identity at version 1.

use std::collections::BTreeMap;
use std::sync::Arc;

use assay_core::{AssetPlugin, PluginConstructor, PluginOptions};

use crate::builtin::{FileStatPlugin, JsonRefsPlugin};
use crate::registry::PluginDescriptor;

/// Implementation name of the filesystem-facts builtin.
pub const FILE_STAT: &str = "file-stat";
/// Implementation name of the JSON reference extractor builtin.
pub const JSON_REFS: &str = "json-refs";

/// Returns the compiled-in constructor catalog keyed by implementation name.
pub fn builtin_implementations() -> BTreeMap<String, Arc<dyn PluginConstructor>> {
    let mut catalog: BTreeMap<String, Arc<dyn PluginConstructor>> = BTreeMap::new();
    catalog.insert(
        FILE_STAT.to_string(),
        Arc::new(|_: &PluginOptions| -> Box<dyn AssetPlugin> { Box::new(FileStatPlugin) }),
    );
    catalog.insert(
        JSON_REFS.to_string(),
        Arc::new(|options: &PluginOptions| -> Box<dyn AssetPlugin> {
            Box::new(JsonRefsPlugin::new(options))
        }),
    );
    catalog
}

/// Returns the default descriptor set, one per builtin at version 1.
pub fn builtin_descriptors() -> Vec<PluginDescriptor> {
    builtin_implementations()
        .into_iter()
        .map(|(name, constructor)| PluginDescriptor::new(name, 1, constructor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_both_builtins() {
        let catalog = builtin_implementations();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains_key(FILE_STAT));
        assert!(catalog.contains_key(JSON_REFS));
    }

    #[test]
    fn builtin_descriptors_start_at_version_one() {
        let descriptors = builtin_descriptors();
        assert_eq!(descriptors.len(), 2);
        for descriptor in &descriptors {
            assert_eq!(descriptor.version(), 1);
        }
        let identities: Vec<&str> = descriptors.iter().map(|d| d.identity()).collect();
        assert_eq!(identities, vec![FILE_STAT, JSON_REFS]);
    }
}
