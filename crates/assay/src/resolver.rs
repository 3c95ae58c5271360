// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resolution facade.
//!
//! [`Assay`] answers "what do we know about this locator?" by walking the
//! registry's active descriptors in identity order, driving one plugin
//! instance per family, and aggregating the results. Queries are
//! best-effort: misbehaving plugins contribute diagnostics, not failures.

use assay_config::DiscoveryConfig;
use assay_core::{Locator, PluginOptions, Report};
use assay_plugin::{PluginRegistry, builtin_descriptors, builtin_implementations};
use tracing::debug;

use crate::instance::PluginInstance;

/// User-facing entry point over one immutable plugin registry.
pub struct Assay {
    registry: PluginRegistry,
}

impl Assay {
    /// Wraps an already-built registry.
    pub fn new(registry: PluginRegistry) -> Self {
        Self { registry }
    }

    /// Builds a registry from the builtin plugin set plus the configured
    /// search locations, then wraps it.
    pub fn with_defaults(config: &DiscoveryConfig) -> Self {
        let mut builder = PluginRegistry::builder();
        for (name, constructor) in builtin_implementations() {
            builder = builder.implementation(name, constructor);
        }
        for descriptor in builtin_descriptors() {
            builder = builder.register(descriptor);
        }
        builder = builder.search_paths(config.search_paths.iter().cloned());
        Self::new(builder.build())
    }

    /// The registry this facade resolves against.
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Runs one introspection query.
    ///
    /// For each identity the active (max-version) descriptor is the sole
    /// candidate: versioning exists so a plugin family can be improved in
    /// place without callers tracking revisions. Dependencies are
    /// concatenated in identity order with duplicates preserved (dedup is a
    /// caller concern); metadata key collisions resolve last-plugin-wins.
    /// Diagnostics cover every instantiated plugin, viable or not. No plugin
    /// is re-invoked within a query and nothing is cached across queries.
    pub fn introspect(&self, locator: &Locator, options: &PluginOptions) -> Report {
        let mut report = Report::default();

        for descriptor in self.registry.active_descriptors() {
            let mut instance = PluginInstance::new(descriptor, options);

            if instance.check_viability(locator) {
                let result = instance.extract(locator);
                report.dependencies.extend(result.dependencies);
                for (key, value) in result.metadata {
                    report.metadata.insert(key, value);
                }
            }

            report.diagnostics.merge(instance.into_diagnostics());
        }

        debug!(
            %locator,
            dependencies = report.dependencies.len(),
            metadata_keys = report.metadata.len(),
            "introspection complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assay_core::{AssayError, AssetPlugin, Metadata};
    use assay_plugin::PluginDescriptor;

    use super::*;

    struct ScriptedPlugin {
        viable: bool,
        dependencies: Vec<String>,
        metadata: Vec<(String, serde_json::Value)>,
    }

    impl AssetPlugin for ScriptedPlugin {
        fn viable(&self, _locator: &Locator) -> Result<bool, AssayError> {
            Ok(self.viable)
        }

        fn dependencies(&self, _locator: &Locator) -> Result<Vec<String>, AssayError> {
            Ok(self.dependencies.clone())
        }

        fn metadata(&self, _locator: &Locator) -> Result<Metadata, AssayError> {
            Ok(self.metadata.iter().cloned().collect())
        }
    }

    fn scripted(
        identity: &str,
        version: u32,
        viable: bool,
        dependencies: &[&str],
        metadata: &[(&str, serde_json::Value)],
    ) -> PluginDescriptor {
        let dependencies: Vec<String> = dependencies.iter().map(|s| s.to_string()).collect();
        let metadata: Vec<(String, serde_json::Value)> = metadata
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        PluginDescriptor::new(
            identity,
            version,
            Arc::new(move |_: &PluginOptions| -> Box<dyn AssetPlugin> {
                Box::new(ScriptedPlugin {
                    viable,
                    dependencies: dependencies.clone(),
                    metadata: metadata.clone(),
                })
            }),
        )
    }

    #[test]
    fn max_version_supersedes_and_lower_is_never_invoked() {
        let registry = PluginRegistry::builder()
            .register(scripted("PluginA", 1, true, &["x.txt"], &[]))
            .register(scripted("PluginA", 2, true, &["y.txt"], &[]))
            .build();
        let assay = Assay::new(registry);

        let report = assay.introspect(&Locator::from("anything.bin"), &PluginOptions::new());
        assert_eq!(report.dependencies, vec!["y.txt"]);
    }

    #[test]
    fn non_viable_plugin_contributes_nothing_but_a_viability_entry() {
        let registry = PluginRegistry::builder()
            .register(scripted("PluginB", 1, false, &["never.txt"], &[]))
            .register(scripted(
                "PluginC",
                1,
                true,
                &[],
                &[("type", serde_json::json!("image"))],
            ))
            .build();
        let assay = Assay::new(registry);

        let report = assay.introspect(&Locator::from("a.png"), &PluginOptions::new());
        assert!(report.dependencies.is_empty());
        assert_eq!(report.metadata["type"], serde_json::json!("image"));

        assert_eq!(report.diagnostics.viability.len(), 1);
        assert_eq!(report.diagnostics.viability[0].identity, "PluginB");
        assert!(report.diagnostics.execution.is_empty());
    }

    #[test]
    fn dependencies_concatenate_in_identity_order_with_duplicates() {
        let registry = PluginRegistry::builder()
            .register(scripted("zeta", 1, true, &["shared.png", "z.obj"], &[]))
            .register(scripted("alpha", 1, true, &["shared.png", "a.obj"], &[]))
            .build();
        let assay = Assay::new(registry);

        let report = assay.introspect(&Locator::from("scene.json"), &PluginOptions::new());
        assert_eq!(
            report.dependencies,
            vec!["shared.png", "a.obj", "shared.png", "z.obj"]
        );
    }

    #[test]
    fn metadata_collisions_resolve_last_plugin_wins() {
        let registry = PluginRegistry::builder()
            .register(scripted(
                "alpha",
                1,
                true,
                &[],
                &[("format", serde_json::json!("early")), ("alpha_only", serde_json::json!(1))],
            ))
            .register(scripted(
                "beta",
                1,
                true,
                &[],
                &[("format", serde_json::json!("late"))],
            ))
            .build();
        let assay = Assay::new(registry);

        let report = assay.introspect(&Locator::from("x"), &PluginOptions::new());
        assert_eq!(report.metadata["format"], serde_json::json!("late"));
        assert_eq!(report.metadata["alpha_only"], serde_json::json!(1));
    }

    #[test]
    fn empty_registry_yields_empty_report() {
        let assay = Assay::new(PluginRegistry::builder().build());
        let report = assay.introspect(&Locator::from("anything"), &PluginOptions::new());

        assert!(report.dependencies.is_empty());
        assert!(report.metadata.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn with_defaults_registers_builtin_plugins() {
        let assay = Assay::with_defaults(&DiscoveryConfig::default());
        let identities: Vec<&str> = assay.registry().identities().collect();
        assert_eq!(identities, vec!["file-stat", "json-refs"]);
        assert!(assay.registry().diagnostics().is_empty());
    }
}
