// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry: discovery, indexing, and version arbitration.
//!
//! [`RegistryBuilder`] collects explicit registrations, an implementation
//! catalog, and an ordered list of search locations, then builds the
//! immutable [`PluginRegistry`]. The index maps identity to the full set of
//! known versions; the max version per identity is the *active* descriptor
//! a query resolves against. Rebuilding requires a new builder, there is no
//! in-place mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use assay_core::{AssetPlugin, Diagnostic, PluginConstructor, PluginOptions};
use tracing::{debug, warn};

use crate::manifest::parse_plugin_manifest;

/// One registered plugin: identity, version, and the constructor that
/// produces instances for a query.
#[derive(Clone)]
pub struct PluginDescriptor {
    identity: String,
    version: u32,
    constructor: Arc<dyn PluginConstructor>,
}

impl PluginDescriptor {
    /// Creates a descriptor. Version 1 is the conventional starting revision.
    pub fn new(
        identity: impl Into<String>,
        version: u32,
        constructor: Arc<dyn PluginConstructor>,
    ) -> Self {
        Self {
            identity: identity.into(),
            version,
            constructor,
        }
    }

    /// Stable family name shared across versions.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Revision used solely for arbitration between same-named plugins.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Constructs a fresh plugin instance for one query.
    pub fn construct(&self, options: &PluginOptions) -> Box<dyn AssetPlugin> {
        self.constructor.construct(options)
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("identity", &self.identity)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// Builder collecting registrations and search locations for one registry.
#[derive(Default)]
pub struct RegistryBuilder {
    registered: Vec<PluginDescriptor>,
    implementations: BTreeMap<String, Arc<dyn PluginConstructor>>,
    search_paths: Vec<PathBuf>,
}

impl RegistryBuilder {
    /// Starts with no registrations and an empty implementation catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a compiled-in descriptor directly.
    pub fn register(mut self, descriptor: PluginDescriptor) -> Self {
        self.registered.push(descriptor);
        self
    }

    /// Adds a named constructor that manifests may bind against.
    pub fn implementation(
        mut self,
        name: impl Into<String>,
        constructor: Arc<dyn PluginConstructor>,
    ) -> Self {
        self.implementations.insert(name.into(), constructor);
        self
    }

    /// Appends one manifest search location.
    pub fn search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Appends several manifest search locations, preserving order.
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Builds the immutable registry.
    ///
    /// Explicit registrations apply first in call order, then each search
    /// location in order with manifest files taken in sorted filename order.
    /// When two registrations share identity and version, the later one
    /// replaces the earlier (documented last-write-wins, not an error). A
    /// missing or unreadable location is skipped with a discovery
    /// diagnostic; discovery never aborts because of one bad location.
    pub fn build(self) -> PluginRegistry {
        let mut index: BTreeMap<String, BTreeMap<u32, PluginDescriptor>> = BTreeMap::new();
        let mut diagnostics = Vec::new();

        for descriptor in self.registered {
            insert_descriptor(&mut index, descriptor);
        }

        for location in &self.search_paths {
            scan_location(location, &self.implementations, &mut index, &mut diagnostics);
        }

        PluginRegistry { index, diagnostics }
    }
}

/// Inserts a descriptor under (identity, version), replacing any earlier
/// registration of the same pair.
fn insert_descriptor(
    index: &mut BTreeMap<String, BTreeMap<u32, PluginDescriptor>>,
    descriptor: PluginDescriptor,
) {
    let versions = index.entry(descriptor.identity.clone()).or_default();
    if let Some(previous) = versions.insert(descriptor.version, descriptor) {
        debug!(
            identity = previous.identity(),
            version = previous.version(),
            "replaced earlier registration (last-write-wins)"
        );
    }
}

/// Scans one search location for `*.toml` manifests.
fn scan_location(
    location: &Path,
    implementations: &BTreeMap<String, Arc<dyn PluginConstructor>>,
    index: &mut BTreeMap<String, BTreeMap<u32, PluginDescriptor>>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let entries = match std::fs::read_dir(location) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(location = %location.display(), error = %e, "skipping search location");
            diagnostics.push(Diagnostic::new(
                location.display().to_string(),
                0,
                format!("search location skipped: {e}"),
            ));
            return;
        }
    };

    let mut manifest_files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == "toml")
        })
        .collect();
    manifest_files.sort();

    for file in manifest_files {
        let content = match std::fs::read_to_string(&file) {
            Ok(content) => content,
            Err(e) => {
                diagnostics.push(Diagnostic::new(
                    file.display().to_string(),
                    0,
                    format!("manifest unreadable: {e}"),
                ));
                continue;
            }
        };

        match parse_plugin_manifest(&content) {
            Ok(None) => {
                debug!(file = %file.display(), "manifest without identity skipped");
            }
            Ok(Some(manifest)) => match implementations.get(&manifest.implementation) {
                Some(constructor) => {
                    debug!(
                        identity = %manifest.identity,
                        version = manifest.version,
                        file = %file.display(),
                        "discovered plugin"
                    );
                    insert_descriptor(
                        index,
                        PluginDescriptor::new(
                            manifest.identity,
                            manifest.version,
                            Arc::clone(constructor),
                        ),
                    );
                }
                None => {
                    diagnostics.push(Diagnostic::new(
                        file.display().to_string(),
                        0,
                        format!(
                            "manifest for '{}' names unknown implementation '{}'",
                            manifest.identity, manifest.implementation
                        ),
                    ));
                }
            },
            Err(e) => {
                diagnostics.push(Diagnostic::new(
                    file.display().to_string(),
                    0,
                    format!("malformed plugin manifest: {e}"),
                ));
            }
        }
    }
}

/// Immutable index of discovered plugins plus discovery-time diagnostics.
///
/// Iteration over identities is sorted, which fixes the deterministic order
/// the facade relies on for concatenation and last-write-wins merging.
pub struct PluginRegistry {
    index: BTreeMap<String, BTreeMap<u32, PluginDescriptor>>,
    diagnostics: Vec<Diagnostic>,
}

impl PluginRegistry {
    /// Returns a fresh builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Distinct identities known to the registry, in sorted order.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// All versions known for an identity, ascending. Empty when unknown.
    pub fn versions(&self, identity: &str) -> Vec<u32> {
        self.index
            .get(identity)
            .map(|versions| versions.keys().copied().collect())
            .unwrap_or_default()
    }

    /// The descriptor registered under an exact (identity, version) pair.
    pub fn get(&self, identity: &str, version: u32) -> Option<&PluginDescriptor> {
        self.index.get(identity).and_then(|v| v.get(&version))
    }

    /// The active (max-version) descriptor for an identity.
    pub fn active(&self, identity: &str) -> Option<&PluginDescriptor> {
        self.index
            .get(identity)
            .and_then(|versions| versions.last_key_value())
            .map(|(_, descriptor)| descriptor)
    }

    /// Active descriptor per identity, in sorted identity order.
    pub fn active_descriptors(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.index
            .values()
            .filter_map(|versions| versions.last_key_value().map(|(_, d)| d))
    }

    /// Discovery-time diagnostics (skipped locations, malformed manifests).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no plugins were discovered or registered.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("identities", &self.index.keys().collect::<Vec<_>>())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}
