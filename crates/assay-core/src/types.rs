// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the capability contract, registry, and facade.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque identifier naming the asset under introspection, typically a file path.
///
/// Locators are passed by reference and never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator(pub String);

impl Locator {
    /// Returns the locator as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the locator interpreted as a filesystem path.
    pub fn as_path(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Locator(value.to_string())
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Locator(value)
    }
}

/// Metadata extracted from an asset: keys to arbitrary JSON values.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Typed key/value options supplied by the caller and passed through to every
/// plugin constructed for a query.
///
/// Keys are namespaced per plugin family by convention (e.g. `json-refs.strict`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions(BTreeMap<String, serde_json::Value>);

impl PluginOptions {
    /// Creates an empty options map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key to a JSON value, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the raw JSON value for a key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Returns a string option, or `None` if absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Returns a boolean option, or `None` if absent or not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(|v| v.as_bool())
    }

    /// Returns an integer option, or `None` if absent or not an integer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(|v| v.as_i64())
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The two extraction outputs produced by one plugin invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionResult {
    /// Files the asset references, in the order the plugin reported them.
    pub dependencies: Vec<String>,
    /// Key/value facts about the asset.
    pub metadata: Metadata,
}

/// A single diagnostic message attributed to a plugin family and version.
///
/// Registry-level discovery diagnostics use the search location as the
/// identity and version 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Identity of the plugin (or search location) the message concerns.
    pub identity: String,
    /// Version of the plugin; 0 for registry-level messages.
    pub version: u32,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic for a plugin family at a given version.
    pub fn new(identity: impl Into<String>, version: u32, message: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            version,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} v{}] {}", self.identity, self.version, self.message)
    }
}

/// Non-fatal message trail recorded per plugin instance.
///
/// `viability` explains why a plugin was or was not applicable; `execution`
/// records notable events during extraction, including recovered errors.
/// Both sequences preserve insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub viability: Vec<Diagnostic>,
    pub execution: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty diagnostics trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a viability message.
    pub fn record_viability(&mut self, diagnostic: Diagnostic) {
        self.viability.push(diagnostic);
    }

    /// Appends an execution message.
    pub fn record_execution(&mut self, diagnostic: Diagnostic) {
        self.execution.push(diagnostic);
    }

    /// Merges another trail into this one, preserving the order of `other`.
    pub fn merge(&mut self, other: Diagnostics) {
        self.viability.extend(other.viability);
        self.execution.extend(other.execution);
    }

    /// Returns true if neither sequence holds any message.
    pub fn is_empty(&self) -> bool {
        self.viability.is_empty() && self.execution.is_empty()
    }
}

/// Aggregate answer to "what do we know about this locator?".
///
/// Dependencies from all viable plugins are concatenated in registry
/// iteration order with duplicates preserved; metadata key collisions are
/// resolved last-plugin-wins. Diagnostics cover every instantiated plugin,
/// including non-viable ones.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub dependencies: Vec<String>,
    pub metadata: Metadata,
    pub diagnostics: Diagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_display_and_path() {
        let locator = Locator::from("/assets/scene.json");
        assert_eq!(locator.to_string(), "/assets/scene.json");
        assert_eq!(locator.as_path().extension().unwrap(), "json");
    }

    #[test]
    fn options_typed_accessors() {
        let options = PluginOptions::new()
            .with("json-refs.strict", true)
            .with("file-stat.depth", 3)
            .with("label", "prod");

        assert_eq!(options.get_bool("json-refs.strict"), Some(true));
        assert_eq!(options.get_i64("file-stat.depth"), Some(3));
        assert_eq!(options.get_str("label"), Some("prod"));

        // Wrong-type access returns None rather than panicking.
        assert_eq!(options.get_str("file-stat.depth"), None);
        assert_eq!(options.get_bool("missing"), None);
    }

    #[test]
    fn options_set_replaces_value() {
        let mut options = PluginOptions::new();
        options.set("key", 1);
        options.set("key", 2);
        assert_eq!(options.get_i64("key"), Some(2));
    }

    #[test]
    fn diagnostics_merge_preserves_order() {
        let mut first = Diagnostics::new();
        first.record_viability(Diagnostic::new("a", 1, "skipped"));

        let mut second = Diagnostics::new();
        second.record_viability(Diagnostic::new("b", 2, "skipped"));
        second.record_execution(Diagnostic::new("b", 2, "read failed"));

        first.merge(second);
        assert_eq!(first.viability.len(), 2);
        assert_eq!(first.viability[0].identity, "a");
        assert_eq!(first.viability[1].identity, "b");
        assert_eq!(first.execution.len(), 1);
        assert!(!first.is_empty());
    }

    #[test]
    fn diagnostic_display_format() {
        let diagnostic = Diagnostic::new("json-refs", 2, "not a JSON file");
        assert_eq!(diagnostic.to_string(), "[json-refs v2] not a JSON file");
    }
}
