// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-query plugin instance driver.
//!
//! A [`PluginInstance`] binds one active descriptor to one locator for the
//! duration of a query: constructed immediately before the viability check,
//! dropped once extraction completes or is skipped. Every failure is
//! captured in the instance's diagnostics instead of propagating; a plugin
//! can degrade a query's results but never abort it.

use assay_core::{Diagnostic, Diagnostics, ExtractionResult, Locator, PluginOptions};
use assay_plugin::PluginDescriptor;
use tracing::{debug, warn};

pub(crate) struct PluginInstance {
    identity: String,
    version: u32,
    plugin: Box<dyn assay_core::AssetPlugin>,
    diagnostics: Diagnostics,
}

impl PluginInstance {
    /// Constructs the underlying plugin from its descriptor, handing it the
    /// caller-supplied options.
    pub(crate) fn new(descriptor: &PluginDescriptor, options: &PluginOptions) -> Self {
        Self {
            identity: descriptor.identity().to_string(),
            version: descriptor.version(),
            plugin: descriptor.construct(options),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Runs the viability check.
    ///
    /// `Ok(false)` and `Err` both mean "skip extraction"; each records a
    /// viability diagnostic. A passing check records nothing.
    pub(crate) fn check_viability(&mut self, locator: &Locator) -> bool {
        match self.plugin.viable(locator) {
            Ok(true) => {
                debug!(identity = %self.identity, version = self.version, %locator, "viable");
                true
            }
            Ok(false) => {
                debug!(identity = %self.identity, version = self.version, %locator, "not viable");
                self.diagnostics.record_viability(Diagnostic::new(
                    &self.identity,
                    self.version,
                    format!("not viable for '{locator}'"),
                ));
                false
            }
            Err(e) => {
                warn!(identity = %self.identity, version = self.version, %locator, error = %e,
                    "viability check failed");
                self.diagnostics.record_viability(Diagnostic::new(
                    &self.identity,
                    self.version,
                    format!("viability check failed for '{locator}': {e}"),
                ));
                false
            }
        }
    }

    /// Invokes `dependencies` and `metadata` independently.
    ///
    /// A failure in one call is recorded as an execution diagnostic and
    /// substituted with the empty value; the sibling call still runs.
    pub(crate) fn extract(&mut self, locator: &Locator) -> ExtractionResult {
        let dependencies = match self.plugin.dependencies(locator) {
            Ok(dependencies) => dependencies,
            Err(e) => {
                warn!(identity = %self.identity, version = self.version, %locator, error = %e,
                    "dependency extraction failed");
                self.diagnostics.record_execution(Diagnostic::new(
                    &self.identity,
                    self.version,
                    format!("dependency extraction failed for '{locator}': {e}"),
                ));
                Vec::new()
            }
        };

        let metadata = match self.plugin.metadata(locator) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(identity = %self.identity, version = self.version, %locator, error = %e,
                    "metadata extraction failed");
                self.diagnostics.record_execution(Diagnostic::new(
                    &self.identity,
                    self.version,
                    format!("metadata extraction failed for '{locator}': {e}"),
                ));
                assay_core::Metadata::new()
            }
        };

        ExtractionResult {
            dependencies,
            metadata,
        }
    }

    /// Consumes the instance, yielding its diagnostic trail for aggregation.
    pub(crate) fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}
