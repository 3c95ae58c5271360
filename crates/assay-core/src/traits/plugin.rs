// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability contract every asset plugin must satisfy.

use crate::error::AssayError;
use crate::types::{Locator, Metadata, PluginOptions};

/// The polymorphic surface of one plugin instance.
///
/// Instances are constructed per query by a [`PluginConstructor`] and dropped
/// once extraction completes or is skipped; they are never reused across
/// locators. All three methods have default bodies so a concrete plugin only
/// overrides what it restricts or extracts.
pub trait AssetPlugin: Send + Sync {
    /// Whether this plugin can handle the locator.
    ///
    /// Opt-out model: the default accepts every locator, and plugins override
    /// to declare inability. Must be free of side effects. A returned `Err`
    /// is treated by the caller as "not viable", never propagated.
    fn viable(&self, locator: &Locator) -> Result<bool, AssayError> {
        let _ = locator;
        Ok(true)
    }

    /// Files the asset at `locator` references, in extraction order.
    ///
    /// May read the locator's backing resource; never writes.
    fn dependencies(&self, locator: &Locator) -> Result<Vec<String>, AssayError> {
        let _ = locator;
        Ok(Vec::new())
    }

    /// Key/value facts about the asset at `locator`.
    ///
    /// Same side-effect constraint as [`dependencies`](Self::dependencies).
    fn metadata(&self, locator: &Locator) -> Result<Metadata, AssayError> {
        let _ = locator;
        Ok(Metadata::new())
    }
}

/// Constructs [`AssetPlugin`] instances for one plugin family.
///
/// The constructor is the `implementation` leg of a plugin descriptor:
/// identity and version live on the descriptor, not on the instance.
pub trait PluginConstructor: Send + Sync {
    /// Creates a fresh instance, handing it the caller-supplied options.
    fn construct(&self, options: &PluginOptions) -> Box<dyn AssetPlugin>;
}

/// Plain functions and closures act as constructors directly.
impl<F> PluginConstructor for F
where
    F: Fn(&PluginOptions) -> Box<dyn AssetPlugin> + Send + Sync,
{
    fn construct(&self, options: &PluginOptions) -> Box<dyn AssetPlugin> {
        self(options)
    }
}
