// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assay: a pluggable asset-introspection registry.
//!
//! Given a locator (typically a file path), Assay resolves which registered
//! plugins can handle it and aggregates the dependency references and
//! metadata they extract, alongside a non-fatal diagnostic trail.
//!
//! # Usage
//!
//! ```no_run
//! use assay::{Assay, Locator, PluginOptions};
//!
//! let config = assay_config::load_config().expect("config errors");
//! let assay = Assay::with_defaults(&config.discovery);
//!
//! let report = assay.introspect(&Locator::from("scene.json"), &PluginOptions::new());
//! for dependency in &report.dependencies {
//!     println!("references {dependency}");
//! }
//! ```

mod instance;
pub mod resolver;

pub use assay_core::{
    AssayError, AssetPlugin, Diagnostic, Diagnostics, ExtractionResult, Locator, Metadata,
    PluginConstructor, PluginOptions, Report,
};
pub use assay_plugin::{PluginDescriptor, PluginRegistry, RegistryBuilder};
pub use resolver::Assay;
