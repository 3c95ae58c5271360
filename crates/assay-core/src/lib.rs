// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Assay asset-introspection registry.
//!
//! This crate provides the capability contract every asset plugin implements,
//! the error type, and the common types shared by the registry and the
//! resolution facade.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AssayError;
pub use traits::{AssetPlugin, PluginConstructor};
pub use types::{Diagnostic, Diagnostics, ExtractionResult, Locator, Metadata, PluginOptions, Report};
