// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parser, built-in catalog, and discovery registry.
//!
//! The registry is built once from explicit registrations plus an ordered
//! list of search locations, then stays immutable. Each identity keeps every
//! discovered version; the max-version descriptor per identity is the one a
//! query resolves against.

pub mod builtin;
pub mod catalog;
pub mod manifest;
pub mod registry;

pub use catalog::{builtin_descriptors, builtin_implementations};
pub use manifest::{PluginManifest, load_plugin_manifest, parse_plugin_manifest};
pub use registry::{PluginDescriptor, PluginRegistry, RegistryBuilder};
