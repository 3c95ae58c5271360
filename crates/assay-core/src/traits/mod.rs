// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the Assay plugin architecture.

pub mod plugin;

pub use plugin::{AssetPlugin, PluginConstructor};
