// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Assay introspection registry.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides. The registry does not read configuration itself; the
//! loaded [`DiscoveryConfig`] is handed to the registry builder explicitly.
//!
//! # Usage
//!
//! ```no_run
//! let config = assay_config::load_config().expect("config errors");
//! println!("search paths: {:?}", config.discovery.search_paths);
//! ```

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AssayConfig, DiscoveryConfig};
