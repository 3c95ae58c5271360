// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Assay introspection registry.

use thiserror::Error;

/// The primary error type used across Assay traits and core operations.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Discovery errors (unreadable search location, malformed plugin manifest).
    #[error("discovery error at {location}: {message}")]
    Discovery {
        location: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Plugin execution errors (viability check or extraction call failed).
    #[error("plugin error in {identity}: {message}")]
    Plugin {
        identity: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested plugin was not found in the registry.
    #[error("plugin not found: {identity}")]
    PluginNotFound { identity: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AssayError {
    /// Convenience constructor for a plugin error without an underlying source.
    pub fn plugin(identity: impl Into<String>, message: impl Into<String>) -> Self {
        AssayError::Plugin {
            identity: identity.into(),
            message: message.into(),
            source: None,
        }
    }
}
