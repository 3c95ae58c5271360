// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in asset plugins compiled into the default catalog.

pub mod file_stat;
pub mod json_refs;

pub use file_stat::FileStatPlugin;
pub use json_refs::JsonRefsPlugin;
