// SPDX-FileCopyrightText: 2026 Assay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in filesystem-facts plugin.
//!
//! Viable for any locator that exists on disk; reports size, extension, and
//! writability as metadata. Declares no dependencies.

use assay_core::{AssayError, AssetPlugin, Locator, Metadata};

/// Reports basic filesystem facts about a locator.
pub struct FileStatPlugin;

impl AssetPlugin for FileStatPlugin {
    fn viable(&self, locator: &Locator) -> Result<bool, AssayError> {
        Ok(locator.as_path().exists())
    }

    fn metadata(&self, locator: &Locator) -> Result<Metadata, AssayError> {
        let stat = std::fs::metadata(locator.as_path()).map_err(|e| AssayError::Plugin {
            identity: "file-stat".to_string(),
            message: format!("failed to stat '{locator}': {e}"),
            source: Some(Box::new(e)),
        })?;

        let path = locator.as_path();
        let mut metadata = Metadata::new();
        metadata.insert("size_bytes".to_string(), stat.len().into());
        metadata.insert("read_only".to_string(), stat.permissions().readonly().into());
        metadata.insert("is_dir".to_string(), stat.is_dir().into());
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            metadata.insert("extension".to_string(), extension.into());
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            metadata.insert("file_stem".to_string(), stem.into());
        }
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn not_viable_for_missing_file() {
        let plugin = FileStatPlugin;
        let locator = Locator::from("/definitely/not/here.bin");
        assert!(!plugin.viable(&locator).unwrap());
    }

    #[test]
    fn metadata_reports_size_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.obj");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"v 0.0 0.0 0.0\n").unwrap();

        let plugin = FileStatPlugin;
        let locator = Locator::from(path.to_string_lossy().to_string());
        assert!(plugin.viable(&locator).unwrap());

        let metadata = plugin.metadata(&locator).unwrap();
        assert_eq!(metadata["size_bytes"], serde_json::json!(14));
        assert_eq!(metadata["extension"], serde_json::json!("obj"));
        assert_eq!(metadata["file_stem"], serde_json::json!("model"));
        assert_eq!(metadata["is_dir"], serde_json::json!(false));
    }

    #[test]
    fn dependencies_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        std::fs::write(&path, "x").unwrap();

        let plugin = FileStatPlugin;
        let locator = Locator::from(path.to_string_lossy().to_string());
        assert!(plugin.dependencies(&locator).unwrap().is_empty());
    }
}
