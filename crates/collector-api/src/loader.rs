//! Format-agnostic spec loading

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Loads forwarder documents and profiles from disk.
///
/// The format is detected from the file extension:
/// - `.yaml`, `.yml` -> YAML
/// - `.json` -> JSON
/// - `.toml` -> TOML
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecStore;

impl SpecStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize a spec file.
    pub fn load<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        tracing::debug!(path = %path.display(), extension, "loading spec");

        self.parse(path, extension, &content)
    }

    fn parse<T: DeserializeOwned>(&self, path: &Path, extension: &str, content: &str) -> Result<T> {
        let parse_error = |format: &str, message: String| Error::Parse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            "json" => serde_json::from_str(content).map_err(|e| parse_error("JSON", e.to_string())),
            "toml" => toml::from_str(content).map_err(|e| parse_error("TOML", e.to_string())),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
