// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Toolkit configuration supplied by the embedding application at startup.

use crate::display::DisplayMetrics;
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Startup settings for the toolkit.
///
/// Every field has a default, so an empty JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Whether debug logging is emitted. Off unless configured.
    pub debug: bool,
    /// Prefix prepended to every log tag.
    pub tag_prefix: Option<String>,
    /// Pixels per density-independent unit.
    pub density: f32,
    /// Default filter for the logging backend, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            debug: false,
            tag_prefix: None,
            density: 1.0,
            log_filter: "info".to_string(),
        }
    }
}

impl ToolkitConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid toolkit configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In '{}'", path.display()))
    }

    /// Checks the invariants the rest of the toolkit relies on.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.density > 0.0 && self.density.is_finite(),
            "density must be a positive number, got {}",
            self.density
        );
        Ok(())
    }

    /// Returns the display metrics described by this configuration.
    pub fn display_metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ToolkitConfig::from_json("{}").unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn empty_document_keeps_logging_off() {
        let config = ToolkitConfig::from_json("{}").unwrap();
        assert!(!config.debug);
        assert_eq!(config.tag_prefix, None);
        assert_eq!(config.density, 1.0);
    }

    #[test]
    fn full_document() {
        let config = ToolkitConfig::from_json(
            r#"{"debug": true, "tag_prefix": "app_", "density": 2.5, "log_filter": "debug"}"#,
        )
        .unwrap();
        assert!(config.debug);
        assert_eq!(config.tag_prefix.as_deref(), Some("app_"));
        assert_eq!(config.display_metrics().dip_to_pixel_size(2.0), 5);
    }

    #[test]
    fn rejects_non_positive_density() {
        assert!(ToolkitConfig::from_json(r#"{"density": 0.0}"#).is_err());
        assert!(ToolkitConfig::from_json(r#"{"density": -1.0}"#).is_err());
    }

    #[test]
    fn display_metrics_only_from_valid_density() {
        let config = ToolkitConfig::from_json(r#"{"density": 3.0}"#).unwrap();
        assert_eq!(config.display_metrics().density(), 3.0);
        assert_eq!(config.display_metrics().dip_to_pixel_size(2.0), 6);
        assert!(ToolkitConfig::from_json(r#"{"density": -3.0}"#).is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tag_prefix": "demo_"}}"#).unwrap();

        let config = ToolkitConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.tag_prefix.as_deref(), Some("demo_"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ToolkitConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }
}
