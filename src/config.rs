use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::ExportFormat;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "sketchpad.json";

/// Application settings read at startup. The drawing itself is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields keep their default values
pub struct SketchConfig {
    /// Directory exported images are written to (native only)
    pub export_dir: PathBuf,
    /// Prefix of the suggested export file name
    pub file_stem: String,
    pub export_format: ExportFormat,
    /// Initial window size in points
    pub window_size: [f32; 2],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            file_stem: "drawing".to_owned(),
            export_format: ExportFormat::Png,
            window_size: [1200.0, 800.0],
        }
    }
}

impl SketchConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                info!("Loading config from {}", path.display());
                Self::from_json(&json)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from `$SKETCHPAD_CONFIG` or `sketchpad.json`, falling back to defaults on any error
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self::load_from(&path).unwrap_or_else(|err| {
            warn!("{err}; using default configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SketchConfig::from_json(r#"{ "export_format": "webp" }"#).unwrap();
        assert_eq!(config.export_format, ExportFormat::Webp);
        assert_eq!(config.file_stem, "drawing");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(matches!(
            SketchConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = SketchConfig::load_from(Path::new("/definitely/not/here/sketchpad.json")).unwrap();
        assert_eq!(config, SketchConfig::default());
    }
}
