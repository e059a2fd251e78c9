//! Mapper configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::diagnostics::Severity;
use crate::error::{KolabCalError, KolabCalResult};

/// Prefix added to passthrough custom properties on the way into native form.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "X-KOLAB-";

/// Custom properties already in the native library's own namespace keep their key.
pub const DEFAULT_PASSTHROUGH_PREFIX: &str = "X-KDE";

/// Configuration at ~/.config/kolabcal/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub namespace_prefix: String,
    pub passthrough_prefix: String,
    /// Lowest severity at which a conversion batch counts as failed.
    pub fail_on: Severity,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
            passthrough_prefix: DEFAULT_PASSTHROUGH_PREFIX.to_string(),
            fail_on: Severity::Error,
        }
    }
}

impl MapperConfig {
    pub fn config_path() -> KolabCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KolabCalError::Config("Could not determine config directory".into()))?
            .join("kolabcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> KolabCalResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: MapperConfig =
            toml::from_str(&content).map_err(|e| KolabCalError::Config(e.to_string()))?;

        if config.namespace_prefix.is_empty() {
            return Err(KolabCalError::Config(
                "namespace_prefix must not be empty".into(),
            ));
        }

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> KolabCalResult<()> {
        let contents = format!(
            "\
# kolabcal configuration

# Prefix added to custom properties when converting to native form:
# namespace_prefix = \"{DEFAULT_NAMESPACE_PREFIX}\"

# Custom properties starting with this prefix are passed through untouched:
# passthrough_prefix = \"{DEFAULT_PASSTHROUGH_PREFIX}\"

# Exit with an error when diagnostics reach this severity (warning, error, critical):
# fail_on = \"error\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KolabCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| KolabCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MapperConfig::load(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "fail_on = \"warning\"\n").unwrap();

        let config = MapperConfig::load(&path).unwrap();
        assert_eq!(config.fail_on, Severity::Warning);
        assert_eq!(config.namespace_prefix, DEFAULT_NAMESPACE_PREFIX);
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        MapperConfig::create_default_config(&path).unwrap();
        let config = MapperConfig::load(&path).unwrap();

        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn test_empty_namespace_prefix_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "namespace_prefix = \"\"\n").unwrap();

        assert!(matches!(
            MapperConfig::load(&path),
            Err(KolabCalError::Config(_))
        ));
    }
}
