//! Metadata configuration deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Settings controlling repository metadata resolution.
///
/// Usually loaded from a TOML file, but callers embedding the library can
/// assemble one directly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MetadataConfig {
    /// Explicit homepage URL, overriding the derived repository URL.
    pub homepage: Option<String>,

    /// Remote names to probe, in priority order.
    #[serde(default = "default_remotes")]
    pub remote: Vec<String>,

    /// Whether to emit a bug tracker entry pointing at the issue tracker.
    #[serde(default)]
    pub issues: bool,
}

pub(crate) fn default_remotes() -> Vec<String> {
    vec!["origin".to_string()]
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            homepage: None,
            remote: default_remotes(),
            issues: false,
        }
    }
}

impl MetadataConfig {
    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading metadata config");

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// A present homepage must be an absolute URL and the remote candidate
    /// list must not be empty.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(homepage) = &self.homepage {
            Url::parse(homepage).map_err(|e| ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!("homepage is not an absolute URL: {e}"),
            })?;
        }

        if self.remote.is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "remote list must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply() {
        let config: MetadataConfig = toml::from_str("").unwrap();

        assert_eq!(config.homepage, None);
        assert_eq!(config.remote, vec!["origin".to_string()]);
        assert!(!config.issues);
    }

    #[test]
    fn load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metadata.toml");
        fs::write(
            &path,
            r#"
homepage = "https://widget.example.com"
remote = ["upstream", "origin"]
issues = true
"#,
        )
        .unwrap();

        let config = MetadataConfig::load(&path).unwrap();

        assert_eq!(
            config.homepage,
            Some("https://widget.example.com".to_string())
        );
        assert_eq!(
            config.remote,
            vec!["upstream".to_string(), "origin".to_string()]
        );
        assert!(config.issues);
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");

        let result = MetadataConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metadata.toml");
        fs::write(&path, "issues = ").unwrap();

        let result = MetadataConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn load_rejects_relative_homepage() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metadata.toml");
        fs::write(&path, r#"homepage = "widget.example.com""#).unwrap();

        let result = MetadataConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_rejects_empty_remote_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metadata.toml");
        fs::write(&path, "remote = []").unwrap();

        let result = MetadataConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
