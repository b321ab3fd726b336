use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Key the chapter collection is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Chapter text JSON, relative to the project root unless absolute.
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,
}

fn default_version() -> u32 {
    1
}

fn default_storage_key() -> String {
    paths::DEFAULT_STORAGE_KEY.to_string()
}

fn default_content_path() -> PathBuf {
    PathBuf::from(paths::DEFAULT_CONTENT_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            storage_key: default_storage_key(),
            content_path: default_content_path(),
        }
    }
}

impl Config {
    /// Load `.tehillim/config.yaml`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        let Some(data) = crate::io::read_if_exists(&path)? else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        };
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn content_path(&self, root: &Path) -> PathBuf {
        if self.content_path.is_absolute() {
            self.content_path.clone()
        } else {
            root.join(&self.content_path)
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if paths::validate_storage_key(&self.storage_key).is_err() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "storage_key '{}' must be lowercase alphanumeric with underscores",
                    self.storage_key
                ),
            });
        }

        let content = self.content_path(root);
        if !content.exists() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "content file '{}' not found; chapter text will be unavailable",
                    content.display()
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        Config::default().save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.storage_key, "tehillim_chapters");
        assert_eq!(loaded.content_path, PathBuf::from("appData.json"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.storage_key, paths::DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let yaml = "storage_key: shul_chapters\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.storage_key, "shul_chapters");
        assert_eq!(cfg.content_path, PathBuf::from("appData.json"));
    }

    #[test]
    fn validate_flags_bad_key_and_missing_content() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            storage_key: "Bad Key".to_string(),
            ..Config::default()
        };
        let warnings = cfg.validate(dir.path());
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].level, WarnLevel::Error);
        assert_eq!(warnings[1].level, WarnLevel::Warning);
    }

    #[test]
    fn validate_clean_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("appData.json"), "{}").unwrap();
        assert!(Config::default().validate(dir.path()).is_empty());
    }
}
