//! # Configuration
//!
//! Roster keeps a small `config.json` in its data directory.
//!
//! ## Data File Resolution
//!
//! The backing file is resolved in priority order:
//! 1. **CLI flag**: `--file <PATH>`
//! 2. **Environment**: `ROSTER_FILE`
//! 3. **Data directory** joined with the configured `data_file`. The data
//!    directory is `ROSTER_HOME` when set, otherwise the platform data dir
//!    (via the `directories` crate).
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `students.json` | File name (or path) of the record file |

use crate::error::{Result, RosterError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "students.json";

pub const HOME_ENV: &str = "ROSTER_HOME";
pub const FILE_ENV: &str = "ROSTER_FILE";

/// Configuration for roster, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Record file, relative to the data directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig = serde_json::from_str(&content).map_err(|e| {
            RosterError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" | "data_file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" | "data_file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// All settings as `(key, value)` pairs, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![("data-file", self.data_file.clone())]
    }

    /// Path of the record file under `data_dir`.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }
}

/// Locations roster reads from and writes to.
#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
}

impl RosterPaths {
    /// Resolve paths from an optional explicit file and the environment.
    pub fn resolve(file_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = match std::env::var_os(HOME_ENV) {
            Some(home) => PathBuf::from(home),
            None => ProjectDirs::from("com", "roster", "roster")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    RosterError::Config("Could not determine a data directory".to_string())
                })?,
        };

        let file_override = file_override.or_else(|| std::env::var_os(FILE_ENV).map(PathBuf::from));
        Self::from_parts(data_dir, file_override)
    }

    pub fn from_parts(data_dir: PathBuf, file_override: Option<PathBuf>) -> Result<Self> {
        let data_file = match file_override {
            Some(file) => file,
            None => RosterConfig::load(&data_dir)?.data_path(&data_dir),
        };
        Ok(Self {
            data_dir,
            data_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.data_file, "students.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.set("data-file", "class-of-2026.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "class-of-2026.json");
    }

    #[test]
    fn test_missing_key_uses_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        assert!(matches!(
            RosterConfig::load(dir.path()),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = RosterConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert_eq!(config.get("data-file").as_deref(), Some("students.json"));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_data_path_relative_and_absolute() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::default();
        assert_eq!(
            config.data_path(dir.path()),
            dir.path().join("students.json")
        );

        let absolute = dir.path().join("elsewhere.json");
        let config = RosterConfig {
            data_file: absolute.to_string_lossy().into_owned(),
        };
        assert_eq!(config.data_path(Path::new("/unused")), absolute);
    }

    #[test]
    fn test_paths_prefer_explicit_file() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("explicit.json");
        let paths =
            RosterPaths::from_parts(dir.path().to_path_buf(), Some(explicit.clone())).unwrap();
        assert_eq!(paths.data_file, explicit);

        let paths = RosterPaths::from_parts(dir.path().to_path_buf(), None).unwrap();
        assert_eq!(paths.data_file, dir.path().join("students.json"));
    }
}
