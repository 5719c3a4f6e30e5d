//! TOML-based user configuration.
//!
//! Read from `<data_dir>/config.toml`. Every field is optional and a missing
//! file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `tracing` filter level ("info", "debug", ...) used when no `-v`/`-q`
    /// flag is given.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Prefill for the hours field on days without an entry.
    #[serde(default)]
    pub default_hours: Option<String>,
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = Self::path_in(data_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&content).map_err(|source| Error::ConfigLoad {
            path,
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(tmp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "default_hours = \"8\"\n").unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.default_hours.as_deref(), Some("8"));
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "log_level = [").unwrap();
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad { .. }));
    }
}
