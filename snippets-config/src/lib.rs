use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub mod logging;

pub const DEFAULT_PREFIX: &str = "&7[&bTest&3Plugin&7] ";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {source}. Delete the old config to regenerate the defaults")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything the helpers read from `snippets.toml`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SnippetsConfiguration {
    /// Prepended to every console message sent through the log helper.
    /// May contain `&` codes and `<#RRGGBB>` markers.
    pub prefix: String,
    pub logging: LoggingConfig,
}

impl Default for SnippetsConfiguration {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

pub trait LoadTomlConfiguration {
    /// Loads from [`Self::get_path`].
    fn load() -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        Self::load_from(Self::get_path())
    }

    /// Reads the file if it exists, otherwise writes the defaults there.
    fn load_from(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config = if path.exists() {
            let file_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!(
                            "Couldn't write default config to {:?}. Reason: {}",
                            path, err
                        );
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {}", err),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadTomlConfiguration for SnippetsConfiguration {
    fn get_path() -> &'static Path {
        Path::new("snippets.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.contains(['\n', '\r']) {
            return Err(ConfigError::Invalid(
                "prefix must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::{ConfigError, LoadTomlConfiguration, SnippetsConfiguration, DEFAULT_PREFIX};
    use crate::logging::LevelFilter;

    #[test]
    fn writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.toml");

        let config = SnippetsConfiguration::load_from(&path).unwrap();
        assert_eq!(config, SnippetsConfiguration::default());
        assert!(path.exists());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("prefix"));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.toml");
        fs::write(&path, "prefix = \"&c[Shop] \"\n[logging]\nlevel = \"debug\"\n").unwrap();

        let config = SnippetsConfiguration::load_from(&path).unwrap();
        assert_eq!(config.prefix, "&c[Shop] ");
        assert_eq!(config.logging.level, LevelFilter::Debug);
        assert!(config.logging.color);
    }

    #[test]
    fn rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.toml");
        fs::write(&path, "prefix = ").unwrap();

        assert!(matches!(
            SnippetsConfiguration::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_multiline_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.toml");
        fs::write(&path, "prefix = \"a\\nb\"\n").unwrap();

        assert!(matches!(
            SnippetsConfiguration::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn default_prefix() {
        assert_eq!(SnippetsConfiguration::default().prefix, DEFAULT_PREFIX);
    }
}
