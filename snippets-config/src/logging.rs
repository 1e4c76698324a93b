use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: LevelFilter,
    pub env: bool,
    pub threads: bool,
    /// Render legacy color codes on the console, otherwise they are stripped.
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::Info,
            env: false,
            threads: false,
            color: true,
            timestamp: true,
        }
    }
}

/// Mirror of `log::LevelFilter` so this crate can stay free of logger setup.
/// Written in lowercase in the config file.
#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilter {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[cfg(test)]
mod test {
    use super::{LevelFilter, LoggingConfig};

    #[test]
    fn partial_tables_use_defaults() {
        let config: LoggingConfig = toml::from_str("level = \"debug\"\ncolor = false").unwrap();
        assert_eq!(config.level, LevelFilter::Debug);
        assert!(!config.color);
        assert!(config.enabled);
        assert!(config.timestamp);
    }
}
