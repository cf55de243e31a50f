//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::DEFAULT_NATIONAL_AREA;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// CSV file to load; the bundled dataset is used when unset
    pub path: Option<PathBuf>,

    #[serde(default = "default_national_area")]
    pub national_area: String,

    #[serde(default = "default_area")]
    pub default_area: String,

    /// Period shown in the year chart on first load (latest when unset)
    pub default_period: Option<String>,
}

fn default_national_area() -> String {
    DEFAULT_NATIONAL_AREA.to_string()
}

fn default_area() -> String {
    "London".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            national_area: default_national_area(),
            default_area: default_area(),
            default_period: None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Emits "Loaded config" / "Failed to load config" events; the server
    /// runs this under [`crate::logging::bootstrap`] so they are not lost.
    pub fn load_default() -> Self {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("recycling-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/recycling-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file that parses, falling back to the environment
    fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load an explicit file if given, otherwise search the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(path) = lookup("RECYCLING_DATA_PATH") {
            self.data.path = Some(PathBuf::from(path));
        }
        if let Some(area) = lookup("RECYCLING_NATIONAL_AREA") {
            self.data.national_area = area;
        }
        if let Some(area) = lookup("RECYCLING_DEFAULT_AREA") {
            self.data.default_area = area;
        }

        // Server overrides
        if let Some(host) = lookup("RECYCLING_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RECYCLING_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid RECYCLING_PORT: {}", port),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("RECYCLING_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("RECYCLING_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Recycling Dashboard Configuration
#
# Environment variables override these settings:
# - RECYCLING_DATA_PATH
# - RECYCLING_NATIONAL_AREA
# - RECYCLING_DEFAULT_AREA
# - RECYCLING_HOST
# - RECYCLING_PORT
# - RECYCLING_LOG_LEVEL
# - RECYCLING_LOG_FORMAT

[data]
# CSV with Area, Year and Recycling_Rates columns.
# Leave unset to use the dataset bundled with the binary.
# path = "data/household_recycling.csv"

# Area every other area is compared against
national_area = "England"

# Area selected when the page first loads
default_area = "London"

# Period shown in the year chart on first load (latest when unset)
# default_period = "2018/19"

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 5050

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::tests::CapturedWriter;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5050);
        assert_eq!(config.server.addr(), "127.0.0.1:5050");
        assert_eq!(config.data.national_area, "England");
        assert_eq!(config.data.default_area, "London");
        assert!(config.data.path.is_none());
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 5050);
        assert_eq!(config.data.default_area, "London");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
[server]
port = 8050

[data]
path = "/tmp/recycling.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8050);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.data.path, Some(PathBuf::from("/tmp/recycling.csv")));
        assert_eq!(config.data.national_area, "England");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();
        file.flush().unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_malformed_default_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("config.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();

        let writer = CapturedWriter::default();
        let sink = writer.clone();
        let subscriber = crate::logging::bootstrap_with_writer(move || sink.clone());

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::load_first(&[dir.path().join("absent.toml"), bad.clone()])
        });

        assert_eq!(config.server.host, "127.0.0.1");
        let logged = writer.contents();
        assert!(logged.contains("Failed to load config"));
        assert!(logged.contains("config.toml"));
    }

    #[test]
    fn test_first_valid_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "[data]\ndefault_area = \"Camden\"").unwrap();
        std::fs::write(&second, "[data]\ndefault_area = \"Ealing\"").unwrap();

        let config = Config::load_first(&[first, second]);
        assert_eq!(config.data.default_area, "Camden");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RECYCLING_PORT", "9000"),
            ("RECYCLING_DEFAULT_AREA", "Camden"),
            ("RECYCLING_DATA_PATH", "/srv/data.csv"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.data.default_area, "Camden");
        assert_eq!(config.data.path, Some(PathBuf::from("/srv/data.csv")));
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "RECYCLING_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 5050);
    }
}
