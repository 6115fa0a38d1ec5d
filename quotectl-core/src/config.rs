use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Environment variable overriding `database.host`
pub const ENV_DB_HOST: &str = "QUOTECTL_DB_HOST";
/// Environment variable overriding `database.name`
pub const ENV_DB_NAME: &str = "QUOTECTL_DB_NAME";
/// Environment variable overriding `database.username`
pub const ENV_DB_USER: &str = "QUOTECTL_DB_USER";
/// Environment variable overriding `database.password`
pub const ENV_DB_PASSWORD: &str = "QUOTECTL_DB_PASSWORD";

/// Kept low: one site, a handful of concurrent page loads.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Rows shown by the "today" display when nothing was added today
const DEFAULT_RECENT_LIMIT: i64 = 5;

const REDACTED: &str = "********";

/// Configuration file for quotectl (`~/.quotectl/config.toml`)
///
/// Every section is optional; the database credentials can come
/// entirely from the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub database: DatabaseSection,
    pub display: DisplayConfig,
    pub server: ServerSettings,
}

/// `[database]` table as written in the config file
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub host: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    pub max_connections: Option<u32>,
}

/// Resolved connection parameters for the quote store
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub port: Option<u16>,
    pub max_connections: u32,
}

/// How the public page picks its content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One random phrase and one random joke
    #[default]
    Random,
    /// Everything added today, falling back to the most recent entries
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    pub recent_limit: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: SocketAddr,
}

impl QuoteConfig {
    /// Load config from an explicit path, or from `~/.quotectl/config.toml`.
    ///
    /// A missing file at the default location yields the defaults; a
    /// missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !config_path.exists() {
            if required {
                return Err(CoreError::config(format!(
                    "config file not found: {}",
                    config_path.display()
                )));
            }
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Self::from_toml_str(&content).map_err(|e| CoreError::toml(&config_path, e))
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get config file path: ~/.quotectl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quotectl/config.toml")
    }

    /// Resolve database parameters, environment first, then the config file
    pub fn database(&self) -> Result<DatabaseConfig> {
        self.database.resolve(|key| env::var(key).ok())
    }

    /// Copy of the config with the password masked, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.database.password.is_some() {
            copy.database.password = Some(REDACTED.to_string());
        }
        copy
    }

    /// Render as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl DatabaseSection {
    /// Resolve connection parameters using `lookup` for environment overrides.
    ///
    /// Blank values count as missing.
    pub fn resolve<F>(&self, lookup: F) -> Result<DatabaseConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, file_value: &Option<String>| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| file_value.clone().filter(|v| !v.trim().is_empty()))
                .ok_or_else(|| {
                    CoreError::config(format!(
                        "{} is not set (environment or [database] in config file)",
                        key
                    ))
                })
        };

        Ok(DatabaseConfig {
            host: pick(ENV_DB_HOST, &self.host)?,
            name: pick(ENV_DB_NAME, &self.name)?,
            username: pick(ENV_DB_USER, &self.username)?,
            password: pick(ENV_DB_PASSWORD, &self.password)?,
            port: self.port,
            max_connections: self
                .max_connections
                .unwrap_or(DEFAULT_MAX_CONNECTIONS)
                .max(1),
        })
    }
}

impl DatabaseConfig {
    /// Resolve connection parameters from the environment only
    pub fn from_env() -> Result<Self> {
        DatabaseSection::default().resolve(|key| env::var(key).ok())
    }
}

impl fmt::Debug for DatabaseSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSection")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Today => f.write_str("today"),
        }
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "today" => Ok(Self::Today),
            other => Err(CoreError::config(format!(
                "unknown display mode '{}' (expected 'random' or 'today')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parses_full_config() {
        let config = QuoteConfig::from_toml_str(
            r#"
            [database]
            host = "db.internal"
            name = "wisdom"
            username = "wisdom_admin"
            password = "hunter2"
            port = 5433

            [display]
            mode = "today"
            recent_limit = 3

            [server]
            bind = "0.0.0.0:8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.mode, DisplayMode::Today);
        assert_eq!(config.display.recent_limit, 3);
        assert_eq!(config.server.bind.port(), 8080);

        let db = config.database.resolve(|_| None).unwrap();
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, Some(5433));
        assert_eq!(db.max_connections, 5);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = QuoteConfig::from_toml_str("").unwrap();
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.display.mode, DisplayMode::Random);
        assert_eq!(config.display.recent_limit, 5);
        assert_eq!(config.server.bind.port(), 3030);
    }

    #[test]
    fn environment_overrides_file() {
        let section = DatabaseSection {
            host: Some("file-host".into()),
            name: Some("file-db".into()),
            username: Some("file-user".into()),
            password: Some("file-pass".into()),
            ..Default::default()
        };

        let db = section
            .resolve(lookup_from(&[
                (ENV_DB_HOST, "env-host"),
                (ENV_DB_PASSWORD, "env-pass"),
            ]))
            .unwrap();

        assert_eq!(db.host, "env-host");
        assert_eq!(db.name, "file-db");
        assert_eq!(db.username, "file-user");
        assert_eq!(db.password, "env-pass");
    }

    #[test]
    fn missing_parameter_names_the_key() {
        let err = DatabaseSection::default()
            .resolve(lookup_from(&[
                (ENV_DB_HOST, "localhost"),
                (ENV_DB_NAME, "quotes"),
                (ENV_DB_USER, "root"),
            ]))
            .unwrap_err();

        assert!(err.to_string().contains(ENV_DB_PASSWORD));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let err = DatabaseSection::default()
            .resolve(lookup_from(&[
                (ENV_DB_HOST, "   "),
                (ENV_DB_NAME, "quotes"),
                (ENV_DB_USER, "root"),
                (ENV_DB_PASSWORD, "root"),
            ]))
            .unwrap_err();

        assert!(err.to_string().contains(ENV_DB_HOST));
    }

    #[test]
    fn debug_never_prints_password() {
        let db = DatabaseSection::default()
            .resolve(lookup_from(&[
                (ENV_DB_HOST, "localhost"),
                (ENV_DB_NAME, "quotes"),
                (ENV_DB_USER, "root"),
                (ENV_DB_PASSWORD, "Admin@2025"),
            ]))
            .unwrap();

        let rendered = format!("{:?}", db);
        assert!(!rendered.contains("Admin@2025"));
        assert!(rendered.contains("localhost"));
    }

    #[test]
    fn redacted_masks_password_in_toml() {
        let mut config = QuoteConfig::default();
        config.database.password = Some("Admin@2025".into());

        let rendered = config.redacted().to_toml_string().unwrap();
        assert!(!rendered.contains("Admin@2025"));
        assert!(rendered.contains(REDACTED));
    }

    #[test]
    fn display_mode_from_str() {
        assert_eq!("random".parse::<DisplayMode>().unwrap(), DisplayMode::Random);
        assert_eq!("Today".parse::<DisplayMode>().unwrap(), DisplayMode::Today);
        assert!("weekly".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn load_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = QuoteConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nmode = 42").unwrap();

        let err = QuoteConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CoreError::Toml { .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nmode = \"today\"").unwrap();

        let config = QuoteConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.display.mode, DisplayMode::Today);
    }
}
