use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where a configuration value came from, as shown by `config show`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// The screen shown when no subcommand is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Types,
    Bees,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Types => write!(f, "types"),
            Screen::Bees => write!(f, "bees"),
        }
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "types" => Ok(Screen::Types),
            "bees" => Ok(Screen::Bees),
            _ => Err(format!(
                "Invalid screen '{}'. Valid options: types, bees",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// SQLite file backing both collections
    pub database_path: ConfigValue<PathBuf>,
    /// Screen rendered when no subcommand is given
    pub default_screen: ConfigValue<Screen>,
    /// The `config.yaml` that was read, if one existed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// On-disk shape of `config.yaml`; every key is optional
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    database_path: Option<PathBuf>,
    default_screen: Option<Screen>,
}

impl Config {
    /// `HERDBOOK_*` variables win over the YAML file, which wins over defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut database_path = ConfigValue::new(
            Self::default_data_dir().join("herdbook.db"),
            ConfigSource::Default,
        );
        let mut default_screen = ConfigValue::new(Screen::Types, ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(db_path) = file_config.database_path {
                // Relative to the directory holding config.yaml
                let resolved_path = if db_path.is_relative() {
                    path.parent().map(|p| p.join(&db_path)).unwrap_or(db_path)
                } else {
                    db_path
                };
                database_path = ConfigValue::new(resolved_path, ConfigSource::File);
            }
            if let Some(screen) = file_config.default_screen {
                default_screen = ConfigValue::new(screen, ConfigSource::File);
            }
        }

        if let Ok(db_path) = std::env::var("HERDBOOK_DATABASE_PATH") {
            database_path = ConfigValue::new(PathBuf::from(db_path), ConfigSource::Environment);
        }
        if let Ok(screen) = std::env::var("HERDBOOK_DEFAULT_SCREEN") {
            let screen = screen
                .parse()
                .map_err(|e| ConfigError::EnvError("HERDBOOK_DEFAULT_SCREEN", e))?;
            default_screen = ConfigValue::new(screen, ConfigSource::Environment);
        }

        Ok(Self {
            database_path,
            default_screen,
            config_file,
        })
    }

    /// Directory holding `config.yaml`, under the platform config dir.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("herdbook")
    }

    /// Directory holding `herdbook.db` unless a database path is configured.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("herdbook")
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    EnvError(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::EnvError(var, e) => write!(f, "Invalid value for {}: {}", var, e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert!(config
            .database_path
            .value
            .to_string_lossy()
            .contains("herdbook.db"));
        assert_eq!(config.database_path.source, ConfigSource::Default);
        assert_eq!(config.default_screen.value, Screen::Types);
        assert_eq!(config.default_screen.source, ConfigSource::Default);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_path: /custom/path/db.sqlite").unwrap();
        writeln!(file, "default_screen: bees").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(
            config.database_path.value,
            PathBuf::from("/custom/path/db.sqlite")
        );
        assert_eq!(config.database_path.source, ConfigSource::File);
        assert_eq!(config.default_screen.value, Screen::Bees);
        assert_eq!(config.default_screen.source, ConfigSource::File);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_relative_database_path_resolves_against_config_dir() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_path: data/herd.db").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(
            config.database_path.value,
            temp_dir.path().join("data").join("herd.db")
        );
    }

    #[test]
    #[ignore] // Run with --ignored; env vars can pollute parallel tests
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "default_screen: types").unwrap();

        std::env::set_var("HERDBOOK_DEFAULT_SCREEN", "bees");

        let config = Config::load(Some(config_path));

        std::env::remove_var("HERDBOOK_DEFAULT_SCREEN");

        let config = config.unwrap();
        assert_eq!(config.default_screen.value, Screen::Bees);
        assert_eq!(config.default_screen.source, ConfigSource::Environment);
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_screen_in_file_is_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "default_screen: cattle").unwrap();

        assert!(Config::load(Some(config_path)).is_err());
    }

    #[test]
    fn test_screen_from_str() {
        assert_eq!(Screen::from_str("Bees").unwrap(), Screen::Bees);
        assert_eq!(Screen::from_str("TYPES").unwrap(), Screen::Types);
        assert!(Screen::from_str("cows").is_err());
    }
}
