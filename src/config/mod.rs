use crate::constants::{DEFAULT_NET_COUNT, DEFAULT_NUMBER_OF_PEOPLE, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Number of people the team generator starts with.
    #[serde(default = "default_people")]
    pub default_people: i64,
    /// Number of nets the team generator starts with.
    #[serde(default = "default_nets")]
    pub default_nets: i64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// TOML file with bracket results. The built-in bracket is shown when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket_file: Option<String>,
}

fn default_people() -> i64 {
    DEFAULT_NUMBER_OF_PEOPLE
}

fn default_nets() -> i64 {
    DEFAULT_NET_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_people: default_people(),
            default_nets: default_nets(),
            log_file_path: None,
            bracket_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `VOLLEYBALL_PEOPLE` - Override default number of people
    /// - `VOLLEYBALL_NETS` - Override default net count
    /// - `VOLLEYBALL_LOG_FILE` - Override log file path
    /// - `VOLLEYBALL_BRACKET_FILE` - Override bracket file path
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Loads configuration from `path`, applies environment overrides and validates.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            debug!("Loading config from {}", path);
            Self::load_from_path(path).await?
        } else {
            debug!("No config file at {}, using defaults", path);
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies values from environment variables over the loaded ones.
    /// Unparseable numbers are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(people) = std::env::var(env_vars::PEOPLE) {
            match people.trim().parse::<i64>() {
                Ok(value) => self.default_people = value,
                Err(_) => warn!("Ignoring {}={}: not a number", env_vars::PEOPLE, people),
            }
        }

        if let Ok(nets) = std::env::var(env_vars::NETS) {
            match nets.trim().parse::<i64>() {
                Ok(value) => self.default_nets = value,
                Err(_) => warn!("Ignoring {}={}: not a number", env_vars::NETS, nets),
            }
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(bracket_file) = std::env::var(env_vars::BRACKET_FILE) {
            self.bracket_file = Some(bracket_file);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.default_people,
            self.default_nets,
            &self.log_file_path,
            &self.bracket_file,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Number of People:");
            println!("{}", config.default_people);
            println!("────────────────────────────────────");
            println!("Net Count:");
            println!("{}", config.default_nets);
            println!("────────────────────────────────────");
            println!("Bracket File:");
            match &config.bracket_file {
                Some(path) => println!("{path}"),
                None => println!("(Built-in bracket)"),
            }
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Using defaults: {DEFAULT_NUMBER_OF_PEOPLE} people, {DEFAULT_NET_COUNT} nets");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        info!("Saved config to {}", path);
        Ok(())
    }

    /// Loads configuration from a custom file path without overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
