use crate::constants::{defaults, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Score table used when no `--scores` path is given.
    #[serde(default = "default_scores_file_path")]
    pub scores_file_path: String,
    /// Directory that bare names-file identifiers resolve against.
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    /// Directory output files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Optional prefix for output file names (e.g. `liu_` gives `liu_trees_abbrevs.txt`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_prefix: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_scores_file_path() -> String {
    defaults::SCORES_FILE_PATH.to_string()
}

fn default_input_dir() -> String {
    defaults::INPUT_DIR.to_string()
}

fn default_output_dir() -> String {
    defaults::OUTPUT_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scores_file_path: default_scores_file_path(),
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            output_prefix: None,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the defaults are used; nothing is written.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NAME_ABBREV_SCORES_FILE` - Override score table path
    /// - `NAME_ABBREV_INPUT_DIR` - Override input directory
    /// - `NAME_ABBREV_OUTPUT_DIR` - Override output directory
    /// - `NAME_ABBREV_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable, unparsable, or invalid
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overrides fields from the environment variables listed on [`Config::load`].
    pub fn apply_env_overrides(&mut self) {
        if let Ok(scores_file_path) = std::env::var(env_vars::SCORES_FILE) {
            self.scores_file_path = scores_file_path;
        }

        if let Ok(input_dir) = std::env::var(env_vars::INPUT_DIR) {
            self.input_dir = input_dir;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
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
    /// - Marks values that come from defaults when no config file exists
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Score Table:");
        println!("{}", self.scores_file_path);
        println!("────────────────────────────────────");
        println!("Input Directory:");
        println!("{}", self.input_dir);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir);
        if let Some(prefix) = &self.output_prefix {
            println!("Output Prefix: {prefix}");
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::DEFAULT_LOG_FILE_NAME);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
