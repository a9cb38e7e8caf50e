//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the API location, pagination defaults and theme preference.

mod error;

pub use error::ConfigError;

use crate::api::DEFAULT_BASE_URL;
use crate::error::AppError;
use crate::pipeline::{PagePolicy, PageSize};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/posts-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub page_size: PageSize,
    pub reset_page_on_change: bool,
    pub theme_name: String,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default)]
    pub reset_page_on_change: bool,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the default settings.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            page_size: PageSize::default(),
            reset_page_on_change: false,
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. If no file exists yet, write the defaults to the
    /// default file path or the custom path if provided.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.base_url = data.base_url;
            self.page_size = data.page_size;
            self.reset_page_on_change = data.reset_page_on_change;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Serialize the current configuration and write it to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            reset_page_on_change: self.reset_page_on_change,
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Override the page size with a value given on the command line.
    ///
    pub fn set_page_size_arg(&mut self, value: &str) -> Result<(), AppError> {
        let size = value
            .parse::<usize>()
            .map_err(|e| e.to_string())
            .and_then(PageSize::try_from)
            .map_err(|message| ConfigError::InvalidValue {
                name: "page-size".to_string(),
                message,
            })?;
        self.page_size = size;
        Ok(())
    }

    /// Return the pipeline behaviour for page changes.
    ///
    pub fn page_policy(&self) -> PagePolicy {
        if self.reset_page_on_change {
            PagePolicy::ResetToFirst
        } else {
            PagePolicy::Preserve
        }
    }

    /// Return the configured log level, falling back to `Info` when the
    /// setting cannot be parsed.
    ///
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let id: Uuid = UUIDv4.fake();
        std::env::temp_dir().join(format!("posts-tui-test-{}", id))
    }

    #[test]
    fn new_has_defaults() {
        let config = Config::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, PageSize::Ten);
        assert!(!config.reset_page_on_change);
        assert_eq!(config.page_policy(), PagePolicy::Preserve);
        assert_eq!(config.level_filter(), LevelFilter::Info);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn load_writes_defaults_when_missing() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.base_url = "http://localhost:3000".to_string();
        config.page_size = PageSize::TwentyFive;
        config.reset_page_on_change = true;
        config.log_level = "debug".to_string();
        config.save().unwrap();

        let mut loaded = Config::new();
        loaded.load(dir.to_str()).unwrap();
        assert_eq!(loaded.base_url, "http://localhost:3000");
        assert_eq!(loaded.page_size, PageSize::TwentyFive);
        assert_eq!(loaded.page_policy(), PagePolicy::ResetToFirst);
        assert_eq!(loaded.level_filter(), LevelFilter::Debug);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_partial_file_uses_defaults() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "page_size: 30\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.page_size, PageSize::Thirty);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.theme_name, "tokyo-night");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_rejects_unsupported_page_size() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "page_size: 15\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn page_size_arg() {
        let mut config = Config::new();
        config.set_page_size_arg("20").unwrap();
        assert_eq!(config.page_size, PageSize::Twenty);
        assert!(config.set_page_size_arg("12").is_err());
        assert!(config.set_page_size_arg("ten").is_err());
        assert_eq!(config.page_size, PageSize::Twenty);
    }

    #[test]
    fn unparsable_log_level_falls_back() {
        let mut config = Config::new();
        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
