//! Configuration management module.
//!
//! This module handles loading and saving application configuration: the
//! color theme and which of the two screens opens first.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::state::Screen;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/vitrine-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub theme_name: String,
    pub start_screen: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_start_screen")]
    pub start_screen: String,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_start_screen() -> String {
    "imc".to_string()
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            theme_name: default_theme_name(),
            start_screen: default_start_screen(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file is created with default values so the
    /// user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.start_screen = data.start_screen;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            start_screen: self.start_screen.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the screen the application opens on. Unknown values fall back
    /// to the calculator.
    ///
    pub fn initial_screen(&self) -> Screen {
        match self.start_screen.as_str() {
            "boutique" => Screen::Catalog,
            _ => Screen::Bmi,
        }
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
    use std::env;

    fn temp_config_dir(label: &str) -> PathBuf {
        env::temp_dir().join(format!("vitrine-tui-test-{}-{}", label, std::process::id()))
    }

    #[test]
    fn load_creates_default_file_when_missing() {
        let dir = temp_config_dir("create");
        let _ = fs::remove_dir_all(&dir);

        let mut config = Config::new();
        config.load(Some(dir.to_str().unwrap())).unwrap();
        assert!(dir.join(FILE_NAME).exists());
        assert_eq!(config.theme_name, default_theme_name());
        assert_eq!(config.start_screen, default_start_screen());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_round_trips_saved_values() {
        let dir = temp_config_dir("roundtrip");
        let _ = fs::remove_dir_all(&dir);

        let mut config = Config::new();
        config.load(Some(dir.to_str().unwrap())).unwrap();
        config.theme_name = "rose-pine-dawn".to_string();
        config.start_screen = "boutique".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(dir.to_str().unwrap())).unwrap();
        assert_eq!(reloaded.theme_name, "rose-pine-dawn");
        assert_eq!(reloaded.start_screen, "boutique");
        assert_eq!(reloaded.initial_screen(), Screen::Catalog);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }

    #[test]
    fn initial_screen_defaults_to_calculator() {
        let mut config = Config::new();
        assert_eq!(config.initial_screen(), Screen::Bmi);
        config.start_screen = "unknown".to_string();
        assert_eq!(config.initial_screen(), Screen::Bmi);
    }
}
