use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod catalog;

pub use catalog::CityCatalog;

/// CSV file name per city, relative to `data_dir` unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityFiles {
    #[serde(default = "default_chicago_file")]
    pub chicago: String,
    #[serde(default = "default_nyc_file")]
    pub new_york_city: String,
    #[serde(default = "default_washington_file")]
    pub washington: String,
}

fn default_chicago_file() -> String {
    City::Chicago.default_file().to_string()
}
fn default_nyc_file() -> String {
    City::NewYorkCity.default_file().to_string()
}
fn default_washington_file() -> String {
    City::Washington.default_file().to_string()
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: default_chicago_file(),
            new_york_city: default_nyc_file(),
            washington: default_washington_file(),
        }
    }
}

impl CityFiles {
    pub fn get(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub files: CityFiles,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_true")]
    pub show_timing: bool,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            files: CityFiles::default(),
            page_size: default_page_size(),
            show_timing: true,
            color: true,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikeshare")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".bikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            debug!("no configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let load_err = |reason: String| AppError::ConfigLoad {
            path: path.clone(),
            reason,
        };

        let content = fs::read_to_string(&path).map_err(|e| load_err(e.to_string()))?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| load_err(e.to_string()))?;

        debug!("configuration loaded from {}", path.display());
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Resolved data directory (`~` expanded).
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Build the immutable city → file mapping handed to the loader.
    pub fn catalog(&self) -> CityCatalog {
        CityCatalog::new(self.data_dir(), &self.files)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
