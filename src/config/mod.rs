use crate::errors::{AppError, AppResult};
use crate::storage::kv::DEFAULT_QUOTA_BYTES;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Apps Script web app the school sheet is published as.
pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbymllukoh70QEjoUzbEMX45g0eHk8pq5jTKHH8509vwyYXxQ4pZEhpjkOs0RDxVTdpwdA/exec";

/// Known staff member: used to fill in photo and role after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffEntry {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_endpoint")]
    pub default_endpoint: String,
    #[serde(default = "default_quota")]
    pub storage_quota_bytes: usize,
    #[serde(default = "default_keep_on_overflow")]
    pub keep_on_overflow: usize,
    #[serde(default)]
    pub strip_local_photos: bool,
    #[serde(default = "default_max_width")]
    pub compress_max_width: u32,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub staff: Vec<StaffEntry>,
}

fn default_endpoint() -> String {
    DEFAULT_SCRIPT_URL.to_string()
}
fn default_quota() -> usize {
    DEFAULT_QUOTA_BYTES
}
fn default_keep_on_overflow() -> usize {
    5
}
fn default_max_width() -> u32 {
    800
}
fn default_jpeg_quality() -> u8 {
    70
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_endpoint: default_endpoint(),
            storage_quota_bytes: default_quota(),
            keep_on_overflow: default_keep_on_overflow(),
            strip_local_photos: false,
            compress_max_width: default_max_width(),
            jpeg_quality: default_jpeg_quality(),
            log_level: default_log_level(),
            staff: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("GURUHADIR_HOME") {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("guruhadir")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".guruhadir")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("guruhadir.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("guruhadir.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Look up a staff member by name, case-insensitively.
    pub fn find_staff(&self, name: &str) -> Option<&StaffEntry> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.staff.iter().find(|s| s.name.to_lowercase() == needle)
    }

    /// Initialize configuration and database files.
    /// Returns the path of the configured database.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
