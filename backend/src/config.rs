//! Server and data-file configuration.
//!
//! Settings come from a TOML file when one is found, then environment
//! variables override individual values. Without a file the built-in
//! defaults apply.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [data]
//! data_dir = "public/timetables"
//! json_file = "timetable.json"
//! csv_file = "mocking.csv"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid port '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the timetable files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_json_file")]
    pub json_file: String,
    #[serde(default = "default_csv_file")]
    pub csv_file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("public/timetables")
}

fn default_json_file() -> String {
    "timetable.json".to_string()
}

fn default_csv_file() -> String {
    "mocking.csv".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            json_file: default_json_file(),
            csv_file: default_csv_file(),
        }
    }
}

impl DataSettings {
    /// Settings rooted at `data_dir` with the default file names.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_file)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `timetable.toml` from the first standard location that has one.
    ///
    /// Searches the current directory, `backend/`, then the parent directory.
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("timetable.toml"),
            PathBuf::from("backend/timetable.toml"),
            PathBuf::from("../timetable.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// File (`TIMETABLE_CONFIG` or the default locations), then environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("TIMETABLE_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        base.with_env_overrides()
    }

    /// Apply `HOST`, `PORT` and `TIMETABLE_*` environment variables.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Ok(dir) = env::var("TIMETABLE_DATA_DIR") {
            self.data.data_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("TIMETABLE_JSON_FILE") {
            self.data.json_file = file;
        }
        if let Ok(file) = env::var("TIMETABLE_CSV_FILE") {
            self.data.csv_file = file;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
