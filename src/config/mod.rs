use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV file holding the observation table
    pub data_file: String,
    /// Append-only audit log
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Moment used by `add` when --moment is omitted ("Matin" / "Soir")
    #[serde(default = "default_moment")]
    pub default_moment: String,
    /// Width, in cells, of the bars drawn by `chart`
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_log_file() -> String {
    Config::config_dir()
        .join("pregtrack.log")
        .to_string_lossy()
        .to_string()
}
fn default_moment() -> String {
    "Matin".to_string()
}
fn default_chart_width() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_default().to_string_lossy().to_string(),
            log_file: default_log_file(),
            default_moment: default_moment(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pregtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pregtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pregtrack.conf")
    }

    /// Return the default path of the observation table
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("symptomes.csv")
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Use `data_file` for this run only. A relative path is kept relative
    /// to the working directory; the audit log moves next to it.
    pub fn with_data_file(mut self, data_file: &str) -> Self {
        let data = expand_tilde(data_file);
        self.log_file = data
            .with_extension("log")
            .to_string_lossy()
            .to_string();
        self.data_file = data.to_string_lossy().to_string();
        self
    }

    /// Create the config directory and, unless `is_test`, write the config
    /// file. `custom_data` follows the same rule as [`Config::with_data_file`].
    /// Returns the configuration in effect.
    pub fn init_all(custom_data: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let config = match custom_data {
            Some(name) => Self::default().with_data_file(name),
            None => Self::default(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
