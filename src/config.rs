// Handles configuration loading and defaults.
//
// Config is best-effort the same way storage is: a missing or corrupt
// config.toml falls back to defaults with a logged warning, never an error
// surfaced to the user.
use crate::paths::AppPaths;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_bot_name() -> String {
    "Taskchat".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Override for the task file location. Defaults to the platform data
    /// directory when unset.
    #[serde(default)]
    pub data_file: Option<String>,

    /// Name used in the greeting banner.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            bot_name: default_bot_name(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let Ok(path) = AppPaths::get_config_file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Could not parse {:?}, using defaults: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    /// The task file this configuration points at.
    pub fn task_file_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => AppPaths::get_task_file_path(),
        }
    }
}
