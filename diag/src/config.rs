use crate::error::ConfigError;
use crate::logger::Severity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CATEGORY_ENV: &str = "AULOG_CATEGORY";
pub const LOG_FILE_ENV: &str = "AULOG_LOG_FILE";
pub const LEVEL_ENV: &str = "AULOG_LEVEL";
pub const VERBOSE_ENV: &str = "AULOG_VERBOSE";

pub const DEFAULT_CATEGORY: &str = "au.plugin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub category: String,
    pub log_file: Option<PathBuf>,
    pub level: Severity,
    pub mirror_stdout: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            log_file: None,
            level: Severity::Info,
            mirror_stdout: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(category) = lookup(CATEGORY_ENV).filter(|v| !v.trim().is_empty()) {
            self.category = category.trim().to_string();
        }
        if let Some(path) = lookup(LOG_FILE_ENV) {
            // empty value disables the file
            self.log_file = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if let Some(level) = lookup(LEVEL_ENV) {
            self.level = level.parse()?;
        }
        if lookup(VERBOSE_ENV).as_deref().is_some_and(flag_value) {
            self.level = Severity::Debug;
        }
        Ok(self)
    }
}

fn flag_value(v: &str) -> bool {
    let s = v.trim().to_ascii_lowercase();
    s == "1" || s == "true" || s == "yes" || s == "on"
}
