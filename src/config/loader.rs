use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::LapwatchError;

const CONFIG_DIR: &str = "lapwatch";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config plus a user-facing warning when the file could not be used
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `path_override`, or from the default location
pub fn load_config(path_override: Option<&Path>) -> ConfigResult {
    match path_override {
        Some(path) => load_config_from_path(path),
        None => match config_path() {
            Some(path) => load_config_from_path(&path),
            None => ConfigResult::default(),
        },
    }
}

/// A missing file is not an error. Anything else that goes wrong yields the
/// defaults and a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return ConfigResult::default();
        }
        Err(e) => return with_warning(LapwatchError::Io(e)),
    };

    match parse_config(&contents, path) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => with_warning(e),
    }
}

/// Parse and validate a config file. Conflicting key bindings count as a
/// malformed file.
pub fn parse_config(content: &str, path: &Path) -> Result<Config, LapwatchError> {
    let config: Config = toml::from_str(content).map_err(|e| LapwatchError::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    config.keys.validate().map_err(|message| LapwatchError::Config {
        path: path.to_path_buf(),
        message,
    })?;

    Ok(config)
}

fn with_warning(error: LapwatchError) -> ConfigResult {
    let warning = format!("{}; using defaults", error);
    log::warn!("{}", warning);
    ConfigResult {
        config: Config::default(),
        warning: Some(warning),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
