//! Configuration handling for pyinit.
//! An optional defaults file supplies author details, the preferred license
//! and the executables used for the optional steps.

use crate::constants::{CONFIG_FILES, DEFAULT_GIT, DEFAULT_PYTHON};
use crate::error::{Error, Result};
use crate::project::License;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Metadata defaults applied when the matching flag is not given.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub description: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub license: Option<License>,
}

/// Executables used by the optional steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tools {
    pub python: String,
    pub git: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            git: DEFAULT_GIT.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: Defaults,
    pub tools: Tools,
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the expected schema
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the configuration.
///
/// With an explicit `path` that file must exist. Otherwise the first of
/// `pyinit.json`, `pyinit.yml`, `pyinit.yaml` found in `search_dir` is used,
/// and built-in defaults apply when none exists.
///
/// # Errors
/// * `Error::ConfigError` if the explicit file is missing or any file fails to parse
pub fn get_config<P: AsRef<Path>>(path: Option<&Path>, search_dir: P) -> Result<Config> {
    if let Some(path) = path {
        if !path.is_file() {
            return Err(Error::ConfigError(format!(
                "configuration file '{}' does not exist",
                path.display()
            )));
        }
        debug!("Loading configuration from {}", path.display());
        return parse_config(&std::fs::read_to_string(path)?);
    }

    for file in CONFIG_FILES {
        let config_path = search_dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return parse_config(&std::fs::read_to_string(&config_path)?);
        }
    }

    debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
    Ok(Config::default())
}
