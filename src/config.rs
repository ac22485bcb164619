//! User configuration for gobake.
//! Defaults for the command-line flags can be kept in a `gobake.json`,
//! `gobake.yml` or `gobake.yaml` file in the working directory.

use crate::constants::{CONFIG_FILES, DEFAULT_GO_VERSION};
use crate::error::{Error, Result};
use crate::template::ProjectTemplate;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings loaded from a configuration file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Template used when `--template` is not given
    pub template: ProjectTemplate,
    /// Go version written to go.mod and the Dockerfile
    pub go_version: String,
    /// Prefix joined with the project name to form the Go module path,
    /// e.g. `github.com/acme`
    pub module_prefix: Option<String>,
    pub skip_git: bool,
    pub copy_env: bool,
    /// Extra values exposed to the templates
    pub variables: IndexMap<String, serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: ProjectTemplate::default(),
            go_version: DEFAULT_GO_VERSION.to_string(),
            module_prefix: None,
            skip_git: false,
            copy_env: true,
            variables: IndexMap::new(),
        }
    }
}

impl Config {
    /// Go module path for a project called `name`.
    pub fn module_path(&self, name: &str) -> String {
        match self.module_prefix.as_deref().map(|p| p.trim_end_matches('/')) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}/{name}"),
            _ => name.to_string(),
        }
    }
}

/// Finds the first existing configuration file in `dir`.
pub fn find_config<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES.iter().map(|file| dir.as_ref().join(file)).find(|path| path.is_file())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the configuration schema
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(json_err) => serde_yaml::from_str(content).map_err(|yaml_err| {
            Error::ConfigError(format!(
                "invalid configuration (as JSON: {json_err}; as YAML: {yaml_err})"
            ))
        }),
    }
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `search_dir` is searched for
/// the files in `CONFIG_FILES`; if none is found the defaults are used.
pub fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(Error::ConfigError(format!(
                "configuration file '{}' does not exist",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => match find_config(search_dir) {
            Some(path) => path,
            None => {
                debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
                return Ok(Config::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    parse_config(&content)
}
