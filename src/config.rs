//! The shared setup-configuration record
//!
//! The generated Python scripts pass state between runs through a flat
//! JSON file. This module models that record as an explicit struct with
//! load/persist boundaries, instead of the ambient global object the
//! generated scripts use. Field names and defaults here are the single
//! source of truth the generated configuration module mirrors.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the persisted record, next to the generated scripts.
pub const CONFIG_FILENAME: &str = "esp_thread_config.json";

fn default_home_dir() -> String {
    std::env::var("HOME").unwrap_or_else(|_| String::from("~"))
}

fn default_esp_idf_path() -> String {
    std::env::var("IDF_PATH").unwrap_or_else(|_| format!("{}/esp/esp-idf", default_home_dir()))
}

fn default_esp_thread_br_path() -> String {
    format!("{}/esp/esp-thread-br", default_home_dir())
}

/// Paths, ports, and network-dataset state shared by every setup step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    #[serde(default = "default_home_dir")]
    pub home_dir: String,
    #[serde(default = "default_esp_idf_path")]
    pub esp_idf_path: String,
    #[serde(default = "default_esp_thread_br_path")]
    pub esp_thread_br_path: String,
    #[serde(default)]
    pub border_router_port: Option<String>,
    #[serde(default)]
    pub cli_port: Option<String>,
    /// Opaque Thread network dataset, absent until created.
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub skip_repositories: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            home_dir: default_home_dir(),
            esp_idf_path: default_esp_idf_path(),
            esp_thread_br_path: default_esp_thread_br_path(),
            border_router_port: None,
            cli_port: None,
            dataset: None,
            skip_repositories: false,
        }
    }
}

/// How a load attempt ended. A missing file is a normal condition, never an
/// error; a malformed file is reported but still yields defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    NotFound,
    Invalid(String),
}

impl SetupConfig {
    /// Persist the record as pretty JSON, overwriting any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Restore a record from disk. Missing keys fall back to field
    /// defaults; a missing or unreadable file yields the full default
    /// record alongside the corresponding outcome.
    pub fn load<P: AsRef<Path>>(path: P) -> (SetupConfig, LoadOutcome) {
        let text = match fs::read_to_string(path.as_ref()) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return (SetupConfig::default(), LoadOutcome::NotFound);
            }
            Err(e) => return (SetupConfig::default(), LoadOutcome::Invalid(e.to_string())),
        };
        match serde_json::from_str(&text) {
            Ok(config) => (config, LoadOutcome::Loaded),
            Err(e) => (SetupConfig::default(), LoadOutcome::Invalid(e.to_string())),
        }
    }
}
