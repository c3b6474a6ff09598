//! Configuration file for the `hourglass` binary.
//!
//! The file is JSON. Every key is optional; anything missing falls back to
//! the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use hg_options::OptionParameters;
use hg_types::{config_error, HgResult};
use hg_worktime::WorkProfile;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "HOURGLASS_CONFIG";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HourglassConfig {
    /// Inputs used by `price` when a flag is not given.
    pub pricing: OptionParameters,
    /// Salary profile used by `cost` when no salary flags are given.
    pub profile: Option<WorkProfile>,
}

impl HourglassConfig {
    /// Load from `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> HgResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                info!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> HgResult<Self> {
        if !path.exists() {
            return Err(config_error!(
                "configuration file not found: {}",
                path.display()
            ));
        }
        let text = std::fs::read_to_string(path)?;
        let config: HourglassConfig = serde_json::from_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
