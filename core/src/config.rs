//! # Picker Configuration
//!
//! Loads `DatePickerConfig` from YAML or JSON. Every key is optional and
//! falls back to its default.
//!
//! ## YAML Format
//!
//! ```yaml
//! multiple: false
//! label: "Select a date"
//! align: left        # or right
//! show_reset: true
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use shared::DatePickerConfig;

use crate::error::{DatePickerError, Result};

pub fn from_yaml_str(yaml: &str) -> Result<DatePickerConfig> {
    // an empty document is a valid "all defaults" config
    if yaml.trim().is_empty() {
        return Ok(DatePickerConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn from_json_str(json: &str) -> Result<DatePickerConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Load a YAML config file
pub fn load(path: impl AsRef<Path>) -> Result<DatePickerConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|source| DatePickerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_yaml_str(&yaml)?;
    debug!("Loaded picker config from {:?}: {:?}", path, config);
    Ok(config)
}
