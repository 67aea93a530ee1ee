use std::path::PathBuf;

/// Errors raised at the boundary between the host and the picker core.
///
/// Grid generation, selection and navigation never fail; these variants only
/// cover parsing host-supplied dates and loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum DatePickerError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Failed to read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("Invalid JSON config: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DatePickerError>;
