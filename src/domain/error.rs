use std::io;

use thiserror::Error;

/// Library-wide error type for prdgen operations.
///
/// Document assembly itself never fails; every variant here comes from
/// acquiring input, loading configuration, or writing the result.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input file does not exist.
    #[error("File '{0}' not found.")]
    InputNotFound(String),

    /// Input file exists but could not be parsed into a product input.
    #[error("Invalid {syntax} in file '{path}': {details}")]
    InvalidInput { path: String, syntax: &'static str, details: String },

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Config file parsed but holds unusable values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Output file name template failed to render.
    #[error("Failed to render file name template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Interactive prompt failed.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// User aborted the interactive session.
    #[error("Cancelled")]
    Cancelled,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
