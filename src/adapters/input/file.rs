//! Structured-file input source.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ProductInput};
use crate::ports::InputSource;

/// Serialization format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Toml,
}

impl InputFormat {
    /// Pick the format from the file extension; anything unrecognized is JSON.
    pub fn from_path(path: &Path) -> Self {
        let extension =
            path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            Some("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputFormat::Json => "JSON",
            InputFormat::Yaml => "YAML",
            InputFormat::Toml => "TOML",
        }
    }

    pub fn parse(&self, content: &str) -> Result<ProductInput, String> {
        match self {
            InputFormat::Json => serde_json::from_str(content).map_err(|err| err.to_string()),
            InputFormat::Yaml => serde_yaml::from_str(content).map_err(|err| err.to_string()),
            InputFormat::Toml => toml::from_str(content).map_err(|err| err.to_string()),
        }
    }
}

/// Reads a product input from a JSON, YAML, or TOML file.
#[derive(Debug, Clone)]
pub struct FileInputSource {
    path: PathBuf,
}

impl FileInputSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn format(&self) -> InputFormat {
        InputFormat::from_path(&self.path)
    }
}

impl InputSource for FileInputSource {
    fn read_input(&mut self) -> Result<ProductInput, AppError> {
        let display = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::InputNotFound(display.clone()),
            _ => AppError::Io(err),
        })?;

        let format = self.format();
        log::debug!("parsing {} as {}", display, format.label());
        format.parse(&content).map_err(|details| AppError::InvalidInput {
            path: display,
            syntax: format.label(),
            details,
        })
    }
}
