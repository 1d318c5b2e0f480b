//! Configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default output file name template.
pub const DEFAULT_FILE_NAME_TEMPLATE: &str =
    r#"PRD_{{ product_name | replace(" ", "_") }}_{{ date }}.md"#;

/// Default number of lines shown in the console preview.
pub const DEFAULT_PREVIEW_LINES: usize = 50;

/// Configuration loaded from `prdgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrdgenConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

impl PrdgenConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.output.validate()
    }
}

/// Where and how the generated document is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the document is written into.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// `minijinja` template for the file name. Sees `product_name` and `date` (YYYYMMDD).
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Lines shown in the console preview; 0 disables it.
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            file_name: default_file_name(),
            preview_lines: default_preview_lines(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.file_name.trim().is_empty() {
            return Err(AppError::config_error("output.file_name must not be empty"));
        }
        if self.dir.as_os_str().is_empty() {
            return Err(AppError::config_error("output.dir must not be empty"));
        }
        Ok(())
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME_TEMPLATE.to_string()
}

fn default_preview_lines() -> usize {
    DEFAULT_PREVIEW_LINES
}
