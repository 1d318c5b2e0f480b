use std::path::PathBuf;

use crate::domain::AppError;

/// Port for persisting a generated document.
pub trait DocumentSink {
    /// Store `content` under `file_name`, returning where it was written.
    fn write_document(&mut self, file_name: &str, content: &str) -> Result<PathBuf, AppError>;
}
