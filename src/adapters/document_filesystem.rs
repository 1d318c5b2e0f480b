use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::DocumentSink;

/// Writes documents into a directory on disk, creating it when missing.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentSink {
    dir: PathBuf,
}

impl FilesystemDocumentSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSink for FilesystemDocumentSink {
    fn write_document(&mut self, file_name: &str, content: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, content)?;
        log::info!("wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}
