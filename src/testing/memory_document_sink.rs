use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::DocumentSink;

/// Sink keeping written documents in memory.
#[derive(Debug, Default)]
pub struct MemoryDocumentSink {
    pub documents: Vec<(String, String)>,
}

impl DocumentSink for MemoryDocumentSink {
    fn write_document(&mut self, file_name: &str, content: &str) -> Result<PathBuf, AppError> {
        self.documents.push((file_name.to_string(), content.to_string()));
        Ok(PathBuf::from(file_name))
    }
}
