pub mod dialoguer_prompter;
pub mod document_filesystem;
pub mod input;
pub mod stdin_prompter;

pub use dialoguer_prompter::DialoguerPrompter;
pub use document_filesystem::FilesystemDocumentSink;
pub use input::{FileInputSource, InputFormat, InteractiveInputSource};
pub use stdin_prompter::StdinPrompter;
