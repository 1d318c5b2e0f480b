mod memory_document_sink;
mod scripted_prompter;

pub use memory_document_sink::MemoryDocumentSink;
pub use scripted_prompter::ScriptedPrompter;
