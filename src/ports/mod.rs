mod document_sink;
mod input_source;
mod line_prompter;

pub use document_sink::DocumentSink;
pub use input_source::InputSource;
pub use line_prompter::LinePrompter;
