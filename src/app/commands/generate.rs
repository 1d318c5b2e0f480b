//! Generate command: product input → PRD → file.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{
    AppError, OutputConfig, PrdAssembler, Preview, ProductInput, render_file_name,
};
use crate::ports::DocumentSink;

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Date embedded in the document and the file name.
    pub date: NaiveDate,
    /// `minijinja` template for the output file name.
    pub file_name_template: String,
    /// Lines kept for the console preview; 0 disables it.
    pub preview_lines: usize,
}

impl GenerateOptions {
    pub fn from_config(output: &OutputConfig, date: NaiveDate) -> Self {
        Self {
            date,
            file_name_template: output.file_name.clone(),
            preview_lines: output.preview_lines,
        }
    }
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub path: PathBuf,
    pub content: String,
    pub preview: Option<Preview>,
}

/// Assemble the document for `input` and hand it to the sink.
///
/// The file name is rendered first so a bad template writes nothing.
pub fn execute<S: DocumentSink>(
    sink: &mut S,
    input: &ProductInput,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let file_name = render_file_name(&options.file_name_template, input, options.date)?;
    log::debug!("generating PRD for '{}' as {}", input.product_name, file_name);

    let content = PrdAssembler::new(options.date).generate(input);
    let path = sink.write_document(&file_name, &content)?;

    let preview =
        (options.preview_lines > 0).then(|| Preview::of(&content, options.preview_lines));

    Ok(GenerateOutcome { path, content, preview })
}
