//! API facade for the application.
//!
//! Glues configuration, adapters and command execution together so the CLI
//! and library callers share one entry point per use case.

use std::io::{self, IsTerminal};
use std::path::Path;

use chrono::{Local, NaiveDate};
use console::Term;

use crate::adapters::{
    DialoguerPrompter, FileInputSource, FilesystemDocumentSink, InteractiveInputSource,
    StdinPrompter,
};
use crate::app::commands::generate;
use crate::app::config::{load_config as load_config_from, resolve_config_location};
use crate::domain::PrdAssembler;
use crate::domain::config::paths::CONFIG_ENV_VAR;
use crate::ports::{InputSource, LinePrompter};

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::domain::{AppError, OutputConfig, PrdgenConfig, ProductInput};

/// Load configuration, honoring an explicit path, then `PRDGEN_CONFIG`, then `./prdgen.toml`.
pub fn load_config(explicit: Option<&Path>) -> Result<PrdgenConfig, AppError> {
    let cwd = std::env::current_dir()?;
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    let location = resolve_config_location(explicit, env_value.as_deref(), &cwd);
    load_config_from(&location)
}

/// Local calendar day used to date documents.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Read a product input from `input_path`, or prompt for one when no path is given.
pub fn read_input(input_path: Option<&Path>) -> Result<ProductInput, AppError> {
    match input_path {
        Some(path) => FileInputSource::new(path).read_input(),
        None => InteractiveInputSource::new(interactive_prompter()).read_input(),
    }
}

/// `dialoguer` prompts on a terminal, plain line reads when stdin is piped.
fn interactive_prompter() -> Box<dyn LinePrompter> {
    if Term::stderr().is_term() && io::stdin().is_terminal() {
        Box::new(DialoguerPrompter)
    } else {
        log::debug!("no terminal attached, reading answers line by line from stdin");
        Box::new(StdinPrompter::new(io::stdin().lock(), io::stderr()))
    }
}

/// Generate a PRD for `input` and write it per `output`.
pub fn generate_document(
    input: &ProductInput,
    output: &OutputConfig,
) -> Result<GenerateOutcome, AppError> {
    let options = GenerateOptions::from_config(output, today());
    let mut sink = FilesystemDocumentSink::new(output.dir.clone());
    generate::execute(&mut sink, input, &options)
}

/// Generate a PRD dated today without writing it anywhere.
pub fn render_document(input: &ProductInput) -> String {
    PrdAssembler::new(today()).generate(input)
}
