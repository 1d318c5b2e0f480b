use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::LinePrompter;

/// Terminal prompter backed by `dialoguer`.
///
/// Notices go to stderr next to the prompts, leaving stdout for the document.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl LinePrompter for DialoguerPrompter {
    fn notice(&mut self, message: &str) -> Result<(), AppError> {
        eprintln!("{message}");
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, AppError> {
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Cancelled)
            }
            Err(err) => Err(AppError::Prompt {
                what: prompt.trim().to_string(),
                details: err.to_string(),
            }),
        }
    }
}
