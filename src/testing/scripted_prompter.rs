use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::LinePrompter;

/// Prompter replaying canned answers; running out behaves like Ctrl-C.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }
}

impl LinePrompter for ScriptedPrompter {
    fn notice(&mut self, message: &str) -> Result<(), AppError> {
        self.notices.push(message.to_string());
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, AppError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(AppError::Cancelled)
    }
}
