use crate::domain::AppError;

/// Port for asking the user for one line of free text.
pub trait LinePrompter {
    /// Print an optional notice line before the next prompts.
    fn notice(&mut self, message: &str) -> Result<(), AppError>;

    /// Ask for one line. An empty answer is allowed.
    fn prompt_line(&mut self, prompt: &str) -> Result<String, AppError>;
}

impl<P: LinePrompter + ?Sized> LinePrompter for Box<P> {
    fn notice(&mut self, message: &str) -> Result<(), AppError> {
        (**self).notice(message)
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, AppError> {
        (**self).prompt_line(prompt)
    }
}
