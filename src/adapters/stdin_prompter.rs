use std::io::{BufRead, Write};

use crate::domain::AppError;
use crate::ports::LinePrompter;

/// Line prompter for piped input: reads answers from `reader`, writes prompts to `out`.
///
/// End of input cancels the session, the same as Ctrl-C at a terminal.
pub struct StdinPrompter<R: BufRead, W: Write> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> StdinPrompter<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }
}

impl<R: BufRead, W: Write> LinePrompter for StdinPrompter<R, W> {
    fn notice(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|err| AppError::Prompt {
            what: prompt.trim().to_string(),
            details: err.to_string(),
        })?;
        if read == 0 {
            return Err(AppError::Cancelled);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_lines_and_strips_line_endings() {
        let mut out = Vec::new();
        let mut prompter = StdinPrompter::new(Cursor::new("Acme\r\n\nlast"), &mut out);

        assert_eq!(prompter.prompt_line("Product Name").unwrap(), "Acme");
        assert_eq!(prompter.prompt_line("  Feature 1").unwrap(), "");
        assert_eq!(prompter.prompt_line("  Feature 2").unwrap(), "last");
        prompter.notice("done").unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, "Product Name:   Feature 1:   Feature 2: done\n");
    }

    #[test]
    fn end_of_input_cancels() {
        let mut prompter = StdinPrompter::new(Cursor::new(""), Vec::new());
        assert!(matches!(prompter.prompt_line("Product Name"), Err(AppError::Cancelled)));
    }
}
