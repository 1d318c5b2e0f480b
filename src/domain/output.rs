//! Output file naming and console preview.

use chrono::NaiveDate;
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, ProductInput};

/// Date format used in output file names.
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// Render the output file name from a `minijinja` template.
///
/// The template sees `product_name` and `date` (formatted as `YYYYMMDD`).
pub fn render_file_name(
    template: &str,
    input: &ProductInput,
    date: NaiveDate,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let rendered = env
        .render_str(
            template,
            context! {
                product_name => input.product_name.as_str(),
                date => date.format(FILE_DATE_FORMAT).to_string(),
            },
        )
        .map_err(|err| AppError::TemplateRender {
            template: template.to_string(),
            reason: err.to_string(),
        })?;

    let name = rendered.trim();
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(AppError::TemplateRender {
            template: template.to_string(),
            reason: format!("'{name}' is not a usable file name"),
        });
    }
    Ok(name.to_string())
}

/// Leading lines of a document plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub lines: Vec<String>,
    pub remaining: usize,
}

impl Preview {
    pub fn of(content: &str, max_lines: usize) -> Self {
        let all: Vec<&str> = content.split('\n').collect();
        let shown = all.len().min(max_lines);
        Self {
            lines: all[..shown].iter().map(|line| line.to_string()).collect(),
            remaining: all.len() - shown,
        }
    }

    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.remaining > 0 {
            text.push_str(&format!("\n\n... ({} more lines)", self.remaining));
        }
        text
    }
}
