//! Interactive input source.

use crate::domain::{AppError, ProductInput};
use crate::ports::{InputSource, LinePrompter};

/// Collects a product input through a sequence of line prompts.
///
/// Lists are entered one item per line and end at the first blank answer.
pub struct InteractiveInputSource<P: LinePrompter> {
    prompter: P,
}

impl<P: LinePrompter> InteractiveInputSource<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        Ok(self.prompter.prompt_line(prompt)?.trim().to_string())
    }

    fn ask_list(&mut self, heading: &str, item_label: &str) -> Result<Vec<String>, AppError> {
        self.prompter.notice(&format!("\n{heading} (enter one per line, empty line to finish):"))?;
        let mut items = Vec::new();
        loop {
            let item = self.ask(&format!("  {} {}", item_label, items.len() + 1))?;
            if item.is_empty() {
                return Ok(items);
            }
            items.push(item);
        }
    }
}

/// Digits-only answers become a week count; anything else means "no timeline".
fn parse_weeks(answer: &str) -> Option<u32> {
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    answer.parse().ok()
}

impl<P: LinePrompter> InputSource for InteractiveInputSource<P> {
    fn read_input(&mut self) -> Result<ProductInput, AppError> {
        self.prompter.notice("=== Interactive Mode ===\n")?;

        let product_name = self.ask("Product Name")?;
        let product_description = self.ask("Product Description (brief)")?;
        let target_audience = self.ask("Target Audience")?;
        let problem_statement = self.ask("Problem Statement")?;
        let proposed_solution = self.ask("Proposed Solution")?;

        let key_features = self.ask_list("Key Features", "Feature")?;
        let success_metrics = self.ask_list("Success Metrics", "Metric")?;
        let technical_requirements = self.ask_list("Technical Requirements", "Requirement")?;

        self.prompter.notice("")?;
        let timeline_weeks =
            parse_weeks(&self.ask("Estimated Timeline (in weeks, or press Enter to skip)")?);
        let budget = Some(self.ask("Budget (or press Enter to skip)")?).filter(|b| !b.is_empty());

        let competitors = self.ask_list("Competitors", "Competitor")?;
        let dependencies = self.ask_list("Dependencies", "Dependency")?;
        let risks = self.ask_list("Risks", "Risk")?;

        Ok(ProductInput {
            product_name,
            product_description,
            target_audience,
            problem_statement,
            proposed_solution,
            key_features,
            success_metrics,
            technical_requirements,
            dependencies,
            risks,
            timeline_weeks,
            budget,
            competitors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompter;

    fn answers(extra: &[&str]) -> Vec<String> {
        let mut all = vec!["  Acme  ", "Desc", "Teams", "Problem", "Solution"];
        all.extend_from_slice(extra);
        all.into_iter().map(String::from).collect()
    }

    #[test]
    fn collects_every_field_in_order() {
        let script = answers(&[
            "Search", "Sync", "", // features
            "DAU", "", // metrics
            "Rust", "", // technical requirements
            "12", // timeline
            "$5k", // budget
            "Rival", "", // competitors
            "Cloud", "", // dependencies
            "Scope creep", "", // risks
        ]);
        let mut source = InteractiveInputSource::new(ScriptedPrompter::new(script));

        let input = source.read_input().unwrap();

        assert_eq!(input.product_name, "Acme");
        assert_eq!(input.key_features, vec!["Search", "Sync"]);
        assert_eq!(input.success_metrics, vec!["DAU"]);
        assert_eq!(input.technical_requirements, vec!["Rust"]);
        assert_eq!(input.timeline_weeks, Some(12));
        assert_eq!(input.budget.as_deref(), Some("$5k"));
        assert_eq!(input.competitors, vec!["Rival"]);
        assert_eq!(input.dependencies, vec!["Cloud"]);
        assert_eq!(input.risks, vec!["Scope creep"]);

        let prompter = source.into_prompter();
        assert!(prompter.prompts.contains(&"  Feature 3".to_string()));
        assert!(prompter.notices.iter().any(|n| n.contains("Risks (enter one per line")));
    }

    #[test]
    fn blank_optional_answers_are_absent() {
        let script = answers(&["", "", "", "soon", "", "", "", ""]);
        let input = InteractiveInputSource::new(ScriptedPrompter::new(script)).read_input().unwrap();

        assert!(input.key_features.is_empty());
        assert_eq!(input.timeline_weeks, None);
        assert_eq!(input.budget, None);
        assert!(input.risks.is_empty());
    }

    #[test]
    fn exhausted_script_cancels() {
        let script = answers(&[]);
        let result = InteractiveInputSource::new(ScriptedPrompter::new(script)).read_input();
        assert!(matches!(result, Err(AppError::Cancelled)));
    }

    #[test]
    fn weeks_require_digits() {
        assert_eq!(parse_weeks("8"), Some(8));
        assert_eq!(parse_weeks("-8"), None);
        assert_eq!(parse_weeks("8 weeks"), None);
        assert_eq!(parse_weeks(""), None);
    }
}
