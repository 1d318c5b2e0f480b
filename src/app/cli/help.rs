//! Long help text describing the accepted input files.

use crate::domain::ProductInput;

pub(super) const INPUT_FORMAT_HELP: &str = r#"Usage patterns:
    prdgen                    # Interactive mode
    prdgen input.json         # Load from JSON file (.yaml/.yml and .toml also accepted)
    prdgen --help             # Show this help message

JSON Input Format:
{
    "product_name": "Product Name",
    "product_description": "Brief description",
    "target_audience": "Target users",
    "problem_statement": "Problem to solve",
    "proposed_solution": "Solution approach",
    "key_features": ["Feature 1", "Feature 2"],
    "success_metrics": ["Metric 1", "Metric 2"],
    "technical_requirements": ["Req 1", "Req 2"],
    "dependencies": ["Dep 1"],
    "risks": ["Risk 1"],
    "timeline_weeks": 12,
    "budget": "$50,000",
    "competitors": ["Competitor 1"]
}"#;

/// Field names, one per line, required fields first.
pub(super) fn field_list() -> String {
    ProductInput::FIELD_NAMES.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_example_mentions_every_field() {
        for field in ProductInput::FIELD_NAMES {
            assert!(INPUT_FORMAT_HELP.contains(&format!("\"{field}\"")), "{field} missing");
        }
    }

    #[test]
    fn help_example_is_valid_input() {
        let start = INPUT_FORMAT_HELP.find('{').unwrap();
        let input: ProductInput = serde_json::from_str(&INPUT_FORMAT_HELP[start..]).unwrap();
        assert_eq!(input.timeline_weeks, Some(12));
    }

    #[test]
    fn field_list_has_one_line_per_field() {
        assert_eq!(field_list().lines().count(), 13);
    }
}
