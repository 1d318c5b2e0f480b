//! Product input record and derived user stories.

use serde::{Deserialize, Serialize};

/// Structured description of a product idea.
///
/// The five scalar fields are required when loading from a file; every list
/// defaults to empty and the two trailing scalars default to absent. Empty
/// strings are accepted and rendered as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub product_name: String,
    pub product_description: String,
    pub target_audience: String,
    pub problem_statement: String,
    pub proposed_solution: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub success_metrics: Vec<String>,
    #[serde(default)]
    pub technical_requirements: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub timeline_weeks: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
}

impl ProductInput {
    /// Field names accepted in structured input files, in documentation order.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "product_name",
        "product_description",
        "target_audience",
        "problem_statement",
        "proposed_solution",
        "key_features",
        "success_metrics",
        "technical_requirements",
        "dependencies",
        "risks",
        "timeline_weeks",
        "budget",
        "competitors",
    ];

    /// Create an input with the required scalars set and everything else empty.
    pub fn new(
        product_name: impl Into<String>,
        product_description: impl Into<String>,
        target_audience: impl Into<String>,
        problem_statement: impl Into<String>,
        proposed_solution: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            product_description: product_description.into(),
            target_audience: target_audience.into(),
            problem_statement: problem_statement.into(),
            proposed_solution: proposed_solution.into(),
            ..Self::default()
        }
    }

    pub fn with_key_features<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_features = collect(items);
        self
    }

    pub fn with_success_metrics<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.success_metrics = collect(items);
        self
    }

    pub fn with_technical_requirements<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technical_requirements = collect(items);
        self
    }

    pub fn with_dependencies<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = collect(items);
        self
    }

    pub fn with_risks<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.risks = collect(items);
        self
    }

    pub fn with_competitors<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.competitors = collect(items);
        self
    }

    pub fn with_timeline_weeks(mut self, weeks: u32) -> Self {
        self.timeline_weeks = Some(weeks);
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    /// Budget text when present and non-empty.
    pub fn budget_text(&self) -> Option<&str> {
        self.budget.as_deref().filter(|budget| !budget.is_empty())
    }

    /// Timeline length when present and non-zero.
    pub fn timeline(&self) -> Option<u32> {
        self.timeline_weeks.filter(|weeks| *weeks > 0)
    }
}

fn collect<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// A single user story sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStory {
    pub persona: String,
    pub goal: String,
    pub benefit: String,
}

impl UserStory {
    /// Maximum number of stories derived from key features.
    pub const MAX_DERIVED: usize = 5;

    /// Story derived from one key feature.
    pub fn from_feature(feature: &str) -> Self {
        Self {
            persona: "User".to_string(),
            goal: format!("use {}", feature.to_lowercase()),
            benefit: "I can achieve my goals more effectively".to_string(),
        }
    }

    /// Stories for the first [`Self::MAX_DERIVED`] features; extras are dropped.
    pub fn derive_all(features: &[String]) -> Vec<UserStory> {
        features.iter().take(Self::MAX_DERIVED).map(|f| Self::from_feature(f)).collect()
    }

    pub fn format(&self) -> String {
        format!(
            "As a **{}**, I want to **{}**, so that **{}**.",
            self.persona, self.goal, self.benefit
        )
    }
}
