use chrono::{Local, NaiveDate};

use crate::domain::product_input::ProductInput;

use super::sections::{self, SectionBuilder};

/// Separator placed between consecutive sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// The blocks of a PRD, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    ExecutiveSummary,
    ProductOverview,
    GoalsAndObjectives,
    TargetAudience,
    UserStories,
    FeaturesAndRequirements,
    TechnicalRequirements,
    SuccessMetrics,
    CompetitiveAnalysis,
    Timeline,
    DependenciesAndRisks,
    Appendix,
}

impl SectionKind {
    /// Every section in the order it appears in the document.
    pub const ALL: [SectionKind; 13] = [
        SectionKind::Header,
        SectionKind::ExecutiveSummary,
        SectionKind::ProductOverview,
        SectionKind::GoalsAndObjectives,
        SectionKind::TargetAudience,
        SectionKind::UserStories,
        SectionKind::FeaturesAndRequirements,
        SectionKind::TechnicalRequirements,
        SectionKind::SuccessMetrics,
        SectionKind::CompetitiveAnalysis,
        SectionKind::Timeline,
        SectionKind::DependenciesAndRisks,
        SectionKind::Appendix,
    ];

    /// First line of the rendered section.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Header => "# Product Requirements Document",
            SectionKind::ExecutiveSummary => "## 1. Executive Summary",
            SectionKind::ProductOverview => "## 2. Product Overview",
            SectionKind::GoalsAndObjectives => "## 3. Goals and Objectives",
            SectionKind::TargetAudience => "## 4. Target Audience",
            SectionKind::UserStories => "## 5. User Stories",
            SectionKind::FeaturesAndRequirements => "## 5. Features and Requirements",
            SectionKind::TechnicalRequirements => "## 6. Technical Requirements",
            SectionKind::SuccessMetrics => "## 7. Success Metrics",
            SectionKind::CompetitiveAnalysis => "## 8. Competitive Analysis",
            SectionKind::Timeline => "## 9. Timeline and Milestones",
            SectionKind::DependenciesAndRisks => "## 10. Dependencies and Risks",
            SectionKind::Appendix => "## 11. Appendix",
        }
    }

    fn builder(&self) -> SectionBuilder {
        match self {
            SectionKind::Header => sections::header,
            SectionKind::ExecutiveSummary => sections::executive_summary,
            SectionKind::ProductOverview => sections::product_overview,
            SectionKind::GoalsAndObjectives => sections::goals_and_objectives,
            SectionKind::TargetAudience => sections::target_audience,
            SectionKind::UserStories => sections::user_stories,
            SectionKind::FeaturesAndRequirements => sections::features_and_requirements,
            SectionKind::TechnicalRequirements => sections::technical_requirements,
            SectionKind::SuccessMetrics => sections::success_metrics,
            SectionKind::CompetitiveAnalysis => sections::competitive_analysis,
            SectionKind::Timeline => sections::timeline,
            SectionKind::DependenciesAndRisks => sections::dependencies_and_risks,
            SectionKind::Appendix => sections::appendix,
        }
    }

    /// Render this section for the given input and date.
    pub fn render(&self, input: &ProductInput, date: NaiveDate) -> String {
        (self.builder())(input, date)
    }
}

/// Assembles a PRD from a product input for a fixed document date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrdAssembler {
    date: NaiveDate,
}

impl PrdAssembler {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Assembler dated with the local calendar day.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Render every section in document order.
    pub fn sections(&self, input: &ProductInput) -> Vec<(SectionKind, String)> {
        SectionKind::ALL.iter().map(|kind| (*kind, kind.render(input, self.date))).collect()
    }

    /// Render the complete document.
    pub fn generate(&self, input: &ProductInput) -> String {
        SectionKind::ALL
            .iter()
            .map(|kind| kind.render(input, self.date))
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR)
    }
}

/// Generate a PRD dated today.
pub fn generate(input: &ProductInput) -> String {
    PrdAssembler::today().generate(input)
}
