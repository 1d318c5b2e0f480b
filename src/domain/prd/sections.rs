//! Section builders.
//!
//! Every builder is a pure function of the product input and the document
//! date, producing one block of Markdown without a trailing blank line.
//! Optional lists fall back to fixed placeholder text when empty.

use chrono::NaiveDate;

use crate::domain::product_input::{ProductInput, UserStory};

use super::timeline::PhasePlan;

/// Signature shared by all section builders.
pub type SectionBuilder = fn(&ProductInput, NaiveDate) -> String;

/// Date format embedded in the document body.
pub const DOCUMENT_DATE_FORMAT: &str = "%Y-%m-%d";

const OBJECTIVES_FALLBACK: &[&str] = &["To be defined based on stakeholder input"];

const FALLBACK_STORY: &str =
    "1. As a **user**, I want to **use the product**, so that **I can solve my problem**.";

const ACCEPTANCE_CRITERIA: &[&str] = &[
    "Feature is implemented and functional",
    "User can access and use the feature intuitively",
    "Feature meets performance and quality standards",
];

const SYSTEM_REQUIREMENTS_FALLBACK: &[&str] = &[
    "Scalable architecture to support growth",
    "Secure authentication and authorization",
    "Responsive design for multiple device types",
    "API-first design for flexibility",
    "Automated testing and CI/CD pipeline",
];

const PERFORMANCE_REQUIREMENTS: &[&str] = &[
    "Page load time: < 2 seconds",
    "API response time: < 200ms for 95th percentile",
    "System uptime: 99.9% availability",
    "Support for concurrent users as defined by success metrics",
];

const SECURITY_REQUIREMENTS: &[&str] = &[
    "Data encryption at rest and in transit",
    "Regular security audits and penetration testing",
    "Compliance with relevant data protection regulations",
    "Secure authentication mechanisms",
];

const KPI_FALLBACK: &[&str] = &[
    "User adoption rate",
    "User engagement metrics",
    "User satisfaction (NPS score)",
    "Feature usage analytics",
    "Performance metrics (load time, uptime)",
];

const MEASUREMENT_STRATEGY: &[&str] = &[
    "Implement analytics tracking from day one",
    "Regular review cycles (weekly/monthly)",
    "A/B testing for feature optimization",
    "User feedback collection and analysis",
];

const COMPETITORS_FALLBACK: &[&str] = &["To be researched and documented"];

/// Phase titles and their standing activities.
const PHASES: [(&str, [&str; 3]); 4] = [
    (
        "Planning and Design",
        ["Requirements finalization", "Technical architecture design", "UI/UX design"],
    ),
    ("Development", ["Core feature implementation", "Integration work", "Initial testing"]),
    (
        "Testing and Refinement",
        ["Comprehensive testing", "Bug fixes", "Performance optimization"],
    ),
    ("Launch Preparation", ["Final QA", "Documentation", "Deployment and launch"]),
];

const DEPENDENCIES_FALLBACK: &[&str] = &[
    "Third-party services and APIs",
    "Infrastructure and hosting",
    "Team resources and availability",
];

/// Fixed mitigation attached to every user-supplied risk.
pub const UNDEFINED_MITIGATION: &str = "To be defined";

const RISKS_FALLBACK: [(&str, &str); 3] = [
    ("Technical complexity", "Thorough planning and phased approach"),
    ("Resource constraints", "Prioritization and scope management"),
    ("Market changes", "Agile development and regular market validation"),
];

const GLOSSARY: [(&str, &str); 4] = [
    ("PRD", "Product Requirements Document"),
    ("MVP", "Minimum Viable Product"),
    ("KPI", "Key Performance Indicator"),
    ("API", "Application Programming Interface"),
];

const REFERENCES: &[&str] = &[
    "Product documentation (to be created)",
    "Technical specifications (to be created)",
    "User research data (to be gathered)",
];

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(|item| format!("- {}", item.as_ref())).collect::<Vec<_>>().join("\n")
}

fn bullets_or<S: AsRef<str>>(items: &[S], fallback: &[&str]) -> String {
    if items.is_empty() { bullets(fallback) } else { bullets(items) }
}

fn risk_entry(risk: &str, mitigation: &str) -> String {
    format!("- **Risk:** {risk}\n  - **Mitigation:** {mitigation}")
}

pub fn header(input: &ProductInput, date: NaiveDate) -> String {
    format!(
        "# Product Requirements Document\n\
         ## {}\n\
         \n\
         **Document Version:** 1.0\n\
         **Date:** {}\n\
         **Status:** Draft\n\
         \n\
         ---",
        input.product_name,
        date.format(DOCUMENT_DATE_FORMAT)
    )
}

pub fn executive_summary(input: &ProductInput, _date: NaiveDate) -> String {
    format!(
        "## 1. Executive Summary\n\
         \n\
         {}\n\
         \n\
         This document outlines the product requirements for {}, defining the scope, \
         features, and technical specifications needed for successful development and launch.",
        input.product_description, input.product_name
    )
}

pub fn product_overview(input: &ProductInput, _date: NaiveDate) -> String {
    format!(
        "## 2. Product Overview\n\
         \n\
         ### 2.1 Problem Statement\n\
         {problem}\n\
         \n\
         ### 2.2 Proposed Solution\n\
         {solution}\n\
         \n\
         ### 2.3 Value Proposition\n\
         {name} addresses the identified problem by providing {solution_lower}. \
         This solution will benefit {audience} by delivering tangible value through the key \
         features outlined in this document.",
        problem = input.problem_statement,
        solution = input.proposed_solution,
        name = input.product_name,
        solution_lower = input.proposed_solution.to_lowercase(),
        audience = input.target_audience,
    )
}

pub fn goals_and_objectives(input: &ProductInput, _date: NaiveDate) -> String {
    let metrics = &input.success_metrics[..input.success_metrics.len().min(3)];
    format!(
        "## 3. Goals and Objectives\n\
         \n\
         ### 3.1 Primary Goals\n\
         - Deliver a solution that effectively addresses: {}\n\
         - Provide value to {}\n\
         - Achieve product-market fit within the target segment\n\
         \n\
         ### 3.2 Key Objectives\n\
         {}",
        input.problem_statement.to_lowercase(),
        input.target_audience,
        bullets_or(metrics, OBJECTIVES_FALLBACK)
    )
}

pub fn target_audience(input: &ProductInput, _date: NaiveDate) -> String {
    format!(
        "## 4. Target Audience\n\
         \n\
         ### 4.1 Primary Users\n\
         {audience}\n\
         \n\
         ### 4.2 User Personas\n\
         The following personas represent our primary user segments:\n\
         \n\
         **Persona 1: Primary User**\n\
         - **Demographics:** {audience}\n\
         - **Goals:** Solve the problem: {problem}\n\
         - **Pain Points:** Current solutions are inadequate or non-existent\n\
         - **Technical Proficiency:** Varies (solution should accommodate all levels)",
        audience = input.target_audience,
        problem = input.problem_statement.to_lowercase(),
    )
}

pub fn user_stories(input: &ProductInput, _date: NaiveDate) -> String {
    let stories = UserStory::derive_all(&input.key_features);
    let body = if stories.is_empty() {
        FALLBACK_STORY.to_string()
    } else {
        stories
            .iter()
            .enumerate()
            .map(|(i, story)| format!("{}. {}", i + 1, story.format()))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!("## 5. User Stories\n\n{body}")
}

pub fn features_and_requirements(input: &ProductInput, _date: NaiveDate) -> String {
    let body = if input.key_features.is_empty() {
        "\n### 5.1 Core Features\nTo be defined based on product requirements.".to_string()
    } else {
        input
            .key_features
            .iter()
            .enumerate()
            .map(|(i, feature)| {
                format!(
                    "\n### 5.{} {feature}\n\
                     \n\
                     **Priority:** High\n\
                     **Description:** {feature} functionality to support user needs.\n\
                     **Acceptance Criteria:**\n\
                     {}\n",
                    i + 1,
                    bullets(ACCEPTANCE_CRITERIA)
                )
            })
            .collect()
    };
    format!(
        "## 5. Features and Requirements\n\
         \n\
         The following features are required for the MVP (Minimum Viable Product) release:\n\
         {body}"
    )
}

pub fn technical_requirements(input: &ProductInput, _date: NaiveDate) -> String {
    format!(
        "## 6. Technical Requirements\n\
         \n\
         ### 6.1 System Requirements\n\
         {}\n\
         \n\
         ### 6.2 Performance Requirements\n\
         {}\n\
         \n\
         ### 6.3 Security Requirements\n\
         {}",
        bullets_or(&input.technical_requirements, SYSTEM_REQUIREMENTS_FALLBACK),
        bullets(PERFORMANCE_REQUIREMENTS),
        bullets(SECURITY_REQUIREMENTS)
    )
}

pub fn success_metrics(input: &ProductInput, _date: NaiveDate) -> String {
    format!(
        "## 7. Success Metrics\n\
         \n\
         ### 7.1 Key Performance Indicators (KPIs)\n\
         {}\n\
         \n\
         ### 7.2 Measurement Strategy\n\
         {}",
        bullets_or(&input.success_metrics, KPI_FALLBACK),
        bullets(MEASUREMENT_STRATEGY)
    )
}

pub fn competitive_analysis(input: &ProductInput, _date: NaiveDate) -> String {
    format!(
        "## 8. Competitive Analysis\n\
         \n\
         ### 8.1 Key Competitors\n\
         {}\n\
         \n\
         ### 8.2 Competitive Advantages\n\
         - Unique value proposition: {}\n\
         - Focus on target audience needs: {}\n\
         - Differentiated feature set",
        bullets_or(&input.competitors, COMPETITORS_FALLBACK),
        input.proposed_solution,
        input.target_audience
    )
}

pub fn timeline(input: &ProductInput, _date: NaiveDate) -> String {
    let labels: Vec<String> = match input.timeline() {
        Some(weeks) => PhasePlan::split(weeks).ranges().iter().map(|r| r.to_string()).collect(),
        None => vec!["TBD".to_string(); PHASES.len()],
    };

    let phases = PHASES
        .iter()
        .zip(&labels)
        .enumerate()
        .map(|(i, ((title, activities), label))| {
            format!("**Phase {}: {title}** ({label})\n{}", i + 1, bullets(activities))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let budget = input
        .budget_text()
        .map(|budget| format!("\n\n### 9.2 Budget\n{budget}"))
        .unwrap_or_default();

    format!("## 9. Timeline and Milestones\n\n### 9.1 Project Timeline\n\n{phases}{budget}")
}

pub fn dependencies_and_risks(input: &ProductInput, _date: NaiveDate) -> String {
    let risks = if input.risks.is_empty() {
        RISKS_FALLBACK
            .iter()
            .map(|(risk, mitigation)| risk_entry(risk, mitigation))
            .collect::<Vec<_>>()
    } else {
        input.risks.iter().map(|risk| risk_entry(risk, UNDEFINED_MITIGATION)).collect()
    };

    format!(
        "## 10. Dependencies and Risks\n\
         \n\
         ### 10.1 Dependencies\n\
         {}\n\
         \n\
         ### 10.2 Risk Assessment\n\
         {}",
        bullets_or(&input.dependencies, DEPENDENCIES_FALLBACK),
        risks.join("\n")
    )
}

pub fn appendix(_input: &ProductInput, date: NaiveDate) -> String {
    let glossary = GLOSSARY
        .iter()
        .map(|(term, meaning)| format!("- **{term}:** {meaning}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "## 11. Appendix\n\
         \n\
         ### 11.1 Glossary\n\
         {glossary}\n\
         \n\
         ### 11.2 References\n\
         {references}\n\
         \n\
         ### 11.3 Document History\n\
         \n\
         | Version | Date | Author | Changes |\n\
         |---------|------|--------|---------|\n\
         | 1.0 | {date} | PRD Agent | Initial document creation |\n\
         \n\
         ---\n\
         \n\
         *This document was generated by PRD Agent - Automated Product Requirements Document Generator*",
        references = bullets(REFERENCES),
        date = date.format(DOCUMENT_DATE_FORMAT),
    )
}
