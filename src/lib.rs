//! prdgen: turn a structured product idea into a Product Requirements Document.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerateOutcome, generate_document, load_config, read_input, render_document,
};
pub use domain::prd::{PhasePlan, SectionKind, WeekRange, generate};
pub use domain::{
    AppError, OutputConfig, PrdAssembler, PrdgenConfig, Preview, ProductInput, UserStory,
};
