//! PRD document assembly.

mod assembler;
pub mod sections;
pub mod timeline;

pub use assembler::{PrdAssembler, SECTION_SEPARATOR, SectionKind, generate};
pub use timeline::{PhasePlan, WeekRange};
