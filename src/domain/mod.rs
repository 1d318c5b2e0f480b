pub mod config;
pub mod error;
pub mod output;
pub mod prd;
pub mod product_input;

pub use config::{OutputConfig, PrdgenConfig};
pub use error::AppError;
pub use output::{Preview, render_file_name};
pub use prd::{PrdAssembler, SectionKind};
pub use product_input::{ProductInput, UserStory};
