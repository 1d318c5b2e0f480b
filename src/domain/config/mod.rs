pub mod model;
pub mod parse;
pub mod paths;

pub use model::{OutputConfig, PrdgenConfig};
pub use parse::parse_config_content;
