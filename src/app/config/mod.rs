//! Filesystem- and environment-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_config;

pub use load_config::{ConfigLocation, load_config, resolve_config_location};
