//! `prdgen.toml` discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{self, PrdgenConfig};
use crate::domain::AppError;

/// Where the configuration should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Requested by flag or environment; must exist.
    Explicit(PathBuf),
    /// Conventional location in the working directory; optional.
    Default(PathBuf),
}

/// Pick the config path: flag beats environment beats `<cwd>/prdgen.toml`.
pub fn resolve_config_location(
    flag: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> ConfigLocation {
    if let Some(path) = flag {
        return ConfigLocation::Explicit(path.to_path_buf());
    }
    match env_value.filter(|value| !value.trim().is_empty()) {
        Some(value) => ConfigLocation::Explicit(PathBuf::from(value)),
        None => ConfigLocation::Default(config::paths::config(cwd)),
    }
}

/// Load and validate configuration from `location`.
pub fn load_config(location: &ConfigLocation) -> Result<PrdgenConfig, AppError> {
    let path = match location {
        ConfigLocation::Explicit(path) => {
            if !path.exists() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path
        }
        ConfigLocation::Default(path) => {
            if !path.exists() {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(PrdgenConfig::default());
            }
            path
        }
    };

    log::debug!("loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    config::parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn flag_takes_precedence_over_env() {
        let location =
            resolve_config_location(Some(Path::new("a.toml")), Some("b.toml"), Path::new("/w"));
        assert_eq!(location, ConfigLocation::Explicit(PathBuf::from("a.toml")));
    }

    #[test]
    fn env_used_without_flag() {
        let location = resolve_config_location(None, Some("b.toml"), Path::new("/w"));
        assert_eq!(location, ConfigLocation::Explicit(PathBuf::from("b.toml")));
    }

    #[test]
    fn falls_back_to_working_directory() {
        let location = resolve_config_location(None, Some("  "), Path::new("/w"));
        assert_eq!(location, ConfigLocation::Default(PathBuf::from("/w/prdgen.toml")));
    }

    #[test]
    fn missing_default_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&ConfigLocation::Default(dir.path().join("prdgen.toml"))).unwrap();
        assert_eq!(config, PrdgenConfig::default());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(&ConfigLocation::Explicit(dir.path().join("nope.toml")));
        assert!(matches!(result, Err(AppError::ConfigNotFound(_))));
    }

    #[test]
    fn reads_existing_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prdgen.toml");
        fs::write(&path, "[output]\npreview_lines = 0\n").unwrap();

        let config = load_config(&ConfigLocation::Default(path)).unwrap();
        assert_eq!(config.output.preview_lines, 0);
    }
}
