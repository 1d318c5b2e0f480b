//! Pure parse/validate for `prdgen.toml`.

use crate::domain::AppError;

use super::PrdgenConfig;

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PrdgenConfig, AppError> {
    let config: PrdgenConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::config::model::{DEFAULT_FILE_NAME_TEMPLATE, DEFAULT_PREVIEW_LINES};

    #[test]
    fn config_parses_from_toml() {
        let toml = r#"
[output]
dir = "docs/prd"
file_name = "{{ date }}-prd.md"
preview_lines = 10
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.output.dir, PathBuf::from("docs/prd"));
        assert_eq!(config.output.file_name, "{{ date }}-prd.md");
        assert_eq!(config.output.preview_lines, 10);
    }

    #[test]
    fn config_uses_defaults_for_missing_sections() {
        let config = parse_config_content("").unwrap();

        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.output.file_name, DEFAULT_FILE_NAME_TEMPLATE);
        assert_eq!(config.output.preview_lines, DEFAULT_PREVIEW_LINES);
    }

    #[test]
    fn config_validation_fails_on_empty_file_name() {
        let toml = r#"
[output]
file_name = "  "
"#;
        let result = parse_config_content(toml);
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let toml = r#"
[output]
format = "html"
"#;
        let result = parse_config_content(toml);
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }
}
