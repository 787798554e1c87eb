//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ChallengeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ChallengeConfig, ConfigError> {
    let config: ChallengeConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ChallengeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert_eq!(config.flags.hello, "BRZ1-HELLO-9f2a");
        assert_eq!(config.flags.final_flag, "BRZ-FINAL-7abc");
    }

    #[test]
    fn test_flags_override() {
        let config = parse_config(
            r#"
            [flags]
            hello = "H-1"
            rest = "R-2"
            echo = "E-3"
            user_agent = "U-4"
            final = "F-5"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.flags.hello, "H-1");
        assert_eq!(config.flags.final_flag, "F-5");
        assert_eq!(config.observability.log_format, crate::config::LogFormat::Json);
        // Untouched sections keep their defaults.
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_every_problem() {
        let err = parse_config(
            r#"
            [timeouts]
            request_secs = 0

            [flags]
            hello = ""
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/linguapi.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
