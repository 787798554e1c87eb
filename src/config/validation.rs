//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Keep flags usable: non-empty, unpadded, pairwise distinct
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ChallengeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ChallengeConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a parsed config.
pub fn validate_config(config: &ChallengeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::new("limits.max_body_size", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    let flags = &config.flags;
    let named = [
        ("flags.hello", flags.hello.as_str()),
        ("flags.rest", flags.rest.as_str()),
        ("flags.echo", flags.echo.as_str()),
        ("flags.user_agent", flags.user_agent.as_str()),
        ("flags.final", flags.final_flag.as_str()),
    ];

    for (field, value) in named {
        if value.is_empty() {
            errors.push(ValidationError::new(field, "must not be empty"));
        } else if value.trim() != value {
            errors.push(ValidationError::new(field, "must not have surrounding whitespace"));
        }
    }

    // Values are not echoed back; they are secrets.
    for (i, (field, value)) in named.iter().enumerate() {
        if value.is_empty() {
            continue;
        }
        if let Some((other, _)) = named[..i].iter().find(|(_, v)| v == value) {
            errors.push(ValidationError::new(*field, format!("duplicates {}", other)));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ChallengeConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = ChallengeConfig::default();
        config.listener.bind_address = "localhost".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "listener.bind_address");
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ChallengeConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "observability.metrics_address");
    }

    #[test]
    fn test_duplicate_flags_rejected() {
        let mut config = ChallengeConfig::default();
        config.flags.echo = config.flags.hello.clone();
        config.flags.final_flag = config.flags.rest.clone();
        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["flags.echo", "flags.final"]);
        assert!(!errors[0].message.contains("BRZ1"));
    }

    #[test]
    fn test_padded_flag_rejected() {
        let mut config = ChallengeConfig::default();
        config.flags.user_agent = " BRZ4-UA-5d10".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "flags.user_agent");
    }
}
