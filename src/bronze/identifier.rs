//! Step 1: say hello with a query parameter.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{trim_input, Bronze, CheckError};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{2,24}$").expect("identifier pattern is valid"));

/// Reply for a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelloReply {
    pub message: &'static str,
    pub flag: String,
}

/// Returns true when the trimmed identifier is 2-24 ASCII letters, digits or underscores.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(trim_input(name))
}

impl Bronze {
    /// Check the `name` query value.
    pub fn hello(&self, name: &str) -> Result<HelloReply, CheckError> {
        if !is_valid_identifier(name) {
            return Err(CheckError::InvalidFormat);
        }

        Ok(HelloReply {
            message: "Welcome!",
            flag: self.flags().hello().to_string(),
        })
    }
}
