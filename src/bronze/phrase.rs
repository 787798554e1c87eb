//! Step 3: send a phrase in a JSON body.

use serde::{Deserialize, Serialize};

use super::{trim_input, Bronze, CheckError};

/// Inclusive bounds on the trimmed phrase, in characters.
pub const MIN_PHRASE_CHARS: usize = 10;
pub const MAX_PHRASE_CHARS: usize = 60;

/// Body accepted by the echo step.
#[derive(Debug, Clone, Deserialize)]
pub struct EchoRequest {
    pub phrase: String,
}

/// Reply echoing the trimmed phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoReply {
    pub echo: String,
    pub flag: String,
}

impl Bronze {
    /// Check the phrase length after trimming.
    ///
    /// Length counts Unicode scalar values, so `"ééééééééé"` is 9, not 18.
    pub fn echo(&self, phrase: &str) -> Result<EchoReply, CheckError> {
        let trimmed = trim_input(phrase);
        let len = trimmed.chars().count();
        if !(MIN_PHRASE_CHARS..=MAX_PHRASE_CHARS).contains(&len) {
            return Err(CheckError::OutOfRange);
        }

        Ok(EchoReply {
            echo: trimmed.to_string(),
            flag: self.flags().echo().to_string(),
        })
    }
}
