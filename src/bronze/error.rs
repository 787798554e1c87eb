//! Check failures.

use thiserror::Error;

/// Why a check or the gate rejected its input.
///
/// The `Display` text is the exact message returned to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The trimmed identifier does not match `[A-Za-z0-9_]{2,24}`.
    #[error("Identifier format invalid.")]
    InvalidFormat,

    /// No document with the requested id. Malformed ids land here too.
    #[error("Document not found")]
    NotFound,

    /// The trimmed phrase is shorter than 10 or longer than 60 characters.
    #[error("Phrase length out of range.")]
    OutOfRange,

    /// The client signature lacks the `LinguAPI-Client/` prefix.
    #[error("Client signature not accepted.")]
    SignatureRejected,

    /// The client signature has the prefix but no name after it.
    #[error("Missing client identifier.")]
    MissingIdentifier,

    /// The submitted flags differ from the expected sequence.
    #[error("Flags invalid or out of order.")]
    SequenceMismatch,
}

/// Coarse category a transport maps to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input was malformed or wrong.
    BadInput,
    /// The input named something that does not exist.
    NotFound,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::NotFound => ErrorCategory::NotFound,
            _ => ErrorCategory::BadInput,
        }
    }

    /// Stable snake_case name for logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::InvalidFormat => "invalid_format",
            CheckError::NotFound => "not_found",
            CheckError::OutOfRange => "out_of_range",
            CheckError::SignatureRejected => "signature_rejected",
            CheckError::MissingIdentifier => "missing_identifier",
            CheckError::SequenceMismatch => "sequence_mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_not_found_is_not_found() {
        assert_eq!(CheckError::NotFound.category(), ErrorCategory::NotFound);
        for err in [
            CheckError::InvalidFormat,
            CheckError::OutOfRange,
            CheckError::SignatureRejected,
            CheckError::MissingIdentifier,
            CheckError::SequenceMismatch,
        ] {
            assert_eq!(err.category(), ErrorCategory::BadInput, "{:?}", err);
        }
    }

    #[test]
    fn test_signature_causes_have_distinct_messages() {
        assert_ne!(
            CheckError::SignatureRejected.to_string(),
            CheckError::MissingIdentifier.to_string()
        );
    }
}
