//! Step 5: submit the four flags in order.

use serde::{Deserialize, Serialize};

use super::{Bronze, CheckError};

/// Marker awarded on a correct submission.
pub const TROPHY: &str = "🥉";

/// Body accepted by the final gate.
#[derive(Debug, Clone, Deserialize)]
pub struct FinalRequest {
    pub flags: Vec<String>,
}

/// Reply for a correct submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrophyReply {
    pub trophy: &'static str,
    pub flag: String,
}

impl Bronze {
    /// Compare the submission with the expected sequence.
    ///
    /// Length, value and order differences all produce the same error.
    pub fn verify(&self, submitted: &[String]) -> Result<TrophyReply, CheckError> {
        let expected = self.flags().expected_sequence();
        if !submitted.iter().map(String::as_str).eq(expected) {
            return Err(CheckError::SequenceMismatch);
        }

        Ok(TrophyReply {
            trophy: TROPHY,
            flag: self.flags().final_flag().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(bronze: &Bronze) -> Vec<String> {
        bronze
            .flags()
            .expected_sequence()
            .iter()
            .map(|f| f.to_string())
            .collect()
    }

    #[test]
    fn test_exact_order_succeeds_repeatedly() {
        let bronze = Bronze::default();
        let flags = expected(&bronze);
        let first = bronze.verify(&flags).unwrap();
        assert_eq!(first.trophy, "🥉");
        assert_eq!(first.flag, "BRZ-FINAL-7abc");
        assert_eq!(bronze.verify(&flags).unwrap(), first);
    }

    #[test]
    fn test_permutations_fail() {
        let bronze = Bronze::default();
        let flags = expected(&bronze);
        for i in 0..4 {
            for j in (i + 1)..4 {
                let mut swapped = flags.clone();
                swapped.swap(i, j);
                assert_eq!(bronze.verify(&swapped), Err(CheckError::SequenceMismatch));
            }
        }
        let mut reversed = flags.clone();
        reversed.reverse();
        assert_eq!(bronze.verify(&reversed), Err(CheckError::SequenceMismatch));
    }

    #[test]
    fn test_wrong_length_fails() {
        let bronze = Bronze::default();
        let flags = expected(&bronze);
        assert_eq!(bronze.verify(&flags[..3]), Err(CheckError::SequenceMismatch));
        let mut five = flags.clone();
        five.push(bronze.flags().final_flag().to_string());
        assert_eq!(bronze.verify(&five), Err(CheckError::SequenceMismatch));
        assert_eq!(bronze.verify(&[]), Err(CheckError::SequenceMismatch));
    }

    #[test]
    fn test_single_wrong_value_fails_at_every_position() {
        let bronze = Bronze::default();
        let flags = expected(&bronze);
        for i in 0..4 {
            let mut tampered = flags.clone();
            tampered[i] = "BRZ0-WRONG-0000".to_string();
            assert_eq!(bronze.verify(&tampered), Err(CheckError::SequenceMismatch));
        }
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let bronze = Bronze::default();
        let mut flags = expected(&bronze);
        flags[0] = format!(" {}", flags[0]);
        assert_eq!(bronze.verify(&flags), Err(CheckError::SequenceMismatch));
    }

    #[test]
    fn test_follows_configured_flags() {
        let bronze = Bronze::new(crate::bronze::FlagSet::new("a", "b", "c", "d", "done"));
        let flags: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(bronze.verify(&flags).unwrap().flag, "done");
        assert!(bronze.verify(&expected(&Bronze::default())).is_err());
    }
}
