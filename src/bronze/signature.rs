//! Step 4: identify the client through the `User-Agent` header.

use serde::Serialize;

use super::{trim_input, Bronze, CheckError};

/// Required start of every accepted client signature.
pub const CLIENT_PREFIX: &str = "LinguAPI-Client/";

/// Reply naming the accepted client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientReply {
    pub message: String,
    pub flag: String,
}

/// Extract the client name from a raw signature.
///
/// The name is everything after the first `/`, trimmed.
pub fn client_name(signature: &str) -> Result<&str, CheckError> {
    if !signature.starts_with(CLIENT_PREFIX) {
        return Err(CheckError::SignatureRejected);
    }

    let name = signature
        .split_once('/')
        .map(|(_, rest)| trim_input(rest))
        .unwrap_or_default();
    if name.is_empty() {
        return Err(CheckError::MissingIdentifier);
    }

    Ok(name)
}

impl Bronze {
    /// Check the raw `User-Agent` value.
    pub fn client(&self, user_agent: &str) -> Result<ClientReply, CheckError> {
        let name = client_name(user_agent)?;

        Ok(ClientReply {
            message: format!("Client accepted: {}", name),
            flag: self.flags().user_agent().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_prefixed_name() {
        let bronze = Bronze::default();
        let reply = bronze.client("LinguAPI-Client/bob").unwrap();
        assert_eq!(reply.message, "Client accepted: bob");
        assert_eq!(reply.flag, "BRZ4-UA-5d10");
    }

    #[test]
    fn test_empty_suffix() {
        assert_eq!(client_name("LinguAPI-Client/"), Err(CheckError::MissingIdentifier));
        assert_eq!(client_name("LinguAPI-Client/   "), Err(CheckError::MissingIdentifier));
        assert_eq!(client_name("LinguAPI-Client/\x1f"), Err(CheckError::MissingIdentifier));
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(client_name("bob"), Err(CheckError::SignatureRejected));
        assert_eq!(client_name(""), Err(CheckError::SignatureRejected));
        assert_eq!(client_name("linguapi-client/bob"), Err(CheckError::SignatureRejected));
        assert_eq!(client_name(" LinguAPI-Client/bob"), Err(CheckError::SignatureRejected));
    }

    #[test]
    fn test_name_keeps_later_slashes() {
        assert_eq!(client_name("LinguAPI-Client/bob/1.0"), Ok("bob/1.0"));
        assert_eq!(client_name("LinguAPI-Client/  alice  "), Ok("alice"));
    }
}
