//! Step 2: discover a resource-style path, then fetch the one document.

use serde::Serialize;

use super::{Bronze, CheckError};

/// Id of the only document in the catalogue.
pub const ANSWER_ID: i64 = 42;

const ANSWER_TITLE: &str = "The Answer";

/// Clue pointing at the shape of the document path without naming it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoverHint {
    pub message: &'static str,
    pub example_style: &'static str,
}

/// Reply for the known document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReply {
    pub title: &'static str,
    pub flag: String,
}

impl Bronze {
    /// Clue for step 2. Never leaks the id or the flag.
    pub fn discover(&self) -> DiscoverHint {
        DiscoverHint {
            message: "Find the resource and id. When ready, request it.",
            example_style: "/bronze/<resource-name>/<id>",
        }
    }

    /// Resolve a document by id.
    pub fn document(&self, doc_id: i64) -> Result<DocumentReply, CheckError> {
        if doc_id != ANSWER_ID {
            return Err(CheckError::NotFound);
        }

        Ok(DocumentReply {
            title: ANSWER_TITLE,
            flag: self.flags().rest().to_string(),
        })
    }
}
