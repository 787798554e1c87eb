//! Bronze tier: the verification and gating protocol.
//!
//! # Data Flow
//! ```text
//! transport extracts a field (query, path, body, header)
//!     → identifier.rs / resource.rs / phrase.rs / signature.rs (one check each)
//!     → Ok(reply carrying a fixed flag) | Err(CheckError)
//!
//! caller collects the four flags
//!     → gate.rs (ordered comparison against FlagSet)
//!     → Ok(trophy + final flag) | Err(SequenceMismatch)
//! ```
//!
//! # Design Decisions
//! - Every check is a pure function of its input plus the read-only `FlagSet`
//! - Flags are never derived from input and never issued per session
//! - No data flows between checks; the chaining is the learner's job
//! - Errors are values; the HTTP layer decides status codes

pub mod error;
pub mod flags;
pub mod gate;
pub mod identifier;
pub mod phrase;
pub mod resource;
pub mod signature;
pub mod tasks;

pub use error::{CheckError, ErrorCategory};
pub use flags::FlagSet;
pub use gate::TrophyReply;
pub use identifier::HelloReply;
pub use phrase::EchoReply;
pub use resource::{DiscoverHint, DocumentReply};
pub use signature::ClientReply;

/// Strip surrounding whitespace from learner input.
///
/// Besides Unicode `White_Space` this also strips the information
/// separators U+001C..=U+001F, so `"\x1fab"` trims to `"ab"`.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// The bronze tier checks, bound to one immutable flag set.
///
/// Cheap to share behind an `Arc`; holds no mutable state.
#[derive(Debug, Clone)]
pub struct Bronze {
    flags: FlagSet,
}

impl Bronze {
    /// Create the tier from an already validated flag set.
    pub fn new(flags: FlagSet) -> Self {
        Self { flags }
    }

    /// The flags this tier issues.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }
}

impl Default for Bronze {
    fn default() -> Self {
        Self::new(FlagSet::default())
    }
}
