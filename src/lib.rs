//! LinguAPI challenge service library.
//!
//! A stateless HTTP service teaching API basics in five steps; each
//! passed step awards a flag and the final step trades the four flags,
//! in order, for a trophy.

pub mod bronze;
pub mod config;
pub mod docs;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use bronze::{Bronze, CheckError, FlagSet};
pub use config::ChallengeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
