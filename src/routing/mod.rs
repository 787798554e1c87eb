//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route table (at startup):
//!     table.rs (path + method + handler + RouteDoc)
//!     → http/server.rs registers every handler with axum
//!     → docs/openapi.rs renders only the routes marked `listed`
//! ```
//!
//! # Design Decisions
//! - One table feeds both the router and the documentation
//! - `listed` is documentation metadata only; it never gates dispatch
//! - Routes built at startup, immutable at runtime

pub mod table;

pub use table::{routes, BodyDoc, ParamDoc, ParamLocation, Route, RouteDoc};
