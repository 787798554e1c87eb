//! Machine-readable API documentation.
//!
//! Renders the listed part of the route table as an OpenAPI 3.1 document,
//! served at `/openapi.json`.

pub mod openapi;

pub use openapi::OpenApi;
