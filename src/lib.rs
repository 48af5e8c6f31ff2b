//! Vista - a read-only HTTP API over a hardcoded artifact catalog
//!
//! Vista exposes a small catalog of artifact repositories (container
//! registries) and the resources (images) they contain:
//! - In-memory catalog built from a literal fixture
//! - Explicit route table with axum
//! - Plain-text 404/405 errors, JSON payloads on success

pub mod api;
pub mod catalog;
pub mod error;
pub mod types;

pub use error::{Error, Result};
