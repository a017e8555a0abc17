//! Shared building blocks for the kunai vCard workspace.
//!
//! Holds the error type, configuration loading, and constants that both the
//! encoder crate and the HTTP adapter depend on.

pub mod config;
pub mod constants;
pub mod error;
