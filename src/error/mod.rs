//! Error handling
//!
//! Defines error types and exit-code handling for the credential gate.

pub mod handlers;
pub mod types;

pub use types::*;
