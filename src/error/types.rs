//! Error types
//!
//! Defines the authentication error and the crate-level error that wraps it
//! together with configuration and console failures.

use std::fmt;
use std::io;

/// Authentication module errors
///
/// A wrong username and a wrong password are the same error on purpose, so
/// nothing downstream can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    CredentialMismatch,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::CredentialMismatch => write!(f, "Invalid credentials"),
        }
    }
}

impl std::error::Error for AuthError {}

/// General gate error that encompasses all error types
#[derive(Debug)]
pub enum GateError {
    Auth(AuthError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::Auth(e) => write!(f, "Authentication error: {}", e),
            GateError::Config(e) => write!(f, "Configuration error: {}", e),
            GateError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GateError::Auth(e) => Some(e),
            GateError::Config(e) => Some(e),
            GateError::IoError(e) => Some(e),
        }
    }
}

impl From<AuthError> for GateError {
    fn from(error: AuthError) -> Self {
        GateError::Auth(error)
    }
}

impl From<config::ConfigError> for GateError {
    fn from(error: config::ConfigError) -> Self {
        GateError::Config(error)
    }
}

impl From<io::Error> for GateError {
    fn from(error: io::Error) -> Self {
        GateError::IoError(error)
    }
}
