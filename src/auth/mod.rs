//! Authentication system
//!
//! Handles the expected identity, secret digests and credential validation.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{DIGEST_LEN, Identity, SecretDigest};
pub use results::Outcome;
pub use validator::validate_credentials;
