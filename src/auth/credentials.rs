//! Credential storage and management
//!
//! Holds the expected identity and the SHA-256 digest of its secret. The
//! cleartext secret only ever lives in a zeroizing buffer until it is digested.

use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};
use std::fmt;

/// Length in bytes of a SHA-256 digest
pub const DIGEST_LEN: usize = 32;

/// One-way SHA-256 digest of a secret
#[derive(Clone, Copy)]
pub struct SecretDigest([u8; DIGEST_LEN]);

impl SecretDigest {
    /// Digest the UTF-8 bytes of a secret
    pub fn of(secret: &str) -> Self {
        Self(Sha256::digest(secret.as_bytes()).into())
    }

    /// Parse a digest from 64 hex characters
    pub fn from_hex(encoded: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(encoded.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Lowercase hex rendering, as stored in configuration
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl PartialEq for SecretDigest {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for SecretDigest {}

impl fmt::Debug for SecretDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretDigest({})", self.to_hex())
    }
}

/// The identity a login must match. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
    secret_digest: SecretDigest,
}

impl Identity {
    pub fn new(username: impl Into<String>, secret_digest: SecretDigest) -> Self {
        Self {
            username: username.into(),
            secret_digest,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret_digest(&self) -> &SecretDigest {
        &self.secret_digest
    }
}
