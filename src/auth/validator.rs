//! Authentication validator
//!
//! Compares one entered username/secret pair against the expected identity.

use super::credentials::{Identity, SecretDigest};
use crate::error::AuthError;

/// Validates an entered username and secret against `expected`.
///
/// The secret is digested before comparison and both fields are always
/// checked, so a mismatch carries no hint of which one was wrong.
pub fn validate_credentials(
    expected: &Identity,
    username: &str,
    secret: &str,
) -> Result<(), AuthError> {
    let entered_digest = SecretDigest::of(secret);

    let username_ok = username == expected.username();
    let digest_ok = entered_digest == *expected.secret_digest();

    if username_ok & digest_ok {
        Ok(())
    } else {
        Err(AuthError::CredentialMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marist() -> Identity {
        Identity::new("Marist", SecretDigest::of("passw0rd"))
    }

    #[test]
    fn accepts_exact_match() {
        assert_eq!(validate_credentials(&marist(), "Marist", "passw0rd"), Ok(()));
    }

    #[test]
    fn wrong_username_and_wrong_password_are_indistinguishable() {
        let wrong_user = validate_credentials(&marist(), "marist", "passw0rd");
        let wrong_pass = validate_credentials(&marist(), "Marist", "password");
        let both = validate_credentials(&marist(), "x", "y");
        assert_eq!(wrong_user, Err(AuthError::CredentialMismatch));
        assert_eq!(wrong_user, wrong_pass);
        assert_eq!(wrong_pass, both);
    }

    #[test]
    fn input_is_compared_literally() {
        assert!(validate_credentials(&marist(), "Marist ", "passw0rd").is_err());
        assert!(validate_credentials(&marist(), "Marist", " passw0rd").is_err());
        assert!(validate_credentials(&marist(), "", "").is_err());
    }
}
