//! Console messages
//!
//! Prompts and notices shown by the credential gate.

pub const USERNAME_PROMPT: &str = "Enter username: ";
pub const PASSWORD_PROMPT: &str = "Enter password: ";

pub const LOGIN_SUCCESSFUL: &str = "Login successful.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const TOO_MANY_ATTEMPTS: &str = "Too many failed attempts.";
