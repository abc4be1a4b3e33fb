//! Configuration management for the credential gate
//!
//! The expected identity and attempt budget come from an optional
//! `config.toml` with `GATE_*` environment overrides. Nothing about the
//! identity is compiled in.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::num::NonZeroU32;

use crate::auth::{Identity, SecretDigest};

/// Environment variable naming an alternative config file (without extension)
pub const CONFIG_PATH_ENV: &str = "CREDENTIAL_GATE_CONFIG";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix for environment overrides, e.g. `GATE_MAX_ATTEMPTS`
pub const ENV_PREFIX: &str = "GATE";

/// Attempt budget when none is configured
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Gate configuration, loaded once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct GateConfig {
    /// Username that must be entered exactly
    pub username: String,

    /// Hex SHA-256 digest of the expected password
    pub password_digest: String,

    /// Number of comparison attempts allowed per run
    pub max_attempts: u32,
}

impl GateConfig {
    /// Load configuration from the config file with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load from `path` (file optional) with environment overrides
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("max_attempts", i64::from(DEFAULT_MAX_ATTEMPTS))?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: GateConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::Message("username cannot be empty".into()));
        }

        self.secret_digest()?;
        self.attempt_budget()?;

        Ok(())
    }

    /// Parsed password digest
    pub fn secret_digest(&self) -> Result<SecretDigest, ConfigError> {
        SecretDigest::from_hex(&self.password_digest).map_err(|e| {
            ConfigError::Message(format!(
                "password_digest must be 64 hex characters (SHA-256): {e}"
            ))
        })
    }

    /// Attempt budget as a positive count
    pub fn attempt_budget(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.max_attempts)
            .ok_or_else(|| ConfigError::Message("max_attempts must be greater than 0".into()))
    }

    /// Build the immutable identity the gate checks against
    pub fn identity(&self) -> Result<Identity, ConfigError> {
        Ok(Identity::new(self.username.clone(), self.secret_digest()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const PASSW0RD_SHA256: &str =
        "8f0e2f76e22b43e2855189877e7dc1e1e7d98c226c95db247cd1d547928334a9";

    /// Writes `contents` to a unique TOML file and returns its path without extension.
    fn write_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("credential-gate-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let stem = dir.join(name);
        fs::write(stem.with_extension("toml"), contents).unwrap();
        stem
    }

    fn load(name: &str, contents: &str) -> Result<GateConfig, ConfigError> {
        let stem = write_config(name, contents);
        GateConfig::load_from(stem.to_str().unwrap())
    }

    #[test]
    fn max_attempts_defaults_to_three() {
        let config = load(
            "defaults",
            &format!("username = \"Marist\"\npassword_digest = \"{PASSW0RD_SHA256}\"\n"),
        )
        .unwrap();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.attempt_budget().unwrap().get(), 3);
    }

    #[test]
    fn builds_identity_from_file() {
        let config = load(
            "identity",
            &format!(
                "username = \"Marist\"\npassword_digest = \"{PASSW0RD_SHA256}\"\nmax_attempts = 5\n"
            ),
        )
        .unwrap();
        let identity = config.identity().unwrap();
        assert_eq!(identity.username(), "Marist");
        assert_eq!(*identity.secret_digest(), SecretDigest::of("passw0rd"));
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn rejects_zero_attempts() {
        let err = load(
            "zero",
            &format!(
                "username = \"Marist\"\npassword_digest = \"{PASSW0RD_SHA256}\"\nmax_attempts = 0\n"
            ),
        )
        .unwrap_err();
        assert!(err.to_string().contains("max_attempts"));
    }

    #[test]
    fn rejects_malformed_digest() {
        let err = load(
            "digest",
            "username = \"Marist\"\npassword_digest = \"passw0rd\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("password_digest"));
    }

    #[test]
    fn rejects_empty_username() {
        let err = load(
            "empty",
            &format!("username = \"\"\npassword_digest = \"{PASSW0RD_SHA256}\"\n"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn missing_identity_is_an_error() {
        let stem = std::env::temp_dir().join("credential-gate-does-not-exist");
        assert!(GateConfig::load_from(stem.to_str().unwrap()).is_err());
    }
}
