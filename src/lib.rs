pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod gate;
pub mod utils;

pub use auth::{Identity, Outcome, SecretDigest};
pub use crate::config::GateConfig;
pub use gate::authenticate;
