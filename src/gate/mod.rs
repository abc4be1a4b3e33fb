//! Credential gate
//!
//! Bounded-retry login: the session state machine and the routine driving it.

pub mod handler;
pub mod state;

pub use handler::authenticate;
pub use state::{GateSession, GateState};
