//! Authentication result types
//!
//! Defines the terminal outcome of a gate session.

/// Terminal outcome of a run of the credential gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Granted,
    Denied,
}

impl Outcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Outcome::Granted)
    }
}
