//! Module `state`
//!
//! Attempt-counting state machine for one run of the credential gate.

use std::num::NonZeroU32;

use crate::auth::Outcome;

/// Phase of a gate session. `Granted` and `Denied` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Prompting,
    Granted,
    Denied,
}

impl GateState {
    /// The outcome for a terminal state, `None` while still prompting.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GateState::Prompting => None,
            GateState::Granted => Some(Outcome::Granted),
            GateState::Denied => Some(Outcome::Denied),
        }
    }
}

/// Tracks failed attempts against the budget for a single run.
///
/// The counter only grows and never exceeds `max_attempts`.
#[derive(Debug)]
pub struct GateSession {
    failed_attempts: u32,
    max_attempts: NonZeroU32,
    state: GateState,
}

impl GateSession {
    pub fn new(max_attempts: NonZeroU32) -> Self {
        Self {
            failed_attempts: 0,
            max_attempts,
            state: GateState::Prompting,
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.get()
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.get() - self.failed_attempts
    }

    // --------------------
    // Transitions
    // --------------------

    /// Records a full match. No effect once the session is terminal.
    pub fn record_success(&mut self) -> GateState {
        if self.state == GateState::Prompting {
            self.state = GateState::Granted;
        }
        self.state
    }

    /// Records a mismatch, moving to `Denied` when the budget runs out.
    /// No effect once the session is terminal.
    pub fn record_failure(&mut self) -> GateState {
        if self.state != GateState::Prompting {
            return self.state;
        }

        self.failed_attempts += 1;
        if self.failed_attempts >= self.max_attempts.get() {
            self.state = GateState::Denied;
        }
        self.state
    }
}
