//! Gate handler
//!
//! Runs the prompt, digest and compare loop until the session reaches a
//! terminal state.

use log::{debug, info, warn};
use std::num::NonZeroU32;

use super::state::GateSession;
use crate::auth::{Identity, Outcome, validate_credentials};
use crate::console::Prompter;
use crate::console::messages::{
    INVALID_CREDENTIALS, LOGIN_SUCCESSFUL, PASSWORD_PROMPT, TOO_MANY_ATTEMPTS, USERNAME_PROMPT,
};
use crate::error::GateError;

/// Prompts for credentials until they match `expected` or `max_attempts`
/// mismatches have been recorded.
///
/// - Returns `Granted` on the first full match without consuming more attempts.
/// - Returns `Denied` after exactly `max_attempts` mismatches; no further
///   prompt is shown.
/// - Console failures (closed input, interrupted entry) abort with an error
///   and are not counted as attempts.
pub fn authenticate<P: Prompter + ?Sized>(
    expected: &Identity,
    max_attempts: NonZeroU32,
    prompter: &mut P,
) -> Result<Outcome, GateError> {
    let mut session = GateSession::new(max_attempts);

    loop {
        let username = prompter.read_line(USERNAME_PROMPT)?;
        let secret = prompter.read_secret(PASSWORD_PROMPT)?;

        let state = match validate_credentials(expected, &username, &secret) {
            Ok(()) => session.record_success(),
            Err(e) => {
                let state = session.record_failure();
                warn!(
                    "{} (attempt {}/{})",
                    e,
                    session.failed_attempts(),
                    session.max_attempts()
                );
                state
            }
        };

        match state.outcome() {
            Some(Outcome::Granted) => {
                info!(
                    "Login granted after {} failed attempt(s)",
                    session.failed_attempts()
                );
                prompter.notify(LOGIN_SUCCESSFUL)?;
                return Ok(Outcome::Granted);
            }
            Some(Outcome::Denied) => {
                warn!("Attempt budget of {} exhausted", session.max_attempts());
                prompter.notify(TOO_MANY_ATTEMPTS)?;
                return Ok(Outcome::Denied);
            }
            None => {
                debug!("{} attempt(s) remaining", session.remaining_attempts());
                prompter.notify(INVALID_CREDENTIALS)?;
            }
        }
    }
}
