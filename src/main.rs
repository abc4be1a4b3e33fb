//! Credential Gate - Entry Point
//!
//! Console login with a bounded number of attempts.
//! Exits 0 when access is granted, 1 when denied and 2 on any other failure.

use log::info;
use std::process::ExitCode;

use credential_gate::GateConfig;
use credential_gate::console::TerminalPrompter;
use credential_gate::error::GateError;
use credential_gate::error::handlers::{exit_code, outcome_to_exit_code};
use credential_gate::gate::authenticate;
use credential_gate::utils::logging::setup_logging;

fn run() -> Result<i32, GateError> {
    let config = GateConfig::load()?;
    let identity = config.identity()?;
    let max_attempts = config.attempt_budget()?;

    info!("Starting credential gate ({} attempts allowed)", max_attempts);

    let mut prompter = TerminalPrompter::new();
    let outcome = authenticate(&identity, max_attempts, &mut prompter)?;

    Ok(outcome_to_exit_code(outcome))
}

fn main() -> ExitCode {
    setup_logging();

    let code = match run() {
        Ok(code) => code,
        Err(e) => exit_code(&e),
    };

    ExitCode::from(code as u8)
}
