//! Prints the hex SHA-256 digest of a secret entered without echo, for use as
//! `password_digest` in the gate configuration.

use std::process::ExitCode;

use credential_gate::SecretDigest;
use credential_gate::console::messages::PASSWORD_PROMPT;
use credential_gate::console::{Prompter, TerminalPrompter};
use credential_gate::error::GateError;
use credential_gate::error::handlers::exit_code;
use credential_gate::utils::logging::setup_logging;

fn run() -> Result<(), GateError> {
    let mut prompter = TerminalPrompter::new();
    let secret = prompter.read_secret(PASSWORD_PROMPT)?;
    println!("{}", SecretDigest::of(&secret).to_hex());
    Ok(())
}

fn main() -> ExitCode {
    setup_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(exit_code(&e) as u8),
    }
}
