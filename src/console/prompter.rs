//! Prompter abstraction
//!
//! The gate talks to its user only through this trait, so the terminal is one
//! implementation among others (tests script their input through it).

use std::io;
use zeroize::Zeroizing;

pub trait Prompter {
    /// Shows `prompt` and reads one line, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Shows `prompt` and reads a secret without echoing it.
    fn read_secret(&mut self, prompt: &str) -> io::Result<Zeroizing<String>>;

    /// Shows a one-line notice to the user.
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Removes a trailing `\n` or `\r\n` and nothing else.
pub(crate) fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
