//! Terminal prompter
//!
//! Reads from stdin and writes to stdout. On a terminal both the username and
//! the secret are read from the same raw-mode key stream, echoing only the
//! username; piped stdin is read line by line instead.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::debug;
use std::io::{self, BufRead, IsTerminal, Write};
use zeroize::Zeroizing;

use super::prompter::{Prompter, strip_line_terminator};

/// Whether typed characters are shown back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Echo {
    Visible,
    Hidden,
}

/// Prompter bound to the process console
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn show_prompt(prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()
    }

    fn read_stdin_line() -> io::Result<String> {
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a line was read",
            ));
        }
        strip_line_terminator(&mut line);
        Ok(line)
    }

    /// Reads one line of key presses with raw mode enabled, restoring the
    /// terminal afterwards whatever the result.
    fn read_raw_line(echo: Echo) -> io::Result<Zeroizing<String>> {
        terminal::enable_raw_mode()?;
        let mut events = std::iter::from_fn(|| Some(event::read()));
        let line = read_keys(&mut events, echo, &mut io::stdout());
        let restored = terminal::disable_raw_mode();

        // Enter was swallowed in raw mode
        println!();

        restored?;
        line
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        Self::show_prompt(prompt)?;

        if !io::stdin().is_terminal() {
            return Self::read_stdin_line();
        }

        let mut line = Self::read_raw_line(Echo::Visible)?;
        Ok(std::mem::take(&mut *line))
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<Zeroizing<String>> {
        Self::show_prompt(prompt)?;

        if !io::stdin().is_terminal() {
            debug!("stdin is not a terminal, reading secret as a plain line");
            return Self::read_stdin_line().map(Zeroizing::new);
        }

        Self::read_raw_line(Echo::Hidden)
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", message)?;
        stdout.flush()
    }
}

/// Collects key presses until Enter, consuming nothing past it, so keys typed
/// or pasted ahead stay queued for the next read.
fn read_keys<I, W>(events: &mut I, echo: Echo, out: &mut W) -> io::Result<Zeroizing<String>>
where
    I: Iterator<Item = io::Result<Event>>,
    W: Write,
{
    let mut line = Zeroizing::new(String::with_capacity(64));

    for event in events.by_ref() {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event?
        else {
            continue;
        };

        if kind == KeyEventKind::Release {
            continue;
        }

        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Enter => return Ok(line),
            KeyCode::Char('c') if ctrl => {
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "input interrupted",
                ));
            }
            KeyCode::Char('d') if ctrl && line.is_empty() => break,
            KeyCode::Backspace => {
                if line.pop().is_some() && echo == Echo::Visible {
                    out.write_all(b"\x08 \x08")?;
                    out.flush()?;
                }
            }
            KeyCode::Char(c) if !ctrl => {
                line.push(c);
                if echo == Echo::Visible {
                    let mut buf = [0u8; 4];
                    out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
                    out.flush()?;
                }
            }
            _ => {}
        }
    }

    Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "input closed before a line was read",
    ))
}
