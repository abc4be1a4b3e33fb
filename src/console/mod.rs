//! Console I/O
//!
//! Prompts, masked secret entry and user-facing notices.

pub mod messages;
pub mod prompter;
pub mod terminal;

pub use prompter::Prompter;
pub use terminal::TerminalPrompter;
