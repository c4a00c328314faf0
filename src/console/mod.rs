//! Console front end
//!
//! Reads commands line by line and prints the session's responses.

pub mod prompt;
pub mod runner;

pub use prompt::LinePrompt;
pub use runner::Console;
