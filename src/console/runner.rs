//! Console loop
//!
//! Drives a `Session` over any buffered reader and writer.

use log::{error, info};
use std::io::{self, BufRead, Write};

use super::prompt::LinePrompt;
use crate::session::{CommandStatus, Session, parse_command};
use crate::storage::CustomerStore;

const MAX_COMMAND_LENGTH: usize = 512;

/// Interactive console bound to one session.
pub struct Console<R, W, S> {
    input: R,
    output: W,
    session: Session<S>,
}

impl<R: BufRead, W: Write, S: CustomerStore> Console<R, W, S> {
    pub fn new(input: R, output: W, session: Session<S>) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Customer database")?;
        writeln!(self.output, "{}", self.session.screen().help(None))?;

        let mut line = String::new();
        loop {
            write!(self.output, "[{}]> ", self.session.screen())?;
            self.output.flush()?;

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    info!("Input closed, leaving");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Failed to read command: {}", e);
                    return Err(e);
                }
            }

            if line.len() > MAX_COMMAND_LENGTH {
                writeln!(self.output, "Command too long")?;
                continue;
            }

            let command = parse_command(&line);
            let result = {
                let mut prompt = LinePrompt::new(&mut self.input, &mut self.output);
                self.session.handle(command, &mut prompt)
            };

            if let Some(message) = &result.message {
                writeln!(self.output, "{message}")?;
            }
            if result.status == CommandStatus::Exit {
                break;
            }
        }

        self.output.flush()
    }
}
