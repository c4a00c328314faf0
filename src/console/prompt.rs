//! Confirmation prompts on a line-based terminal

use log::warn;
use std::io::{BufRead, Write};

use crate::session::{Confirm, Decision};

/// Asks `y/n` questions on the console streams.
///
/// Re-asks until the answer is recognised. End of input or an I/O error
/// counts as cancel.
pub struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LinePrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> Decision {
        let mut line = String::new();
        loop {
            if let Err(e) = write!(self.output, "{prompt} [y/n] ").and_then(|()| self.output.flush())
            {
                warn!("Failed to write prompt: {}", e);
                return Decision::Cancel;
            }

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => return Decision::Cancel,
                Ok(_) => match line.trim().to_ascii_lowercase().as_str() {
                    "y" | "yes" | "ok" => return Decision::Confirm,
                    "n" | "no" | "cancel" => return Decision::Cancel,
                    _ => continue,
                },
                Err(e) => {
                    warn!("Failed to read answer: {}", e);
                    return Decision::Cancel;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn re_asks_until_answered() {
        let mut input = Cursor::new("maybe\n\nYes\n");
        let mut output = Vec::new();

        let decision = LinePrompt::new(&mut input, &mut output).confirm("Really?");

        assert_eq!(decision, Decision::Confirm);
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Really? [y/n]").count(), 3);
    }

    #[test]
    fn end_of_input_cancels() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let decision = LinePrompt::new(&mut input, &mut output).confirm("Really?");
        assert_eq!(decision, Decision::Cancel);
    }
}
