//! User input utilities for interactive prompts.
//!
//! The prompter is generic over its reader and writer so that menu flows can
//! be driven by a scripted `Cursor` in tests and by stdin/stdout for real.

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::{Context, Result};

/// Raised when the input stream ends; the menu treats it as "exit".
#[derive(Debug, thiserror::Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Line-oriented prompter.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// A prompter over the process stdin and stdout.
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write output")
    }

    /// Prompts for one line and returns it with whitespace trimmed.
    ///
    /// # Errors
    ///
    /// [`InputClosed`] at end of input, or the underlying I/O error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}: ").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read user input")?;

        if read == 0 {
            return Err(InputClosed.into());
        }

        Ok(line.trim().to_string())
    }

    /// Prompts showing the current value; an empty answer means "keep it".
    pub fn ask_keeping(&mut self, prompt: &str, current: &str) -> Result<String> {
        self.ask(&format!("{prompt} [{current}]"))
    }

    /// Prompts for a yes/no confirmation. Empty input is "no".
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{prompt} (y/N)"))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" | "" => return Ok(false),
                _ => self.say("Please enter 'y' for yes or 'n' for no.")?,
            }
        }
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    /// A prompter fed from a script, capturing everything written.
    pub(crate) fn scripted(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    pub(crate) fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_ask_trims_and_echoes_prompt() {
        let mut prompter = scripted("  Mouse  \n");
        assert_eq!(prompter.ask("Name").unwrap(), "Mouse");
        assert_eq!(output_of(prompter), "Name: ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut prompter = scripted("");
        let err = prompter.ask("Name").unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn test_ask_keeping_shows_current() {
        let mut prompter = scripted("\n");
        assert_eq!(prompter.ask_keeping("Price", "19.99").unwrap(), "");
        assert_eq!(output_of(prompter), "Price [19.99]: ");
    }

    #[test]
    fn test_confirm() {
        let mut prompter = scripted("maybe\nY\n\n");
        assert!(prompter.confirm("Delete").unwrap());
        assert!(!prompter.confirm("Delete").unwrap());
        assert!(output_of(prompter).contains("Please enter 'y' for yes"));
    }
}
