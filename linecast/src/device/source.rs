//! Line sources: where a device gets its text from.
//!
//! The read operations only need "one line of text, given a prompt", so that
//! seam is a trait. [`StdinSource`] is the default and talks to the real
//! terminal; tests and embedders can supply anything else.

use std::io::{self, BufRead, Write};

/// Provides one line of text per call, without its trailing newline.
///
/// Blocking is expected: [`StdinSource`] waits indefinitely for the user.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads lines from standard input, writing the prompt (unterminated) to
/// standard output first.
#[derive(Debug, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
