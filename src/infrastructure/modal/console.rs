//! Console fallback for platforms without a native message box
//!
//! Prints the dialog on stderr and blocks until a line (or end of input)
//! arrives on stdin.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use colored::*;

use crate::application::ports::ModalDialog;
use crate::domain::ResultCode;

/// Modal dialog that uses the terminal instead of a window
pub struct ConsoleModal<R, W> {
    io: RefCell<(R, W)>,
}

impl ConsoleModal<io::StdinLock<'static>, io::Stderr> {
    /// Create a console modal reading stdin and prompting on stderr
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stderr())
    }
}

impl Default for ConsoleModal<io::StdinLock<'static>, io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsoleModal<R, W> {
    /// Create with custom input and prompt streams
    pub fn with_io(input: R, prompt: W) -> Self {
        Self {
            io: RefCell::new((input, prompt)),
        }
    }

    fn prompt_and_wait(input: &mut R, prompt: &mut W, message: &str, title: &str) -> io::Result<()> {
        writeln!(prompt, "{} {}", format!("[{}]", title).bold(), message)?;
        writeln!(prompt, "{} Press Enter to dismiss...", "ℹ".cyan())?;
        prompt.flush()?;

        // End of input counts as closing the dialog
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ModalDialog for ConsoleModal<R, W> {
    fn show_modal(&self, message: &str, title: &str) -> ResultCode {
        let mut streams = self.io.borrow_mut();
        let (input, prompt) = &mut *streams;

        match Self::prompt_and_wait(input, prompt, message, title) {
            Ok(()) => ResultCode::OK,
            Err(_) => ResultCode::FAILED,
        }
    }
}
