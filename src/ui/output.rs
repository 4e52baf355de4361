//! ui::output
//!
//! Output that respects the quiet flag.

use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - standard output
    Normal,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Writes command output.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    verbosity: Verbosity,
}

impl Printer<io::Stdout> {
    /// Printer writing to stdout.
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::new(io::stdout(), verbosity)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, verbosity: Verbosity) -> Self {
        Self { out, verbosity }
    }

    /// Print a line (respects quiet mode).
    pub fn println(&mut self, message: impl Display) -> io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", message)
    }

    /// Underlying writer, bypassing quiet mode.
    pub fn raw(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
