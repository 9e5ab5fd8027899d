//! Output plumbing for CLI commands

use std::io::{self, Write};

/// Writer wrapper used by all command handlers
///
/// Rendered text goes to the wrapped writer; verbose diagnostics go to
/// stderr so they never disturb the rendered output.
pub struct Output<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Writes a pre-rendered block as-is
    pub fn write_rendered(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Writes a single line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Prints a verbose diagnostic (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose diagnostic with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }

    /// Consumes the wrapper, returning the writer (used by tests)
    pub fn into_inner(self) -> W {
        self.out
    }
}
