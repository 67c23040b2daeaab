//! Delivery of protocol lines to the plotting engine.
//!
//! The session renders commands and data rows as plain strings; a
//! [`CommandSink`] owns getting them to the engine. [`GnuplotProcess`]
//! pipes lines into a spawned gnuplot, while [`BufferSink`] records them
//! in memory so protocol output can be inspected without an engine.

use std::ffi::OsStr;
use std::io::Write;
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

use crate::error::Result;

/// Accepts ordered protocol lines and flushes them to the engine.
///
/// Implementations append the line terminator themselves; callers pass
/// lines without one.
pub trait CommandSink {
    /// Sends one protocol line.
    fn send_line(&mut self, line: &str) -> Result<()>;

    /// Forces buffered lines out to the engine.
    fn flush(&mut self) -> Result<()>;
}

// ============================================================================
// Buffer sink
// ============================================================================

/// In-memory sink recording every line it receives.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines in arrival order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Recorded lines joined with line terminators.
    #[must_use]
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl CommandSink for BufferSink {
    fn send_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Process sink
// ============================================================================

/// A spawned gnuplot process fed through its standard input.
#[derive(Debug)]
pub struct GnuplotProcess {
    child: Child,
    stdin: ChildStdin,
}

impl GnuplotProcess {
    /// Spawns `gnuplot` from the search path.
    pub fn spawn() -> Result<Self> {
        Self::spawn_program("gnuplot")
    }

    /// Spawns the engine from an explicit program path.
    pub fn spawn_program(program: impl AsRef<OsStr>) -> Result<Self> {
        let mut child = Command::new(program).stdin(Stdio::piped()).spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("engine stdin was not captured"))?;
        Ok(Self { child, stdin })
    }

    /// Closes the engine's input and waits for it to exit.
    ///
    /// Dropping the pipe is what signals end-of-input; the engine shuts
    /// down once it has drained what was sent.
    pub fn close(self) -> Result<ExitStatus> {
        let Self { mut child, stdin } = self;
        drop(stdin);
        Ok(child.wait()?)
    }
}

impl CommandSink for GnuplotProcess {
    fn send_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.stdin, "{line}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdin.flush()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_records_lines_in_order() {
        let mut sink = BufferSink::new();
        sink.send_line("set key center").unwrap();
        sink.send_line("replot").unwrap();
        sink.flush().unwrap();

        assert_eq!(sink.lines(), &["set key center", "replot"]);
    }

    #[test]
    fn test_buffer_output_terminates_lines() {
        let mut sink = BufferSink::new();
        sink.send_line("a").unwrap();
        sink.send_line("b").unwrap();
        assert_eq!(sink.output(), "a\nb\n");
    }

    #[test]
    fn test_buffer_clear() {
        let mut sink = BufferSink::new();
        sink.send_line("set xrange [-1:1]").unwrap();
        sink.clear();
        assert!(sink.lines().is_empty());
        assert_eq!(sink.output(), "");
    }
}
