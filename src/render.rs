//! Rendering backend - buffered terminal output and cursor management
//!
//! Output is buffered to minimize syscalls; call `flush()` after a batch of
//! drawing operations. A headless mode captures output for tests.

use crate::terminal::TerminalContext;
use anyhow::Result;
use std::io::{self, BufWriter, Write};

/// Default buffer capacity for write batching (16KB)
const WRITE_BUFFER_CAPACITY: usize = 16 * 1024;

enum Sink {
    Terminal(BufWriter<io::Stdout>),
    Buffer(Vec<u8>),
}

impl Sink {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Sink::Terminal(w) => w,
            Sink::Buffer(buf) => buf,
        }
    }
}

/// Terminal renderer handling cursor movement and styled text output
pub struct Renderer {
    sink: Sink,
    context: TerminalContext,
    in_alt_screen: bool,
}

impl Renderer {
    /// Create a renderer writing to the real terminal
    pub fn new() -> Result<Self> {
        let context = TerminalContext::detect()?;
        let writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, io::stdout());

        Ok(Renderer {
            sink: Sink::Terminal(writer),
            context,
            in_alt_screen: false,
        })
    }

    /// Create a headless renderer capturing output in memory
    ///
    /// Used by tests and by hosts that post-process frames themselves.
    pub fn headless() -> Self {
        Renderer {
            sink: Sink::Buffer(Vec::new()),
            context: TerminalContext::headless(80, 24),
            in_alt_screen: false,
        }
    }

    /// Enter the alternative screen buffer
    pub fn enter_alt_screen(&mut self) -> Result<()> {
        if !self.in_alt_screen {
            write!(self.sink.writer(), "\x1b[?1049h")?;
            self.flush()?;
            self.in_alt_screen = true;
        }
        Ok(())
    }

    /// Exit the alternative screen buffer
    pub fn exit_alt_screen(&mut self) -> Result<()> {
        if self.in_alt_screen {
            write!(self.sink.writer(), "\x1b[?1049l")?;
            self.flush()?;
            self.in_alt_screen = false;
        }
        Ok(())
    }

    /// Clear the screen
    pub fn clear(&mut self) -> Result<()> {
        write!(self.sink.writer(), "\x1b[2J")?;
        Ok(())
    }

    /// Move cursor to position (0-indexed)
    #[inline]
    pub fn move_cursor(&mut self, col: u16, row: u16) -> Result<()> {
        write!(self.sink.writer(), "\x1b[{};{}H", row + 1, col + 1)?;
        Ok(())
    }

    /// Hide cursor
    pub fn hide_cursor(&mut self) -> Result<()> {
        write!(self.sink.writer(), "\x1b[?25l")?;
        Ok(())
    }

    /// Show cursor
    pub fn show_cursor(&mut self) -> Result<()> {
        write!(self.sink.writer(), "\x1b[?25h")?;
        Ok(())
    }

    /// Write text at the current cursor position
    #[inline]
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        write!(self.sink.writer(), "{}", text)?;
        Ok(())
    }

    /// Write text wrapped in ANSI style codes, resetting afterwards
    #[inline]
    pub fn write_styled(&mut self, text: &str, style: &str) -> Result<()> {
        write!(self.sink.writer(), "{}{}\x1b[0m", style, text)?;
        Ok(())
    }

    /// Write a repeated character
    #[inline]
    pub fn write_repeated(&mut self, ch: char, count: usize) -> Result<()> {
        for _ in 0..count {
            write!(self.sink.writer(), "{}", ch)?;
        }
        Ok(())
    }

    /// Flush buffered output to the terminal
    pub fn flush(&mut self) -> Result<()> {
        self.sink.writer().flush()?;
        Ok(())
    }

    /// Get the current terminal context
    pub fn context(&self) -> &TerminalContext {
        &self.context
    }

    /// Refresh terminal geometry (call after resize)
    pub fn refresh_geometry(&mut self) -> Result<()> {
        if matches!(self.sink, Sink::Terminal(_)) {
            self.context.refresh_geometry()?;
        }
        Ok(())
    }

    /// Captured output of a headless renderer
    ///
    /// Returns an empty string for terminal-backed renderers.
    pub fn captured(&self) -> String {
        match &self.sink {
            Sink::Buffer(buf) => String::from_utf8_lossy(buf).into_owned(),
            Sink::Terminal(_) => String::new(),
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Restore terminal state even when dropped during a panic
        let _ = self.exit_alt_screen();
        let _ = self.show_cursor();
        let _ = self.flush();
    }
}
