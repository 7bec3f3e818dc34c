//! Terminal abstraction - geometry and capability detection

use anyhow::{Context, Result};

/// Terminal geometry in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    /// Terminal width in columns
    pub cols: u16,
    /// Terminal height in rows
    pub rows: u16,
}

impl TerminalGeometry {
    /// Get current terminal geometry
    pub fn detect() -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size().context("Failed to get terminal size")?;
        Ok(TerminalGeometry { cols, rows })
    }

    /// Fixed geometry, used by the headless renderer in tests
    pub fn fixed(cols: u16, rows: u16) -> Self {
        TerminalGeometry { cols, rows }
    }
}

/// Terminal capability detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Supports 24-bit true color
    pub truecolor: bool,
    /// Supports 256 colors
    pub colors_256: bool,
    /// Supports mouse events
    pub mouse: bool,
}

impl TerminalCapabilities {
    /// Detect capabilities from the environment
    pub fn detect() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        let colorterm = std::env::var("COLORTERM").unwrap_or_default();

        let truecolor = colorterm.contains("truecolor")
            || colorterm.contains("24bit")
            || std::env::var("KITTY_WINDOW_ID").is_ok();
        let colors_256 = term.contains("256") || truecolor;

        // Most modern terminals report mouse events through crossterm
        let mouse = true;

        TerminalCapabilities {
            truecolor,
            colors_256,
            mouse,
        }
    }

    /// Conservative capabilities for headless rendering in tests
    pub fn minimal() -> Self {
        TerminalCapabilities {
            truecolor: false,
            colors_256: false,
            mouse: false,
        }
    }
}

/// Complete terminal context combining geometry and capabilities
#[derive(Debug, Clone)]
pub struct TerminalContext {
    pub geometry: TerminalGeometry,
    pub capabilities: TerminalCapabilities,
}

impl TerminalContext {
    /// Create a new terminal context by detecting the current environment
    pub fn detect() -> Result<Self> {
        Ok(TerminalContext {
            geometry: TerminalGeometry::detect()?,
            capabilities: TerminalCapabilities::detect(),
        })
    }

    /// Context with fixed geometry and minimal capabilities (headless)
    pub fn headless(cols: u16, rows: u16) -> Self {
        TerminalContext {
            geometry: TerminalGeometry::fixed(cols, rows),
            capabilities: TerminalCapabilities::minimal(),
        }
    }

    /// Refresh geometry (e.g., after a terminal resize)
    pub fn refresh_geometry(&mut self) -> Result<()> {
        self.geometry = TerminalGeometry::detect()?;
        Ok(())
    }

    /// Get character dimensions
    pub fn char_dimensions(&self) -> (u16, u16) {
        (self.geometry.cols, self.geometry.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_geometry() {
        let geom = TerminalGeometry::fixed(80, 24);
        assert_eq!(geom.cols, 80);
        assert_eq!(geom.rows, 24);
    }

    #[test]
    fn test_capabilities_detect() {
        let caps = TerminalCapabilities::detect();
        // truecolor implies 256-color support
        assert!(caps.colors_256 || !caps.truecolor);
    }

    #[test]
    fn test_headless_context() {
        let ctx = TerminalContext::headless(40, 10);
        assert_eq!(ctx.char_dimensions(), (40, 10));
        assert!(!ctx.capabilities.truecolor);
    }
}
