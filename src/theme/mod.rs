//! Theming system with light/dark variants and automatic color degradation

mod color;

pub use color::{AnsiColor, Color};

use crate::terminal::TerminalCapabilities;

/// Theme variant selected per control via configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Light,
    Dark,
}

/// Theme defining the palette used by the form controls
#[derive(Debug, Clone)]
pub struct Theme {
    pub variant: Variant,

    pub text_fg: Color,
    pub label_fg: Color,
    pub placeholder_fg: Color,

    pub surface: Color,
    pub surface_elevated: Color,

    pub border_color: Color,
    pub focus_border_color: Color,

    pub track_fg: Color,
    pub fill_fg: Color,

    caps: TerminalCapabilities,
}

impl Theme {
    /// Create a theme in the given variant for the detected terminal
    pub fn new(variant: Variant, caps: TerminalCapabilities) -> Self {
        match variant {
            Variant::Light => Theme {
                variant,
                text_fg: Color::rgb(30, 30, 30),
                label_fg: Color::rgb(10, 10, 10),
                placeholder_fg: Color::dark_gray(),
                surface: Color::rgb(245, 245, 245),
                surface_elevated: Color::white(),
                border_color: Color::rgb(160, 160, 160),
                focus_border_color: Color::rgb(40, 90, 200),
                track_fg: Color::light_gray(),
                fill_fg: Color::rgb(40, 90, 200),
                caps,
            },
            Variant::Dark => Theme {
                variant,
                text_fg: Color::rgb(220, 220, 220),
                label_fg: Color::white(),
                placeholder_fg: Color::dark_gray(),
                surface: Color::rgb(20, 20, 25),
                surface_elevated: Color::rgb(30, 30, 35),
                border_color: Color::dark_gray(),
                focus_border_color: Color::rgb(100, 150, 255),
                track_fg: Color::rgb(70, 70, 75),
                fill_fg: Color::rgb(100, 150, 255),
                caps,
            },
        }
    }

    /// Light theme for the detected terminal
    pub fn light(caps: TerminalCapabilities) -> Self {
        Theme::new(Variant::Light, caps)
    }

    /// Dark theme for the detected terminal
    pub fn dark(caps: TerminalCapabilities) -> Self {
        Theme::new(Variant::Dark, caps)
    }

    /// Same palette rebuilt in another variant
    pub fn with_variant(&self, variant: Variant) -> Self {
        Theme::new(variant, self.caps)
    }

    /// Style for the always-visible label/trigger row
    pub fn label_style(&self) -> String {
        format!(
            "{}{}\x1b[1m",
            self.label_fg.degrade(&self.caps),
            self.surface.bg(&self.caps)
        )
    }

    /// Style for the label when nothing is selected yet
    pub fn placeholder_style(&self) -> String {
        format!(
            "{}{}",
            self.placeholder_fg.degrade(&self.caps),
            self.surface.bg(&self.caps)
        )
    }

    /// Style for an option row
    pub fn option_style(&self) -> String {
        format!(
            "{}{}",
            self.text_fg.degrade(&self.caps),
            self.surface_elevated.bg(&self.caps)
        )
    }

    /// Style for the option row holding the focus cursor
    pub fn focused_option_style(&self) -> String {
        // Reverse video keeps the cursor visible on any palette
        format!("{}\x1b[7m", self.text_fg.degrade(&self.caps))
    }

    /// Style for the currently selected option row
    pub fn selected_option_style(&self) -> String {
        format!(
            "{}{}\x1b[1m",
            self.fill_fg.degrade(&self.caps),
            self.surface_elevated.bg(&self.caps)
        )
    }

    /// Style for a slider track
    pub fn track_style(&self) -> String {
        self.track_fg.degrade(&self.caps)
    }

    /// Style for the filled portion of a slider track
    pub fn fill_style(&self) -> String {
        self.fill_fg.degrade(&self.caps)
    }

    /// Style for control borders
    pub fn border_style(&self, focused: bool) -> String {
        if focused {
            self.focus_border_color.degrade(&self.caps)
        } else {
            self.border_color.degrade(&self.caps)
        }
    }

    /// Border characters matching the terminal's capabilities
    ///
    /// Terminals reporting no color support are the ones least likely to
    /// render line-drawing glyphs, so they get plain ASCII.
    pub fn border_chars(&self) -> BorderChars {
        if self.caps.truecolor || self.caps.colors_256 {
            BorderChars::single()
        } else {
            BorderChars::ascii()
        }
    }
}

/// Border characters for drawing the open option list
#[derive(Debug, Clone)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderChars {
    pub fn single() -> Self {
        BorderChars {
            horizontal: '─',
            vertical: '│',
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
        }
    }

    pub fn ascii() -> Self {
        BorderChars {
            horizontal: '-',
            vertical: '|',
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_variants() {
        let caps = TerminalCapabilities::minimal();
        let light = Theme::light(caps);
        let dark = light.with_variant(Variant::Dark);

        assert_eq!(light.variant, Variant::Light);
        assert_eq!(dark.variant, Variant::Dark);
        assert_ne!(light.surface, dark.surface);
    }

    #[test]
    fn test_styles_not_empty() {
        let theme = Theme::dark(TerminalCapabilities::minimal());
        assert!(!theme.label_style().is_empty());
        assert!(theme.focused_option_style().contains("\x1b[7m"));
    }

    #[test]
    fn test_border_chars_degrade_with_capabilities() {
        let plain = Theme::dark(TerminalCapabilities::minimal());
        assert_eq!(plain.border_chars().horizontal, '-');
        assert_eq!(plain.border_chars().top_left, '+');

        let caps = TerminalCapabilities {
            truecolor: true,
            colors_256: true,
            mouse: true,
        };
        assert_eq!(Theme::dark(caps).border_chars().horizontal, '─');
    }
}
