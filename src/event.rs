//! Event system - keyboard, mouse, and terminal events

use anyhow::Result;
use std::time::Duration;

/// Keyboard key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    BackTab,
    Backspace,
    Enter,
    Esc,
    Null,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse event types, positions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press(MouseButton, u16, u16),
    Release(u16, u16),
    Drag(u16, u16),
}

impl MouseEvent {
    /// Cell position of the event
    pub fn position(&self) -> (u16, u16) {
        match *self {
            MouseEvent::Press(_, col, row) => (col, row),
            MouseEvent::Release(col, row) => (col, row),
            MouseEvent::Drag(col, row) => (col, row),
        }
    }
}

/// UI events delivered to components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(Key),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized (new cols, new rows)
    Resize(u16, u16),
}

impl Event {
    /// Position of a pointer press, if this event is one
    ///
    /// Hosts forward press positions to the click-outside registry; see
    /// [`crate::outside::dispatch_click`].
    pub fn press_position(&self) -> Option<(u16, u16)> {
        match self {
            Event::Mouse(MouseEvent::Press(_, col, row)) => Some((*col, *row)),
            _ => None,
        }
    }
}

/// Event handler trait for components
pub trait EventHandler {
    /// Handle an event, return true if consumed (stops propagation)
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }

    /// Called when the component gains terminal focus
    fn on_focus(&mut self) {}

    /// Called when the component loses terminal focus
    fn on_blur(&mut self) {}
}

/// Event polling and conversion from crossterm events
pub struct EventPoller {
    _enabled: bool,
}

impl EventPoller {
    /// Create a new event poller, entering raw mode and enabling mouse capture
    pub fn new() -> Result<Self> {
        crossterm::terminal::enable_raw_mode()?;

        // Mouse capture may be unavailable; keyboard still works without it
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);

        Ok(EventPoller { _enabled: true })
    }

    /// Poll for the next event with a timeout
    pub fn poll(&self, timeout: Duration) -> Result<Option<Event>> {
        if crossterm::event::poll(timeout)? {
            Ok(convert_crossterm_event(crossterm::event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Block and wait for the next event
    pub fn read(&self) -> Result<Event> {
        loop {
            if let Some(event) = convert_crossterm_event(crossterm::event::read()?) {
                return Ok(event);
            }
        }
    }
}

impl Drop for EventPoller {
    fn drop(&mut self) {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Convert a crossterm event to our Event type
///
/// Events with no counterpart in this library (focus, paste, mouse movement)
/// convert to None.
fn convert_crossterm_event(event: crossterm::event::Event) -> Option<Event> {
    use crossterm::event::{Event as CEvent, KeyEvent, MouseEventKind};

    match event {
        CEvent::Key(KeyEvent {
            code, modifiers, ..
        }) => Some(Event::Key(convert_key(code, modifiers))),
        CEvent::Mouse(me) => {
            let (col, row) = (me.column, me.row);
            let mouse_event = match me.kind {
                MouseEventKind::Down(btn) => {
                    let button = match btn {
                        crossterm::event::MouseButton::Left => MouseButton::Left,
                        crossterm::event::MouseButton::Right => MouseButton::Right,
                        crossterm::event::MouseButton::Middle => MouseButton::Middle,
                    };
                    MouseEvent::Press(button, col, row)
                }
                MouseEventKind::Up(_) => MouseEvent::Release(col, row),
                MouseEventKind::Drag(_) => MouseEvent::Drag(col, row),
                _ => return None,
            };
            Some(Event::Mouse(mouse_event))
        }
        CEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

/// Convert a crossterm key code to our Key type
fn convert_key(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> Key {
    use crossterm::event::{KeyCode, KeyModifiers};

    if mods.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = code {
            return Key::Ctrl(c);
        }
    }

    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_position() {
        let e = Event::Mouse(MouseEvent::Press(MouseButton::Left, 12, 3));
        assert_eq!(e.press_position(), Some((12, 3)));

        let e = Event::Mouse(MouseEvent::Release(12, 3));
        assert_eq!(e.press_position(), None);

        let e = Event::Key(Key::Enter);
        assert_eq!(e.press_position(), None);
    }

    #[test]
    fn test_mouse_position() {
        assert_eq!(MouseEvent::Drag(7, 9).position(), (7, 9));
    }
}
