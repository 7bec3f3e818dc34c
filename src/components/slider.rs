//! Range slider component
//!
//! A single-value slider over a numeric range with a configurable step.
//! Arrow keys nudge the value by one step, Home/End jump to the ends, and
//! pointer presses or drags on the track set the value directly. The
//! column-to-value mapping is plain arithmetic over the track bounds recorded
//! at render time.
//!
//! # Example
//!
//! ```ignore
//! let mut slider = Slider::new(0.0, 100.0)
//!     .with_step(5.0)
//!     .with_value(50.0)
//!     .on_change(|value| println!("volume: {value}"));
//! ```

use crate::component::Component;
use crate::context::RenderContext;
use crate::event::{Event, EventHandler, Key, MouseButton, MouseEvent};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Variant;
use anyhow::Result;

/// Callback fired with the new value after it changes
pub type OnChange = Box<dyn FnMut(f64)>;

/// Single-value range slider
pub struct Slider {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    name: String,
    width: u16,
    /// Per-control theme variant; None inherits the context theme
    variant: Option<Variant>,
    on_change: Option<OnChange>,

    /// Track bounds recorded at render time, for pointer mapping
    track_bounds: Option<Rect>,

    /// Whether this component has focus
    focused: bool,

    /// Whether the component needs redraw
    dirty: bool,
}

impl Slider {
    /// Create a slider over `[min, max]` with step 1, valued at the midpoint
    pub fn new(min: f64, max: f64) -> Self {
        let mut slider = Slider {
            min,
            max,
            step: 1.0,
            value: 0.0,
            name: "slider".to_string(),
            width: 20,
            variant: None,
            on_change: None,
            track_bounds: None,
            focused: false,
            dirty: true,
        };
        slider.value = slider.snap(min + (max - min) / 2.0);
        slider
    }

    /// Set the step increment
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step.abs().max(f64::EPSILON);
        self.value = self.snap(self.value);
        self
    }

    /// Set the initial value, snapped to the step grid and clamped
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = self.snap(value);
        self
    }

    /// Name identifying this control to the host
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Track width in cells
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(3);
        self
    }

    /// Render with a fixed theme variant instead of the context theme
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the callback fired when the value changes
    pub fn on_change<F: FnMut(f64) + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position within the range as a percentage in `[0, 100]`
    pub fn percentage(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        (self.value - self.min) / (self.max - self.min) * 100.0
    }

    /// Set the value, snapping to the step grid and clamping to the range
    ///
    /// Fires `on_change` only when the stored value actually changes.
    pub fn set_value(&mut self, value: f64) {
        let snapped = self.snap(value);
        if snapped == self.value {
            return;
        }
        self.value = snapped;
        self.dirty = true;
        if let Some(callback) = self.on_change.as_mut() {
            callback(snapped);
        }
    }

    /// Nudge the value by `steps` step increments (negative moves left)
    pub fn nudge(&mut self, steps: i32) {
        self.set_value(self.value + f64::from(steps) * self.step);
    }

    /// Set terminal focus state
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.dirty = true;
        }
    }

    fn snap(&self, value: f64) -> f64 {
        let stepped = self.min + ((value - self.min) / self.step).round() * self.step;
        stepped.clamp(self.min, self.max)
    }

    /// Map a track column to a value; plain linear interpolation
    fn value_at(&self, col: u16, track: Rect) -> f64 {
        if track.width <= 1 {
            return self.min;
        }
        let offset = col.saturating_sub(track.x).min(track.width - 1);
        let fraction = f64::from(offset) / f64::from(track.width - 1);
        self.min + fraction * (self.max - self.min)
    }

    fn handle_press(&mut self, col: u16, row: u16) -> bool {
        let Some(track) = self.track_bounds else {
            return false;
        };
        if !track.contains(col, row) {
            return false;
        }
        self.set_value(self.value_at(col, track));
        true
    }
}

impl EventHandler for Slider {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if self.focused => match key {
                Key::Left | Key::Down => {
                    self.nudge(-1);
                    true
                }
                Key::Right | Key::Up => {
                    self.nudge(1);
                    true
                }
                Key::Home => {
                    self.set_value(self.min);
                    true
                }
                Key::End => {
                    self.set_value(self.max);
                    true
                }
                _ => false,
            },
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row))
            | Event::Mouse(MouseEvent::Drag(col, row)) => self.handle_press(*col, *row),
            _ => false,
        }
    }

    fn on_blur(&mut self) {
        self.set_focused(false);
    }

    fn on_focus(&mut self) {
        self.set_focused(true);
    }
}

impl Component for Slider {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let override_theme = self
            .variant
            .filter(|v| *v != ctx.theme.variant)
            .map(|v| ctx.theme.with_variant(v));
        let ctx = match &override_theme {
            Some(theme) => ctx.with_theme(theme),
            None => ctx.clone(),
        };
        let theme = ctx.theme;

        let width = self.width.min(bounds.width).max(3);
        let track = Rect::new(bounds.x, bounds.y, width, 1);

        // handle sits at the cell nearest the current fraction
        let fraction = self.percentage() / 100.0;
        let handle = (fraction * f64::from(width - 1)).round() as u16;

        renderer.move_cursor(track.x, track.y)?;
        let filled = format!("{}●", "━".repeat(handle as usize));
        renderer.write_styled(&filled, &theme.fill_style())?;
        if handle + 1 < width {
            let rest = "─".repeat((width - handle - 1) as usize);
            renderer.write_styled(&rest, &theme.track_style())?;
        }

        self.track_bounds = Some(track);
        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        (3, 1)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        &self.name
    }
}
