//! termform - accessible form controls for terminal applications
//!
//! A small component library centered on a dropdown (custom select) control
//! that behaves like a native select box:
//! - Built from generic option descriptors, flat or grouped into sections
//! - Keyboard and pointer navigation with a label/list focus model
//! - A process-wide click-outside registry shared by every open instance
//! - Lifecycle callbacks (`on_opened` / `on_closed` / `on_changed`) fired
//!   strictly after the state they report is committed
//!
//! A range slider ships alongside it, plus the rendering, theming, and event
//! plumbing both controls sit on.

pub mod component;
pub mod components;
pub mod context;
pub mod event;
pub mod layout;
pub mod options;
pub mod outside;
pub mod render;
pub mod terminal;
pub mod theme;

// Re-export commonly used types
pub use component::Component;
pub use components::{
    Dropdown, Effect, FocusDirection, FocusRequest, SelectState, SelectedOption, Slider, Snapshot,
};
pub use context::RenderContext;
pub use event::{Event, EventHandler, EventPoller, Key, MouseButton, MouseEvent};
pub use layout::Rect;
pub use options::{Children, OptionDescriptor, Section};
pub use outside::HandlerId;
pub use render::Renderer;
pub use terminal::{TerminalCapabilities, TerminalContext, TerminalGeometry};
pub use theme::{BorderChars, Color, Theme, Variant};
