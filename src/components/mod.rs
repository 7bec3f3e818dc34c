//! Built-in form controls

pub mod dropdown;
pub mod slider;

pub use dropdown::{
    Dropdown, Effect, FocusDirection, FocusRequest, SelectState, SelectedOption, Snapshot,
};
pub use slider::Slider;
