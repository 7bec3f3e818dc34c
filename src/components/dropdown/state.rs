//! Selection and focus state machine for the dropdown
//!
//! The machine is pure: it owns `open`, the focus cursor, and the selected
//! option, and every transition returns the ordered side effects the
//! component shell must perform. State is committed before the effects are
//! returned, so an effect handler (a host callback, say) always observes the
//! post-transition state. No presentation concern leaks in here; translating
//! `FocusLabel` / `FocusOption` into a real focus move is the shell's job.

use crate::options::OptionDescriptor;

/// The currently chosen option
///
/// Carries only identity and display data; the advisory `selected` flag of
/// the descriptor it came from is not part of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl From<&OptionDescriptor> for SelectedOption {
    fn from(opt: &OptionDescriptor) -> Self {
        SelectedOption {
            id: opt.id.clone(),
            label: opt.label.clone(),
            value: opt.value.clone(),
        }
    }
}

/// Direction of a focus-move request through the option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Towards the start of the list (arrow up)
    Previous,
    /// Towards the end of the list (arrow down)
    Next,
}

impl FocusDirection {
    fn delta(self) -> i64 {
        match self {
            FocusDirection::Previous => -1,
            FocusDirection::Next => 1,
        }
    }
}

/// Ordered side effects of a transition
///
/// The shell performs them in sequence: registry mutation first, then focus
/// notification, then lifecycle callbacks. `Changed` always precedes
/// `Closed` when both occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Register this instance's handler on the click-outside registry
    AcquireOutsideClick,
    /// Remove this instance's handler from the click-outside registry
    ReleaseOutsideClick,
    /// Return focus to the label/trigger element
    FocusLabel,
    /// Move focus to the option at this flattened-list index
    FocusOption(usize),
    /// Fire the `on_opened` callback
    Opened,
    /// Fire the `on_closed` callback
    Closed,
    /// Fire the `on_changed` callback with the newly selected option
    Changed(SelectedOption),
}

/// Interaction state of one dropdown instance
#[derive(Debug, Clone, Default)]
pub struct SelectState {
    open: bool,
    focused: Option<usize>,
    selected: Option<SelectedOption>,
}

impl SelectState {
    /// Create the state, optionally seeded with an initial selection
    pub fn new(seed: Option<SelectedOption>) -> Self {
        SelectState {
            open: false,
            focused: None,
            selected: seed,
        }
    }

    /// Whether the option list is visible
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Focus cursor: index into the flattened option list, or None when
    /// focus is on the label
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The currently chosen option, if any
    pub fn selected(&self) -> Option<&SelectedOption> {
        self.selected.as_ref()
    }

    /// Label activated: toggle between open and closed
    pub fn activate_label(&mut self) -> Vec<Effect> {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Imperative open; no-op while already open
    pub fn open(&mut self) -> Vec<Effect> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        self.focused = None;
        vec![
            Effect::AcquireOutsideClick,
            Effect::FocusLabel,
            Effect::Opened,
        ]
    }

    /// Imperative close; no-op while already closed
    ///
    /// Focus returns to the label on every closing transition, however it
    /// was triggered.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.focused = None;
        vec![
            Effect::ReleaseOutsideClick,
            Effect::FocusLabel,
            Effect::Closed,
        ]
    }

    /// A pointer press landed outside the control's root while open
    pub fn outside_click(&mut self) -> Vec<Effect> {
        self.close()
    }

    /// An option was activated while open
    ///
    /// Selecting a value different from the current one commits the new
    /// selection before any effect is visible; `Changed` then precedes
    /// `Closed`. Re-selecting the current value just closes.
    pub fn activate_option(&mut self, opt: &OptionDescriptor) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }

        let changed = self
            .selected
            .as_ref()
            .map_or(true, |current| current.value != opt.value);

        self.open = false;
        self.focused = None;

        let mut effects = vec![Effect::ReleaseOutsideClick, Effect::FocusLabel];
        if changed {
            let selected = SelectedOption::from(opt);
            self.selected = Some(selected.clone());
            effects.push(Effect::Changed(selected));
        }
        effects.push(Effect::Closed);
        effects
    }

    /// Drop the focus cursor back to the label if the option list shrank
    /// beneath it; called when the child tree is replaced
    pub fn clamp_focus(&mut self, option_count: usize) {
        if let Some(index) = self.focused {
            if index >= option_count {
                self.focused = None;
            }
        }
    }

    /// Move the focus cursor through a list of `option_count` options
    ///
    /// From the label (None), the cursor enters the list at the near end.
    /// Stepping past either end returns focus to the label rather than
    /// wrapping around to the opposite end. A no-op while closed or when the
    /// list is empty.
    pub fn move_focus(&mut self, direction: FocusDirection, option_count: usize) -> Vec<Effect> {
        if !self.open || option_count == 0 {
            return Vec::new();
        }

        let next = match self.focused {
            None => match direction {
                FocusDirection::Next => 0,
                FocusDirection::Previous => option_count as i64 - 1,
            },
            Some(index) => index as i64 + direction.delta(),
        };

        if next < 0 || next >= option_count as i64 {
            self.focused = None;
            vec![Effect::FocusLabel]
        } else {
            self.focused = Some(next as usize);
            vec![Effect::FocusOption(next as usize)]
        }
    }
}
