//! Dropdown (custom select) control
//!
//! Behaves like a native select box while being built from generic option
//! descriptors. The interaction rules live in the pure state machine in
//! [`state`]; this shell owns the children, performs the effects each
//! transition returns (registry mutation, focus notification, lifecycle
//! callbacks), renders the label and option list, and records its root
//! bounds so outside clicks can be hit tested.
//!
//! # Example
//!
//! ```ignore
//! let children = Children::Flat(vec![
//!     OptionDescriptor::new("1", "Apples", "apples"),
//!     OptionDescriptor::new("2", "Pears", "pears").selected(),
//! ]);
//! let mut dropdown = Dropdown::new(children)
//!     .with_default_text("Please select...")
//!     .on_changed(|opt| println!("picked {}", opt.value));
//!
//! // host event loop:
//! //   dropdown.handle_event(&event);
//! //   if let Some((col, row)) = event.press_position() {
//! //       outside::dispatch_click(col, row);
//! //   }
//! ```

mod state;

pub use state::{Effect, FocusDirection, SelectState, SelectedOption};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::component::Component;
use crate::context::RenderContext;
use crate::event::{Event, EventHandler, Key, MouseButton, MouseEvent};
use crate::layout::Rect;
use crate::options::{Children, OptionDescriptor};
use crate::outside::{self, HandlerId};
use crate::render::Renderer;
use crate::theme::Variant;
use anyhow::Result;

/// Callback fired with the newly selected option
pub type OnChanged = Box<dyn FnMut(&SelectedOption)>;
/// Callback fired after the option list opened or closed
pub type OnToggle = Box<dyn FnMut()>;
/// Hook the presentation adapter uses to perform real focus moves
pub type OnFocusRequest = Box<dyn FnMut(FocusRequest)>;

/// Where the presentation layer should move focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    /// The always-visible label/trigger element
    Label,
    /// The option row at this flattened-list index
    Option(usize),
}

/// Render-time data snapshot handed to external presentation layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub open: bool,
    pub focused_option: Option<usize>,
    pub selected_option: Option<SelectedOption>,
}

struct Inner {
    state: SelectState,
    children: Children,
    /// Root bounds recorded at render time: label row plus the open menu.
    /// None until the control has been rendered at least once.
    bounds: Option<Rect>,
    label_bounds: Option<Rect>,
    menu_bounds: Option<Rect>,
    outside_token: Option<HandlerId>,
    legacy_close_all: bool,
    on_changed: Option<OnChanged>,
    on_opened: Option<OnToggle>,
    on_closed: Option<OnToggle>,
    on_focus_request: Option<OnFocusRequest>,
    dirty: bool,
}

impl Inner {
    /// Perform transition effects in order, strictly after the state commit
    fn perform(inner: &Rc<RefCell<Inner>>, effects: Vec<Effect>) {
        if effects.is_empty() {
            return;
        }
        inner.borrow_mut().dirty = true;

        for effect in effects {
            match effect {
                Effect::AcquireOutsideClick => {
                    let weak = Rc::downgrade(inner);
                    let token = outside::register(Box::new(move |col, row| {
                        Inner::body_clicked(&weak, col, row);
                    }));
                    inner.borrow_mut().outside_token = Some(token);
                }
                Effect::ReleaseOutsideClick => Self::release_outside(inner),
                Effect::FocusLabel => Self::request_focus(inner, FocusRequest::Label),
                Effect::FocusOption(index) => {
                    Self::request_focus(inner, FocusRequest::Option(index));
                }
                Effect::Opened => {
                    let cb = inner.borrow_mut().on_opened.take();
                    if let Some(mut cb) = cb {
                        cb();
                        inner.borrow_mut().on_opened.get_or_insert(cb);
                    }
                }
                Effect::Closed => {
                    let cb = inner.borrow_mut().on_closed.take();
                    if let Some(mut cb) = cb {
                        cb();
                        inner.borrow_mut().on_closed.get_or_insert(cb);
                    }
                }
                Effect::Changed(selected) => {
                    let cb = inner.borrow_mut().on_changed.take();
                    if let Some(mut cb) = cb {
                        cb(&selected);
                        inner.borrow_mut().on_changed.get_or_insert(cb);
                    }
                }
            }
        }
    }

    /// Release this instance's registry entry
    ///
    /// With the legacy flag set this clears the whole registry, reproducing
    /// the historical close-all behavior.
    fn release_outside(inner: &Rc<RefCell<Inner>>) {
        let (token, legacy) = {
            let mut b = inner.borrow_mut();
            (b.outside_token.take(), b.legacy_close_all)
        };
        if legacy {
            outside::unregister_all();
        } else if let Some(token) = token {
            outside::unregister(token);
        }
    }

    fn request_focus(inner: &Rc<RefCell<Inner>>, request: FocusRequest) {
        let hook = inner.borrow_mut().on_focus_request.take();
        if let Some(mut hook) = hook {
            hook(request);
            inner.borrow_mut().on_focus_request.get_or_insert(hook);
        }
    }

    /// Handler registered on the click-outside registry while open
    ///
    /// # Panics
    ///
    /// Panics if the control was opened but never rendered; an outside-click
    /// hit test needs the root bounds, and their absence is a host
    /// lifecycle-ordering bug.
    fn body_clicked(weak: &Weak<RefCell<Inner>>, col: u16, row: u16) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let effects = {
            let mut b = inner.borrow_mut();
            if !b.state.is_open() {
                return;
            }
            let Some(bounds) = b.bounds else {
                panic!("termform: outside-click check before the dropdown was rendered");
            };
            if bounds.contains(col, row) {
                return;
            }
            b.state.outside_click()
        };
        Inner::perform(&inner, effects);
    }
}

/// Accessible dropdown control built from generic option descriptors
pub struct Dropdown {
    inner: Rc<RefCell<Inner>>,
    default_text: String,
    width: u16,
    /// Per-control theme variant; None inherits the context theme
    variant: Option<Variant>,
    /// Whether this control has terminal focus
    focused: bool,
}

impl Dropdown {
    /// Create a dropdown from a child tree
    ///
    /// The initial selection is seeded from the first descriptor flagged
    /// `selected` in traversal order, if any.
    pub fn new(children: Children) -> Self {
        let seed = children.find_selected().map(SelectedOption::from);
        Dropdown {
            inner: Rc::new(RefCell::new(Inner {
                state: SelectState::new(seed),
                children,
                bounds: None,
                label_bounds: None,
                menu_bounds: None,
                outside_token: None,
                legacy_close_all: false,
                on_changed: None,
                on_opened: None,
                on_closed: None,
                on_focus_request: None,
                dirty: true,
            })),
            default_text: "Please select...".to_string(),
            width: 20,
            variant: None,
            focused: false,
        }
    }

    /// Label shown while nothing is selected
    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }

    /// Width in cells for both the label and the option rows
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Render with a fixed theme variant instead of the context theme
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Reproduce the historical behavior where closing this dropdown clears
    /// every instance's click-outside handler, not just its own
    pub fn with_legacy_close_all(self, legacy: bool) -> Self {
        self.inner.borrow_mut().legacy_close_all = legacy;
        self
    }

    /// Set the callback fired when the selection changes
    pub fn on_changed<F: FnMut(&SelectedOption) + 'static>(self, callback: F) -> Self {
        self.inner.borrow_mut().on_changed = Some(Box::new(callback));
        self
    }

    /// Set the callback fired after the option list opens
    pub fn on_opened<F: FnMut() + 'static>(self, callback: F) -> Self {
        self.inner.borrow_mut().on_opened = Some(Box::new(callback));
        self
    }

    /// Set the callback fired after the option list closes
    pub fn on_closed<F: FnMut() + 'static>(self, callback: F) -> Self {
        self.inner.borrow_mut().on_closed = Some(Box::new(callback));
        self
    }

    /// Set the hook invoked when focus should move to the label or an option
    pub fn on_focus_request<F: FnMut(FocusRequest) + 'static>(self, hook: F) -> Self {
        self.inner.borrow_mut().on_focus_request = Some(Box::new(hook));
        self
    }

    /// Replace the child tree
    ///
    /// The focus cursor is dropped back to the label if the new list is too
    /// short for it; the committed selection is left untouched.
    pub fn set_children(&mut self, children: Children) {
        let mut b = self.inner.borrow_mut();
        let count = children.len();
        b.children = children;
        b.state.clamp_focus(count);
        b.dirty = true;
    }

    /// Render-time snapshot of the interaction state
    pub fn snapshot(&self) -> Snapshot {
        let b = self.inner.borrow();
        Snapshot {
            open: b.state.is_open(),
            focused_option: b.state.focused(),
            selected_option: b.state.selected().cloned(),
        }
    }

    /// Whether the option list is visible
    pub fn is_open(&self) -> bool {
        self.inner.borrow().state.is_open()
    }

    /// The currently chosen option, if any
    pub fn selected(&self) -> Option<SelectedOption> {
        self.inner.borrow().state.selected().cloned()
    }

    /// Open the option list (imperative API); no-op while open
    pub fn open(&mut self) {
        let effects = self.inner.borrow_mut().state.open();
        Inner::perform(&self.inner, effects);
    }

    /// Close the option list (imperative API); no-op while closed
    pub fn close(&mut self) {
        let effects = self.inner.borrow_mut().state.close();
        Inner::perform(&self.inner, effects);
    }

    /// The label/trigger was activated: toggle open and closed
    pub fn activate_label(&mut self) {
        let effects = self.inner.borrow_mut().state.activate_label();
        Inner::perform(&self.inner, effects);
    }

    /// An option row was activated
    ///
    /// The descriptor must come from the currently rendered list; the
    /// presentation layer is responsible for only emitting descriptors it
    /// rendered.
    pub fn activate_option(&mut self, opt: &OptionDescriptor) {
        let effects = self.inner.borrow_mut().state.activate_option(opt);
        Inner::perform(&self.inner, effects);
    }

    /// Move the focus cursor up or down the option list
    ///
    /// # Panics
    ///
    /// Panics if called before the control has been rendered; moving focus
    /// needs a mounted presentation to land on.
    pub fn move_focus(&mut self, direction: FocusDirection) {
        let effects = {
            let mut b = self.inner.borrow_mut();
            assert!(
                b.bounds.is_some(),
                "termform: focus move before the dropdown was rendered"
            );
            let count = b.children.len();
            b.state.move_focus(direction, count)
        };
        Inner::perform(&self.inner, effects);
    }

    /// Set terminal focus state; only focused controls consume key events
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.inner.borrow_mut().dirty = true;
        }
    }

    /// Check if this control has terminal focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_key(&mut self, key: Key) -> bool {
        let open = self.is_open();
        match key {
            Key::Enter | Key::Char(' ') => {
                let focused_option = {
                    let b = self.inner.borrow();
                    b.state
                        .focused()
                        .and_then(|i| b.children.get(i).cloned())
                };
                match focused_option {
                    Some(opt) if open => self.activate_option(&opt),
                    _ => self.activate_label(),
                }
                true
            }
            Key::Up if open => {
                self.move_focus(FocusDirection::Previous);
                true
            }
            Key::Down if open => {
                self.move_focus(FocusDirection::Next);
                true
            }
            Key::Esc if open => {
                self.close();
                true
            }
            _ => false,
        }
    }

    fn handle_press(&mut self, col: u16, row: u16) -> bool {
        let (label_bounds, menu_bounds) = {
            let b = self.inner.borrow();
            (b.label_bounds, b.menu_bounds)
        };

        if label_bounds.is_some_and(|r| r.contains(col, row)) {
            self.activate_label();
            return true;
        }

        if let Some(menu) = menu_bounds {
            if menu.contains(col, row) {
                // the first and last rows are border; presses there are
                // inside the control but activate nothing
                if row > menu.y && row + 1 < menu.bottom() {
                    let index = (row - menu.y - 1) as usize;
                    let opt = self.inner.borrow().children.get(index).cloned();
                    if let Some(opt) = opt {
                        self.activate_option(&opt);
                    }
                }
                return true;
            }
        }

        false
    }
}

impl EventHandler for Dropdown {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if self.focused => self.handle_key(*key),
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) => {
                self.handle_press(*col, *row)
            }
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

impl Component for Dropdown {
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

        let width = self.width.min(bounds.width).max(4);
        let label_rect = Rect::new(bounds.x, bounds.y, width, 1);

        let mut b = self.inner.borrow_mut();
        let open = b.state.is_open();
        let focused_option = b.state.focused();
        let selected_value = b.state.selected().map(|s| s.value.clone());

        // Label row: selected label or placeholder, arrow indicating state
        let (text, style) = match b.state.selected() {
            Some(selected) => (selected.label.clone(), theme.label_style()),
            None => (self.default_text.clone(), theme.placeholder_style()),
        };
        let arrow = if open { '▴' } else { '▾' };
        let body = fit(&text, width as usize - 2);
        renderer.move_cursor(label_rect.x, label_rect.y)?;
        renderer.write_styled(&format!("{body} {arrow}"), &style)?;

        // Bordered option list, clipped to the space below the label
        let mut menu_rect = None;
        if open {
            let count = b.children.len() as u16;
            let height = (count + 2).min(bounds.height.saturating_sub(1));
            let menu = Rect::new(bounds.x, bounds.y + 1, width, height);

            let border = theme.border_chars();
            let border_style = theme.border_style(self.focused);
            let inner_width = width.saturating_sub(2) as usize;
            let horizontal: String = border.horizontal.to_string().repeat(inner_width);
            let vertical = border.vertical.to_string();

            renderer.move_cursor(menu.x, menu.y)?;
            renderer.write_styled(
                &format!("{}{horizontal}{}", border.top_left, border.top_right),
                &border_style,
            )?;

            let visible = height.saturating_sub(2) as usize;
            for (i, opt) in b.children.options().enumerate().take(visible) {
                let row = menu.row(i as u16 + 1);
                let is_selected = selected_value.as_deref() == Some(opt.value.as_str());
                let style = if focused_option == Some(i) {
                    theme.focused_option_style()
                } else if is_selected {
                    theme.selected_option_style()
                } else {
                    theme.option_style()
                };
                let marker = if is_selected { "✓ " } else { "  " };
                let line = fit(&format!("{marker}{}", opt.label), inner_width);
                renderer.move_cursor(row.x, row.y)?;
                renderer.write_styled(&vertical, &border_style)?;
                renderer.write_styled(&line, &style)?;
                renderer.write_styled(&vertical, &border_style)?;
            }

            renderer.move_cursor(menu.x, menu.bottom() - 1)?;
            renderer.write_styled(
                &format!("{}{horizontal}{}", border.bottom_left, border.bottom_right),
                &border_style,
            )?;
            menu_rect = Some(menu);
        }

        b.label_bounds = Some(label_rect);
        b.menu_bounds = menu_rect;
        b.bounds = Some(match menu_rect {
            Some(menu) => label_rect.union(menu),
            None => label_rect,
        });
        b.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        let b = self.inner.borrow();
        let rows = if b.state.is_open() {
            // label row plus the bordered option list
            3 + b.children.len() as u16
        } else {
            1
        };
        (self.width, rows)
    }

    fn on_unmount(&mut self) {
        Inner::release_outside(&self.inner);
    }

    fn mark_dirty(&mut self) {
        self.inner.borrow_mut().dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.inner.borrow().dirty
    }

    fn name(&self) -> &str {
        "Dropdown"
    }
}

impl Drop for Dropdown {
    fn drop(&mut self) {
        // Backstop for hosts that never call on_unmount
        Inner::release_outside(&self.inner);
    }
}

/// Pad or truncate text to an exact cell width
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Section;
    use crate::terminal::TerminalCapabilities;
    use crate::theme::Theme;

    fn opt(value: &str) -> OptionDescriptor {
        OptionDescriptor::new(format!("id-{value}"), value.to_uppercase(), value)
    }

    fn children_ab() -> Children {
        Children::Flat(vec![opt("a"), opt("b").selected()])
    }

    fn mount(dropdown: &mut Dropdown) {
        let mut renderer = Renderer::headless();
        let theme = Theme::dark(TerminalCapabilities::minimal());
        let ctx = RenderContext::new(&theme);
        dropdown
            .render(&mut renderer, Rect::new(0, 0, 40, 12), &ctx)
            .unwrap();
    }

    #[test]
    fn test_seeds_selection_from_children() {
        let dropdown = Dropdown::new(children_ab());
        assert_eq!(dropdown.selected().unwrap().value, "b");
    }

    #[test]
    fn test_seeds_nothing_without_selected_flag() {
        let dropdown = Dropdown::new(Children::Flat(vec![opt("a")]));
        assert!(dropdown.selected().is_none());
    }

    #[test]
    fn test_open_registers_exactly_one_handler() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab());

        dropdown.open();
        assert!(dropdown.is_open());
        assert_eq!(outside::handler_count(), 1);

        // reopening while open does not double-register
        dropdown.open();
        assert_eq!(outside::handler_count(), 1);

        dropdown.close();
        assert_eq!(outside::handler_count(), 0);
        assert!(!outside::listener_attached());
    }

    #[test]
    fn test_callback_order_changed_then_closed() {
        outside::unregister_all();
        let log = Rc::new(RefCell::new(Vec::new()));
        let l1 = log.clone();
        let l2 = log.clone();

        let mut dropdown = Dropdown::new(Children::Flat(vec![opt("x"), opt("z")]))
            .on_changed(move |selected| {
                l1.borrow_mut().push(format!("changed:{}", selected.value));
            })
            .on_closed(move || l2.borrow_mut().push("closed".to_string()));

        dropdown.open();
        dropdown.activate_option(&opt("z"));

        assert_eq!(*log.borrow(), vec!["changed:z", "closed"]);
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected().unwrap().value, "z");
    }

    #[test]
    fn test_reselecting_same_value_never_fires_changed() {
        outside::unregister_all();
        let log = Rc::new(RefCell::new(Vec::new()));
        let l1 = log.clone();
        let l2 = log.clone();

        let mut dropdown = Dropdown::new(children_ab())
            .on_changed(move |_| l1.borrow_mut().push("changed"))
            .on_closed(move || l2.borrow_mut().push("closed"));

        dropdown.open();
        dropdown.activate_option(&opt("b"));

        assert_eq!(*log.borrow(), vec!["closed"]);
    }

    #[test]
    fn test_opened_callback_fires_after_state_commit() {
        outside::unregister_all();
        let seen = Rc::new(RefCell::new(false));
        let s = seen.clone();
        let mut dropdown = Dropdown::new(children_ab()).on_opened(move || {
            *s.borrow_mut() = true;
        });

        dropdown.open();
        assert!(*seen.borrow());
    }

    #[test]
    fn test_outside_click_closes_and_releases() {
        outside::unregister_all();
        let closed = Rc::new(RefCell::new(0));
        let c = closed.clone();
        let mut dropdown = Dropdown::new(children_ab()).on_closed(move || *c.borrow_mut() += 1);

        mount(&mut dropdown);
        dropdown.open();
        mount(&mut dropdown); // open menu now part of the root bounds

        // click inside the control: stays open
        outside::dispatch_click(1, 1);
        assert!(dropdown.is_open());

        // click outside: closes, fires on_closed, releases the handler
        outside::dispatch_click(60, 20);
        assert!(!dropdown.is_open());
        assert_eq!(*closed.borrow(), 1);
        assert_eq!(outside::handler_count(), 0);

        // an unrelated later click produces no further state change
        outside::dispatch_click(60, 20);
        assert_eq!(*closed.borrow(), 1);
    }

    #[test]
    #[should_panic(expected = "before the dropdown was rendered")]
    fn test_outside_click_before_render_is_loud() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab());
        dropdown.open();
        outside::dispatch_click(0, 0);
    }

    #[test]
    #[should_panic(expected = "before the dropdown was rendered")]
    fn test_move_focus_before_render_is_loud() {
        let mut dropdown = Dropdown::new(children_ab());
        dropdown.open();
        dropdown.move_focus(FocusDirection::Next);
    }

    #[test]
    fn test_keyboard_navigation_and_selection() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(Children::Sectioned(vec![
            Section::new(vec![opt("x")]),
            Section::new(vec![opt("y"), opt("z")]),
        ]));
        mount(&mut dropdown);
        dropdown.set_focused(true);

        // Enter on the label opens
        assert!(dropdown.handle_event(&Event::Key(Key::Enter)));
        assert!(dropdown.is_open());

        // Down twice focuses the second flattened option ("y")
        dropdown.handle_event(&Event::Key(Key::Down));
        dropdown.handle_event(&Event::Key(Key::Down));
        assert_eq!(dropdown.snapshot().focused_option, Some(1));

        // Enter activates it
        dropdown.handle_event(&Event::Key(Key::Enter));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected().unwrap().value, "y");
    }

    #[test]
    fn test_escape_closes() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab());
        mount(&mut dropdown);
        dropdown.set_focused(true);

        dropdown.open();
        assert!(dropdown.handle_event(&Event::Key(Key::Esc)));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_unfocused_control_ignores_keys() {
        let mut dropdown = Dropdown::new(children_ab());
        mount(&mut dropdown);
        assert!(!dropdown.handle_event(&Event::Key(Key::Enter)));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_pointer_press_on_label_and_option() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab());
        mount(&mut dropdown);

        // press on the label row opens
        let press = |col, row| Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row));
        assert!(dropdown.handle_event(&press(2, 0)));
        assert!(dropdown.is_open());
        mount(&mut dropdown);

        // press on the menu border is consumed but activates nothing
        assert!(dropdown.handle_event(&press(2, 1)));
        assert!(dropdown.is_open());

        // press on the first option row (inside the border) selects "a"
        assert!(dropdown.handle_event(&press(2, 2)));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected().unwrap().value, "a");
    }

    #[test]
    fn test_focus_request_hook() {
        outside::unregister_all();
        let requests = Rc::new(RefCell::new(Vec::new()));
        let r = requests.clone();
        let mut dropdown = Dropdown::new(children_ab()).on_focus_request(move |request| {
            r.borrow_mut().push(request);
        });

        mount(&mut dropdown);
        dropdown.open();
        dropdown.move_focus(FocusDirection::Next);
        dropdown.close();

        assert_eq!(
            *requests.borrow(),
            vec![
                FocusRequest::Label,     // open focuses the label first
                FocusRequest::Option(0), // cursor entered the list
                FocusRequest::Label,     // focus returns to the label on close
            ]
        );
    }

    #[test]
    fn test_drop_releases_registration() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab());
        dropdown.open();
        assert_eq!(outside::handler_count(), 1);

        drop(dropdown);
        assert_eq!(outside::handler_count(), 0);
    }

    #[test]
    fn test_unmount_releases_registration() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab());
        dropdown.open();
        assert_eq!(outside::handler_count(), 1);

        dropdown.on_unmount();
        assert_eq!(outside::handler_count(), 0);
    }

    #[test]
    fn test_legacy_close_all_clears_other_instances() {
        outside::unregister_all();
        let mut legacy = Dropdown::new(children_ab()).with_legacy_close_all(true);
        let mut other = Dropdown::new(children_ab());

        legacy.open();
        other.open();
        assert_eq!(outside::handler_count(), 2);

        // historical defect-compatible behavior: closing one clears both
        legacy.close();
        assert_eq!(outside::handler_count(), 0);
        assert!(other.is_open());
        other.close();
    }

    #[test]
    fn test_independent_instances_by_default() {
        outside::unregister_all();
        let mut first = Dropdown::new(children_ab());
        let mut second = Dropdown::new(children_ab());

        first.open();
        second.open();
        assert_eq!(outside::handler_count(), 2);

        first.close();
        assert_eq!(outside::handler_count(), 1);
        second.close();
        assert_eq!(outside::handler_count(), 0);
    }

    #[test]
    fn test_set_children_clamps_focus_cursor() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(Children::Flat(vec![opt("a"), opt("b"), opt("c")]));
        mount(&mut dropdown);
        dropdown.open();
        dropdown.move_focus(FocusDirection::Previous); // cursor on index 2
        assert_eq!(dropdown.snapshot().focused_option, Some(2));

        dropdown.set_children(Children::Flat(vec![opt("a")]));
        assert_eq!(dropdown.snapshot().focused_option, None);
        dropdown.close();
    }

    #[test]
    fn test_snapshot_reflects_state() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab());
        mount(&mut dropdown);

        let snap = dropdown.snapshot();
        assert!(!snap.open);
        assert_eq!(snap.focused_option, None);
        assert_eq!(snap.selected_option.unwrap().value, "b");

        dropdown.open();
        assert!(dropdown.snapshot().open);
        dropdown.close();
    }

    #[test]
    fn test_render_output_shows_labels() {
        outside::unregister_all();
        let mut dropdown = Dropdown::new(children_ab()).with_width(12);
        let mut renderer = Renderer::headless();
        let theme = Theme::dark(TerminalCapabilities::minimal());
        let ctx = RenderContext::new(&theme);

        dropdown.open();
        dropdown
            .render(&mut renderer, Rect::new(0, 0, 40, 12), &ctx)
            .unwrap();

        let out = renderer.captured();
        assert!(out.contains('▴'));
        assert!(out.contains("A")); // option label
        assert!(out.contains("✓ B")); // selected marker
        assert!(out.contains("+--")); // ascii border on a minimal terminal
        assert!(out.contains('|'));
        dropdown.close();
    }
}
