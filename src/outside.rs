//! Process-wide click-outside dispatch shared by all dropdown instances
//!
//! Many dropdowns may be mounted at once, and each needs to know about
//! pointer presses landing anywhere on screen so it can close itself. Rather
//! than every instance watching the event stream, hosts forward each press
//! once to [`dispatch_click`] and instances register a handler here while
//! they are open.
//!
//! Registration returns a token for targeted removal, so closing one
//! dropdown leaves the others' handlers in place. The historical
//! clear-everything behavior survives as [`unregister_all`] for hosts that
//! depend on it (see `Dropdown::with_legacy_close_all`).
//!
//! The UI event model is single-threaded; the registry lives in thread-local
//! storage and needs no locking. Handlers may re-enter the registry
//! (a handler closing its dropdown unregisters itself mid-dispatch), which
//! is handled by running each pass over a detached snapshot.

use std::cell::RefCell;

/// Token identifying one registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerId(u64);

type Handler = Box<dyn FnMut(u16, u16)>;

struct Registry {
    handlers: Vec<(HandlerId, Handler)>,
    next_id: u64,
    /// Whether the single delegated listener is attached
    attached: bool,
    /// Non-empty while a dispatch pass is running
    in_flight: Vec<HandlerId>,
    /// Tokens unregistered mid-dispatch
    dead: Vec<HandlerId>,
    /// Handlers registered mid-dispatch; they join the next pass
    pending: Vec<(HandlerId, Handler)>,
    /// unregister_all was called mid-dispatch
    clear_requested: bool,
}

impl Registry {
    fn new() -> Self {
        Registry {
            handlers: Vec::new(),
            next_id: 0,
            attached: false,
            in_flight: Vec::new(),
            dead: Vec::new(),
            pending: Vec::new(),
            clear_requested: false,
        }
    }

    fn dispatching(&self) -> bool {
        !self.in_flight.is_empty()
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::new());
}

/// Register a handler for the shared click stream
///
/// The first registration overall attaches the single delegated listener.
/// The returned token removes this handler alone via [`unregister`].
pub fn register(handler: Handler) -> HandlerId {
    REGISTRY.with(|r| {
        let mut reg = r.borrow_mut();
        let id = HandlerId(reg.next_id);
        reg.next_id += 1;
        reg.attached = true;
        if reg.dispatching() {
            reg.pending.push((id, handler));
        } else {
            reg.handlers.push((id, handler));
        }
        id
    })
}

/// Remove one handler by token
///
/// Returns false if the token is not currently registered. Detaches the
/// delegated listener when the last handler is removed.
pub fn unregister(id: HandlerId) -> bool {
    REGISTRY.with(|r| {
        let mut reg = r.borrow_mut();
        if reg.dispatching() {
            if let Some(pos) = reg.pending.iter().position(|(pid, _)| *pid == id) {
                reg.pending.remove(pos);
                return true;
            }
            if reg.in_flight.contains(&id) && !reg.dead.contains(&id) {
                reg.dead.push(id);
                return true;
            }
            return false;
        }
        match reg.handlers.iter().position(|(hid, _)| *hid == id) {
            Some(pos) => {
                reg.handlers.remove(pos);
                if reg.handlers.is_empty() {
                    reg.attached = false;
                }
                true
            }
            None => false,
        }
    })
}

/// Remove every handler at once and detach the delegated listener
///
/// Legacy behavior kept for compatibility; prefer [`unregister`] with the
/// token from [`register`].
pub fn unregister_all() {
    REGISTRY.with(|r| {
        let mut reg = r.borrow_mut();
        if reg.dispatching() {
            reg.clear_requested = true;
            reg.pending.clear();
        } else {
            reg.handlers.clear();
        }
        reg.attached = false;
    });
}

/// Deliver one pointer press to every live handler
///
/// This is the delegated "body click" stream: the host event loop calls it
/// once per press with the cell position. Handlers registered during the
/// pass join the next one; handlers unregistered during the pass stop
/// receiving clicks immediately.
pub fn dispatch_click(col: u16, row: u16) {
    let mut taken = REGISTRY.with(|r| {
        let mut reg = r.borrow_mut();
        if reg.handlers.is_empty() || reg.dispatching() {
            return Vec::new();
        }
        reg.in_flight = reg.handlers.iter().map(|(id, _)| *id).collect();
        std::mem::take(&mut reg.handlers)
    });

    if taken.is_empty() {
        return;
    }

    for (id, handler) in taken.iter_mut() {
        let skip = REGISTRY.with(|r| {
            let reg = r.borrow();
            reg.clear_requested || reg.dead.contains(id)
        });
        if !skip {
            handler(col, row);
        }
    }

    REGISTRY.with(|r| {
        let mut reg = r.borrow_mut();
        reg.in_flight.clear();
        if reg.clear_requested {
            // unregister_all dropped everything registered before it; anything
            // still pending was registered after the clear and survives
            reg.clear_requested = false;
            reg.dead.clear();
            reg.handlers = std::mem::take(&mut reg.pending);
            reg.attached = !reg.handlers.is_empty();
            return;
        }
        let dead = std::mem::take(&mut reg.dead);
        taken.retain(|(id, _)| !dead.contains(id));
        reg.handlers = taken;
        let pending = std::mem::take(&mut reg.pending);
        reg.handlers.extend(pending);
        reg.attached = !reg.handlers.is_empty();
    });
}

/// Number of currently registered handlers
pub fn handler_count() -> usize {
    REGISTRY.with(|r| {
        let reg = r.borrow();
        if reg.dispatching() {
            if reg.clear_requested {
                // everything taken for this pass is doomed
                reg.pending.len()
            } else {
                reg.in_flight.len() - reg.dead.len() + reg.pending.len()
            }
        } else {
            reg.handlers.len()
        }
    })
}

/// Whether the single delegated listener is attached
pub fn listener_attached() -> bool {
    REGISTRY.with(|r| r.borrow().attached)
}
