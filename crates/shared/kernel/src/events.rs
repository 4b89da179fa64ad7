//! # Page Events
//!
//! Window-level user actions behind a small registration interface:
//! "on event kind X, invoke this handler". The browser implements [`EventSource`] with real
//! DOM listeners; [`LocalEvents`] is a synchronous in-process registry with the same
//! contract, so binding code can be driven by hand.
//!
//! Listeners returned by [`EventSource::listen`] unregister themselves when dropped.
//!
//! ```rust
//! use folio_kernel::events::{EventKind, EventSource, LocalEvents, PageEvent};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let events = LocalEvents::new();
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = Rc::clone(&seen);
//! let _listener = events.listen(
//!     EventKind::Scroll,
//!     Box::new(move |event| {
//!         if let PageEvent::Scroll { offset_y } = event {
//!             sink.set(*offset_y);
//!         }
//!     }),
//! );
//!
//! events.emit(&PageEvent::Scroll { offset_y: 42.0 });
//! assert_eq!(seen.get(), 42.0);
//! ```

use fxhash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Kinds of page events a feature can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Click,
}

/// A dispatched page event with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The window scrolled; `offset_y` is the new vertical scroll position.
    Scroll { offset_y: f64 },
    /// A click anywhere on the page; `target_id` is the `id` of the element clicked, if any.
    Click { target_id: Option<String> },
}

impl PageEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Click { .. } => EventKind::Click,
        }
    }
}

pub type Handler = Box<dyn FnMut(&PageEvent)>;

/// Registration interface for page events.
pub trait EventSource {
    /// Keeps the registration alive; dropping it removes the handler.
    type Listener;

    fn listen(&self, kind: EventKind, handler: Handler) -> Self::Listener;
}

type Slot = Rc<RefCell<Handler>>;
type Registry = RefCell<FxHashMap<EventKind, Vec<(u64, Slot)>>>;

#[derive(Default)]
struct Shared {
    next_id: Cell<u64>,
    handlers: Registry,
}

/// Single-threaded in-process [`EventSource`].
#[derive(Clone, Default)]
pub struct LocalEvents {
    shared: Rc<Shared>,
}

impl LocalEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes every handler registered for the event's kind, in registration order.
    ///
    /// Returns the number of handlers invoked. Handlers may register or drop listeners
    /// while being dispatched; such changes apply from the next emit. A handler that emits
    /// its own event kind again is not re-entered by the nested emit.
    pub fn emit(&self, event: &PageEvent) -> usize {
        let slots: Vec<Slot> = self
            .shared
            .handlers
            .borrow()
            .get(&event.kind())
            .map(|entries| entries.iter().map(|(_, slot)| Rc::clone(slot)).collect())
            .unwrap_or_default();

        trace!(kind = ?event.kind(), handlers = slots.len(), "Dispatching page event");

        let mut invoked = 0;
        for slot in &slots {
            let Ok(mut handler) = slot.try_borrow_mut() else {
                debug!(kind = ?event.kind(), "Skipping handler already running");
                continue;
            };
            handler(event);
            invoked += 1;
        }
        invoked
    }

    /// Number of live handlers for `kind`.
    #[must_use]
    pub fn listeners(&self, kind: EventKind) -> usize {
        self.shared.handlers.borrow().get(&kind).map_or(0, Vec::len)
    }
}

impl fmt::Debug for LocalEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalEvents")
            .field("scroll", &self.listeners(EventKind::Scroll))
            .field("click", &self.listeners(EventKind::Click))
            .finish()
    }
}

impl EventSource for LocalEvents {
    type Listener = LocalListener;

    fn listen(&self, kind: EventKind, handler: Handler) -> LocalListener {
        let id = self.shared.next_id.get() + 1;
        self.shared.next_id.set(id);
        self.shared
            .handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push((id, Rc::new(RefCell::new(handler))));

        LocalListener { id, kind, shared: Rc::downgrade(&self.shared) }
    }
}

/// Registration handle of a [`LocalEvents`] handler.
#[must_use = "Dropping the listener unregisters the handler."]
pub struct LocalListener {
    id: u64,
    kind: EventKind,
    shared: Weak<Shared>,
}

impl fmt::Debug for LocalListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalListener").field("id", &self.id).field("kind", &self.kind).finish()
    }
}

impl Drop for LocalListener {
    fn drop(&mut self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        if let Some(entries) = shared.handlers.borrow_mut().get_mut(&self.kind) {
            entries.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(events: &LocalEvents, kind: EventKind) -> (Rc<Cell<u32>>, LocalListener) {
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let listener = events.listen(kind, Box::new(move |_| sink.set(sink.get() + 1)));
        (hits, listener)
    }

    #[test]
    fn emit_reaches_only_matching_kind() {
        let events = LocalEvents::new();
        let (scrolls, _a) = counter(&events, EventKind::Scroll);
        let (clicks, _b) = counter(&events, EventKind::Click);

        assert_eq!(events.emit(&PageEvent::Scroll { offset_y: 10.0 }), 1);
        assert_eq!(scrolls.get(), 1);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn dropping_listener_unregisters() {
        let events = LocalEvents::new();
        let (hits, listener) = counter(&events, EventKind::Click);
        assert_eq!(events.listeners(EventKind::Click), 1);

        drop(listener);
        assert_eq!(events.listeners(EventKind::Click), 0);
        assert_eq!(events.emit(&PageEvent::Click { target_id: None }), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_outliving_source_is_harmless() {
        let events = LocalEvents::new();
        let (_hits, listener) = counter(&events, EventKind::Scroll);
        drop(events);
        drop(listener);
    }

    #[test]
    fn handlers_may_register_during_dispatch() {
        let events = LocalEvents::new();
        let inner = events.clone();
        let spawned = Rc::new(RefCell::new(Vec::new()));
        let keep = Rc::clone(&spawned);
        let _outer = events.listen(
            EventKind::Click,
            Box::new(move |_| keep.borrow_mut().push(inner.listen(EventKind::Click, Box::new(|_| {})))),
        );

        assert_eq!(events.emit(&PageEvent::Click { target_id: None }), 1);
        assert_eq!(events.listeners(EventKind::Click), 2);
    }

    #[test]
    fn nested_emit_skips_the_running_handler() {
        let events = LocalEvents::new();
        let inner = events.clone();
        let nested = Rc::new(Cell::new(None));
        let seen = Rc::clone(&nested);
        let _echo = events.listen(
            EventKind::Scroll,
            Box::new(move |_| {
                if seen.get().is_none() {
                    seen.set(Some(inner.emit(&PageEvent::Scroll { offset_y: 0.0 })));
                }
            }),
        );
        let (hits, _other) = counter(&events, EventKind::Scroll);

        assert_eq!(events.emit(&PageEvent::Scroll { offset_y: 5.0 }), 2);
        assert_eq!(nested.get(), Some(1));
        assert_eq!(hits.get(), 2);
    }
}
