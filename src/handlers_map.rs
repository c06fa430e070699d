use std::{
    collections::{hash_map::Entry, HashMap},
    rc::{Rc, Weak},
};

use parse_display::Display;
use tracing::trace;

use crate::{ChildHandler, Handler};


const TARGET: &str = "handlers-map";

/// Identity-keyed cache of per-child callbacks for one handler prop.
///
/// Holds the parent handler currently in effect and, for every child seen
/// since the handler last changed, the callback forwarding that child's
/// events to it. Cached callbacks keep their identity as long as the handler
/// reference is unchanged, so children comparing props by identity do not
/// observe a new callback on every render.
///
/// Children are keyed by `Rc` allocation address and held weakly: the cache
/// never extends a child's lifetime, and entries whose child has been
/// dropped are replaced on address reuse and swept on the next same-handler
/// [`update`](Self::update).
pub struct HandlersMap<C: 'static, E: 'static> {
    handler: Option<Handler<C, E>>,
    absent: ChildHandler<E>,
    cache: HashMap<*const C, CacheEntry<C, E>>,
}

struct CacheEntry<C: 'static, E: 'static> {
    child: Weak<C>,
    callback: ChildHandler<E>,
}

/// Outcome of a single cache lookup, carried in trace events.
#[derive(Clone, Copy, Debug, Display)]
#[display(style = "snake_case")]
enum Lookup {
    Hit,
    Miss,
    Replaced,
    NoHandler,
}

impl<C: 'static, E: 'static> HandlersMap<C, E> {
    pub fn new() -> Self {
        Self {
            handler: None,
            absent: ChildHandler::noop(),
            cache: HashMap::new(),
        }
    }

    /// Replace the handler in effect.
    ///
    /// Passing a handler identity-equal to the stored one (`None` included)
    /// keeps every cached callback. A different reference discards the whole
    /// cache; callbacks created afterwards forward to the new handler, while
    /// callbacks created earlier keep forwarding to the old one.
    pub fn update(&mut self, handler: Option<Handler<C, E>>) {
        if handler_eq(self.handler.as_ref(), handler.as_ref()) {
            self.sweep();
            return;
        }
        trace!(
            target: TARGET,
            has_handler = handler.is_some(),
            dropped = self.cache.len(),
            "handler changed, cache reset"
        );
        self.handler = handler;
        self.cache = HashMap::new();
    }

    /// Get or create the callback forwarding `child`'s events to the handler
    /// in effect.
    ///
    /// Repeated calls with the same child and an unchanged handler return
    /// the same callback allocation every time. With no handler in effect
    /// the returned callback does nothing and no entry is cached.
    pub fn grouped_handler(&mut self, child: &Rc<C>) -> ChildHandler<E> {
        let Some(handler) = &self.handler else {
            trace!(target: TARGET, lookup = %Lookup::NoHandler);
            return self.absent.clone();
        };
        let key = Rc::as_ptr(child);
        let (lookup, callback) = match self.cache.entry(key) {
            Entry::Occupied(entry) if entry.get().child.strong_count() != 0 => {
                (Lookup::Hit, entry.get().callback.clone())
            }
            Entry::Occupied(mut entry) => {
                entry.insert(CacheEntry::new(child, handler));
                (Lookup::Replaced, entry.get().callback.clone())
            }
            Entry::Vacant(entry) => {
                let entry = entry.insert(CacheEntry::new(child, handler));
                (Lookup::Miss, entry.callback.clone())
            }
        };
        trace!(target: TARGET, ?key, %lookup);
        callback
    }

    /// Number of cached callbacks.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn sweep(&mut self) {
        let before = self.cache.len();
        self.cache.retain(|_, entry| entry.child.strong_count() != 0);
        let swept = before - self.cache.len();
        if swept != 0 {
            trace!(target: TARGET, swept, "dropped entries for dead children");
        }
    }
}

impl<C: 'static, E: 'static> Default for HandlersMap<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static, E: 'static> CacheEntry<C, E> {
    fn new(child: &Rc<C>, handler: &Handler<C, E>) -> Self {
        let callback = {
            let handler = handler.clone();
            let child = Rc::downgrade(child);
            ChildHandler::new(move |event| {
                if let Some(child) = child.upgrade() {
                    (*handler)(&child, event);
                }
            })
        };
        Self {
            child: Rc::downgrade(child),
            callback,
        }
    }
}

fn handler_eq<C, E>(a: Option<&Handler<C, E>>, b: Option<&Handler<C, E>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
