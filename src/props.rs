use std::{any::Any, borrow::Cow, collections::HashMap, rc::Rc};

use derive_ex::derive_ex;

use crate::{GroupedHandler, Handler};


/// Named property bag consumed by [`Component::render`](crate::Component::render).
///
/// Data, handler and grouped-handler slots share one namespace; setting a
/// slot under an existing name replaces it, whatever kind it was. Cloning
/// shares slot payloads.
#[derive_ex(Clone, bound())]
pub struct Props<C: 'static, E: 'static> {
    slots: HashMap<Cow<'static, str>, Slot<C, E>>,
}

#[derive_ex(Clone, bound())]
enum Slot<C: 'static, E: 'static> {
    Data(Rc<dyn Any>),
    Handler(Handler<C, E>),
    Grouped(GroupedHandler<C, E>),
}

impl<C: 'static, E: 'static> Props<C, E> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Store a data value under `name`, replacing any previous slot.
    pub fn set_data(&mut self, name: impl Into<Cow<'static, str>>, value: impl Any) {
        self.slots.insert(name.into(), Slot::Data(Rc::new(value)));
    }

    /// Borrow the data value stored under `name`.
    ///
    /// `None` if the name is absent, holds a handler slot, or holds a value
    /// of a different type.
    pub fn data<T: Any>(&self, name: &str) -> Option<&T> {
        match self.slots.get(name)? {
            Slot::Data(value) => value.downcast_ref(),
            _ => None,
        }
    }

    /// Store an event handler under `name`, replacing any previous slot.
    pub fn set_handler(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        handler: impl Fn(&Rc<C>, &E) + 'static,
    ) {
        self.set_handler_rc(name, Rc::new(handler));
    }

    /// Store an already shared handler under `name`.
    ///
    /// Callback identity follows handler identity, so a caller that rebuilds
    /// its props every render should store clones of one handler allocation
    /// rather than a fresh closure each time.
    pub fn set_handler_rc(&mut self, name: impl Into<Cow<'static, str>>, handler: Handler<C, E>) {
        self.slots.insert(name.into(), Slot::Handler(handler));
    }

    /// The handler stored under `name`, if that slot is a plain handler.
    pub fn handler(&self, name: &str) -> Option<Handler<C, E>> {
        match self.slots.get(name)? {
            Slot::Handler(handler) => Some(handler.clone()),
            _ => None,
        }
    }

    /// Store a grouped handler under `name`, replacing any previous slot.
    pub fn set_grouped(&mut self, name: impl Into<Cow<'static, str>>, grouped: GroupedHandler<C, E>) {
        self.slots.insert(name.into(), Slot::Grouped(grouped));
    }

    /// The grouped handler stored under `name`.
    ///
    /// Total: a name that is absent or holds another slot kind yields a
    /// grouped handler whose callbacks do nothing, so per-child callbacks
    /// can be requested unconditionally.
    pub fn grouped(&self, name: &str) -> GroupedHandler<C, E> {
        match self.slots.get(name) {
            Some(Slot::Grouped(grouped)) => grouped.clone(),
            _ => GroupedHandler::noop(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over slot names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(|name| name.as_ref())
    }
}

impl<C: 'static, E: 'static> Default for Props<C, E> {
    fn default() -> Self {
        Self::new()
    }
}
