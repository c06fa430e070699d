use std::rc::Rc;

use derive_ex::derive_ex;

/// Parent-supplied event handler: called with the child the event came from
/// and the event payload.
///
/// Compared by allocation identity (`Rc::ptr_eq`), never by value.
pub type Handler<C, E> = Rc<dyn Fn(&Rc<C>, &E)>;

/// Per-child event callback handed to a wrapped component.
///
/// Forwards to the [`Handler`] that was current when the callback was
/// created, with its child prepended. Clones share one callback allocation,
/// so identity survives cloning.
#[derive_ex(Clone, bound())]
pub struct ChildHandler<E: 'static>(Rc<dyn Fn(&E)>);

impl<E: 'static> ChildHandler<E> {
    pub fn new(f: impl Fn(&E) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A callback that does nothing.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Invoke the callback with `event`.
    pub fn emit(&self, event: &E) {
        (*self.0)(event)
    }

    /// `true` if both handles share one callback allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Cloneable `child -> ChildHandler` entry point, injected by the wrapper in
/// place of a plain [`Handler`] prop.
#[derive_ex(Clone, bound())]
pub struct GroupedHandler<C: 'static, E: 'static>(Rc<dyn Fn(&Rc<C>) -> ChildHandler<E>>);

impl<C: 'static, E: 'static> GroupedHandler<C, E> {
    pub fn new(f: impl Fn(&Rc<C>) -> ChildHandler<E> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A grouped handler whose callbacks do nothing.
    pub fn noop() -> Self {
        let callback = ChildHandler::noop();
        Self::new(move |_| callback.clone())
    }

    /// Get or create the callback for `child`.
    pub fn get(&self, child: &Rc<C>) -> ChildHandler<E> {
        (*self.0)(child)
    }
}
