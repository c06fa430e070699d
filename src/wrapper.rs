use std::{cell::RefCell, rc::Rc};

use tracing::trace;

use crate::{Component, GroupedHandler, HandlersMap, Props};

#[cfg(test)]
mod tests;

const TARGET: &str = "with-grouped-events";

/// Stage one of the wrapper factory: the handler prop names to group.
///
/// Obtained from [`with_grouped_events`]; [`wrap`](Self::wrap) produces the
/// wrapped component and can be called more than once, each wrapper getting
/// maps of its own.
pub struct GroupedEvents {
    names: Vec<&'static str>,
}

/// Declare the handler props to group, keeping the first occurrence of each
/// name.
///
/// An empty declaration is legal and reduces the wrapper to a pass-through.
pub fn with_grouped_events(names: impl IntoIterator<Item = &'static str>) -> GroupedEvents {
    let mut set = Vec::new();
    for name in names {
        if !set.contains(&name) {
            set.push(name);
        }
    }
    GroupedEvents { names: set }
}

impl GroupedEvents {
    /// Wrap `inner`, producing a component of the same shape whose declared
    /// handler props are replaced by grouped handlers.
    pub fn wrap<T: Component>(&self, inner: T) -> WithGroupedEvents<T> {
        let maps = self
            .names
            .iter()
            .map(|&name| {
                let map: Rc<RefCell<HandlersMap<T::Child, T::Event>>> =
                    Rc::new(RefCell::new(HandlersMap::new()));
                let grouped = GroupedHandler::new({
                    let map = map.clone();
                    move |child| map.borrow_mut().grouped_handler(child)
                });
                (name, map, grouped)
            })
            .collect();
        WithGroupedEvents { inner, maps }
    }
}

type NamedMap<C, E> = (
    &'static str,
    Rc<RefCell<HandlersMap<C, E>>>,
    GroupedHandler<C, E>,
);

/// Component decorator that absorbs the declared handler props and injects
/// identity-stable grouped handlers under the same names.
///
/// One [`HandlersMap`] per declared name is created at wrap time and lives
/// for the wrapper's whole lifetime. On every render each map is refreshed
/// against the incoming handler before the inner component runs, then the
/// declared names are overridden with clones of per-name grouped facades;
/// all other props pass through untouched. A declared prop that is missing
/// or not a plain handler counts as "no handler" and yields inert callbacks
/// rather than an error.
pub struct WithGroupedEvents<T: Component> {
    inner: T,
    maps: Vec<NamedMap<T::Child, T::Event>>,
}

impl<T: Component> Component for WithGroupedEvents<T> {
    type Child = T::Child;
    type Event = T::Event;
    type Output = T::Output;

    fn render(&self, props: &Props<Self::Child, Self::Event>) -> Self::Output {
        let mut props = props.clone();
        for (name, map, _) in &self.maps {
            let handler = props.handler(name);
            trace!(target: TARGET, name = *name, has_handler = handler.is_some());
            map.borrow_mut().update(handler);
        }
        for (name, _, grouped) in &self.maps {
            props.set_grouped(*name, grouped.clone());
        }
        self.inner.render(&props)
    }
}
