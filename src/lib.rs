//! Per-child event handler memoization for component-based UI.
//!
//! When a parent hands the same `(child, event)` handler to every child by
//! wrapping it in a fresh per-child closure on each render, every child sees
//! a new callback identity each time and re-renders even though nothing
//! changed. Wrapping the parent with [`with_grouped_events`] replaces each
//! declared handler prop with a [`GroupedHandler`]: the wrapped component
//! asks it for a per-child callback and gets the same [`ChildHandler`] back
//! for the same child until the upstream handler reference actually changes.
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use grouped_events::{with_grouped_events, ChildHandler, Component, Props};
//!
//! struct List;
//!
//! impl Component for List {
//!     type Child = String;
//!     type Event = String;
//!     type Output = Vec<ChildHandler<String>>;
//!
//!     fn render(&self, props: &Props<String, String>) -> Self::Output {
//!         let on_item_event = props.grouped("on_item_event");
//!         let items: &Vec<Rc<String>> = props.data("items").unwrap();
//!         items.iter().map(|item| on_item_event.get(item)).collect()
//!     }
//! }
//!
//! let list = with_grouped_events(["on_item_event"]).wrap(List);
//!
//! let mut props = Props::new();
//! props.set_data("items", vec![Rc::new("a".to_string()), Rc::new("b".to_string())]);
//! props.set_handler("on_item_event", |item: &Rc<String>, event: &String| {
//!     println!("{item}: {event}");
//! });
//!
//! let first = list.render(&props);
//! let second = list.render(&props);
//! assert!(first[0].ptr_eq(&second[0]));
//! first[0].emit(&"click".to_string());
//! ```

mod component;
mod handler;
mod handlers_map;
mod props;
mod wrapper;

pub use component::*;
pub use handler::*;
pub use handlers_map::*;
pub use props::*;
pub use wrapper::*;
