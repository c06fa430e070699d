use crate::Props;

/// A renderable unit taking a [`Props`] bag.
///
/// `Child` is the identity children are distinguished by and `Event` the
/// payload their callbacks receive. A wrapper decorates a component by
/// implementing `Component` with the same associated types and delegating,
/// so wrapped and unwrapped components are interchangeable to their caller.
pub trait Component {
    type Child: 'static;
    type Event: 'static;
    type Output;

    fn render(&self, props: &Props<Self::Child, Self::Event>) -> Self::Output;
}
