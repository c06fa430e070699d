use std::rc::Rc;

use assert_call::{call, CallRecorder};

use crate::{with_grouped_events, ChildHandler, Component, Props};

struct List;

impl Component for List {
    type Child = String;
    type Event = String;
    type Output = Vec<ChildHandler<String>>;

    fn render(&self, props: &Props<String, String>) -> Self::Output {
        let on_item_event = props.grouped("on_item_event");
        let items: &Vec<Rc<String>> = props.data("items").expect("items");
        items.iter().map(|item| on_item_event.get(item)).collect()
    }
}

fn children(names: &[&str]) -> Vec<Rc<String>> {
    names.iter().map(|name| Rc::new(name.to_string())).collect()
}

fn list_props(items: Vec<Rc<String>>, handler_name: &'static str) -> Props<String, String> {
    let mut props = Props::new();
    props.set_data("items", items);
    props.set_handler("on_item_event", move |child: &Rc<String>, event: &String| {
        call!("{handler_name} {child} {event}")
    });
    props
}

#[test]
fn callbacks_are_stable_across_renders() {
    let list = with_grouped_events(["on_item_event"]).wrap(List);
    let props = list_props(children(&["a", "b"]), "h");

    let first = list.render(&props);
    let second = list.render(&props);
    assert!(first[0].ptr_eq(&second[0]));
    assert!(first[1].ptr_eq(&second[1]));
    assert!(!first[0].ptr_eq(&first[1]));
}

#[test]
fn callbacks_forward_child_then_event() {
    let mut cr = CallRecorder::new();
    let list = with_grouped_events(["on_item_event"]).wrap(List);
    let props = list_props(children(&["a", "b"]), "h");

    let callbacks = list.render(&props);
    callbacks[1].emit(&"x".to_string());
    callbacks[0].emit(&"y".to_string());
    cr.verify(["h b x", "h a y"]);
}

#[test]
fn replacing_the_handler_invalidates_callbacks() {
    let list = with_grouped_events(["on_item_event"]).wrap(List);
    let items = children(&["a"]);

    let first = list.render(&list_props(items.clone(), "first"));
    let second = list.render(&list_props(items, "second"));
    assert!(!first[0].ptr_eq(&second[0]));

    let mut cr = CallRecorder::new();
    second[0].emit(&"click".to_string());
    cr.verify("second a click");
}

#[test]
fn absent_handler_prop_renders_inert_callbacks() {
    let mut cr = CallRecorder::new();
    let list = with_grouped_events(["on_item_event"]).wrap(List);
    let mut props = Props::new();
    props.set_data("items", children(&["a"]));

    let callbacks = list.render(&props);
    callbacks[0].emit(&"x".to_string());
    cr.verify(());
}

struct Probe;

impl Component for Probe {
    type Child = String;
    type Event = String;
    type Output = (bool, Option<i32>);

    fn render(&self, props: &Props<String, String>) -> Self::Output {
        (
            props.handler("on_item_event").is_some(),
            props.data::<i32>("count").copied(),
        )
    }
}

#[test]
fn empty_declaration_passes_props_through() {
    let probe = with_grouped_events([]).wrap(Probe);
    let mut props = Props::new();
    props.set_data("count", 7);
    props.set_handler("on_item_event", |_: &Rc<String>, _: &String| {});

    assert_eq!(probe.render(&props), (true, Some(7)));
}

#[test]
fn undeclared_props_pass_through() {
    let probe = with_grouped_events(["on_other"]).wrap(Probe);
    let mut props = Props::new();
    props.set_data("count", 7);
    props.set_handler("on_item_event", |_: &Rc<String>, _: &String| {});

    assert_eq!(probe.render(&props), (true, Some(7)));
}

#[test]
fn duplicate_names_collapse() {
    let list = with_grouped_events(["on_item_event", "on_item_event"]).wrap(List);
    assert_eq!(list.maps.len(), 1);

    let props = list_props(children(&["a"]), "h");
    let first = list.render(&props);
    let second = list.render(&props);
    assert!(first[0].ptr_eq(&second[0]));
}

struct Pair;

impl Component for Pair {
    type Child = String;
    type Event = String;
    type Output = [ChildHandler<String>; 2];

    fn render(&self, props: &Props<String, String>) -> Self::Output {
        let child: &Rc<String> = props.data("child").expect("child");
        [
            props.grouped("on_a").get(child),
            props.grouped("on_b").get(child),
        ]
    }
}

#[test]
fn nested_wrappers_compose() {
    let mut cr = CallRecorder::new();
    let pair = with_grouped_events(["on_b"]).wrap(with_grouped_events(["on_a"]).wrap(Pair));

    let mut props = Props::new();
    props.set_data("child", Rc::new("c".to_string()));
    props.set_handler("on_a", |child: &Rc<String>, event: &String| {
        call!("a {child} {event}")
    });
    props.set_handler("on_b", |child: &Rc<String>, event: &String| {
        call!("b {child} {event}")
    });

    let first = pair.render(&props);
    let second = pair.render(&props);
    assert!(first[0].ptr_eq(&second[0]));
    assert!(first[1].ptr_eq(&second[1]));

    first[0].emit(&"x".to_string());
    first[1].emit(&"y".to_string());
    cr.verify(["a c x", "b c y"]);
}
