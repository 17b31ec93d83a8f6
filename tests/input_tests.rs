// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use sketch_core::InputEvent;

#[test]
fn positional_events_carry_their_point() {
    let p = Vec2::new(12.0, 34.0);
    assert_eq!(input_event(PointerKind::Down, Some(p)), Some(InputEvent::Press(p)));
    assert_eq!(input_event(PointerKind::Move, Some(p)), Some(InputEvent::Move(p)));
    assert_eq!(input_event(PointerKind::Up, Some(p)), Some(InputEvent::Release(p)));
}

#[test]
fn positional_events_without_canvas_position_are_dropped() {
    assert_eq!(input_event(PointerKind::Down, None), None);
    assert_eq!(input_event(PointerKind::Move, None), None);
    assert_eq!(input_event(PointerKind::Up, None), None);
}

#[test]
fn leave_needs_no_position() {
    assert_eq!(input_event(PointerKind::Leave, None), Some(InputEvent::Leave));
    assert_eq!(
        input_event(PointerKind::Leave, Some(Vec2::ONE)),
        Some(InputEvent::Leave)
    );
}

#[test]
fn event_names_are_distinct_dom_pointer_events() {
    let names: Vec<&str> = PointerKind::ALL.iter().map(|k| k.event_name()).collect();
    assert_eq!(
        names,
        vec!["pointerdown", "pointermove", "pointerup", "pointerleave"]
    );
}
