use crate::input::{self, PointerKind};
use sketch_core::SketchRunner;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub runner: Rc<RefCell<SketchRunner>>,
}

/// Pointer input is queued on the runner and applied at the start of the
/// next frame.
pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

fn queue(w: &InputWiring, kind: PointerKind, ev: &web::PointerEvent) {
    let pos = input::pointer_canvas_px(ev, &w.canvas);
    if let Some(event) = input::input_event(kind, pos) {
        w.runner.borrow_mut().queue_input(event);
    }
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        queue(&w, PointerKind::Down, &ev);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback(
        PointerKind::Down.event_name(),
        closure.as_ref().unchecked_ref(),
    );
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        queue(&w, PointerKind::Move, &ev);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(
            PointerKind::Move.event_name(),
            closure.as_ref().unchecked_ref(),
        );
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        queue(&w, PointerKind::Up, &ev);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(
            PointerKind::Up.event_name(),
            closure.as_ref().unchecked_ref(),
        );
    }

    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Captured pointers keep reporting to the canvas; only a real exit ends the drag.
        if !w.canvas.has_pointer_capture(ev.pointer_id()) {
            queue(&w, PointerKind::Leave, &ev);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback(
        PointerKind::Leave.event_name(),
        closure.as_ref().unchecked_ref(),
    );
    closure.forget();
}
