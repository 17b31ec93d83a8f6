use crate::canvas::CanvasSurface;
use crate::constants::MAX_FRAME_DT_MS;
use crate::dom;
use instant::Instant;
use sketch_core::{RunState, SketchRunner};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub runner: Rc<RefCell<SketchRunner>>,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) -> RunState {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let size = dom::canvas_size(&self.canvas);
        self.runner.borrow_mut().frame(dt, size, &mut self.surface)
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until the sketch finishes.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame() == RunState::Finished {
            log::info!("[frame] sketch finished, loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
