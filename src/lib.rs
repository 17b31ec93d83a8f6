#![cfg(target_arch = "wasm32")]
use instant::Instant;
use sketch_core::SketchRunner;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod select;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sketch-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let selection = select::parse_query(&dom::location_search());
    let seed = selection.seed.unwrap_or_else(rand::random);
    log::info!("[init] sketch={} seed={}", selection.kind, seed);

    let sketch = selection.kind.build(dom::canvas_size(&canvas), seed)?;
    let runner = Rc::new(RefCell::new(SketchRunner::new(sketch)));

    let mut surface = canvas::CanvasSurface::new(canvas.clone(), dom::context_2d(&canvas)?);
    assets::load_all(&runner, &mut surface).await;

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        runner: runner.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        runner,
        surface,
        canvas,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
