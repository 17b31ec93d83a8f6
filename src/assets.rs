use crate::canvas::CanvasSurface;
use crate::constants::FALLBACK_IMAGE_SIZE;
use glam::Vec2;
use sketch_core::{AssetKind, AssetRequest, CurveSource, SketchError, SketchRunner};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys as web;

/// Fetch and decode one image.
pub async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    Ok(img)
}

/// Fetch an SVG document and pull out its `viewBox` and first path.
pub async fn load_curve(url: &str) -> anyhow::Result<CurveSource> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !response.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, response.status());
    }
    let text = JsFuture::from(response.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("{} is not text", url))?;

    let parser = web::DomParser::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let doc = parser
        .parse_from_string(&text, web::SupportedType::ImageSvgXml)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let svg = doc
        .query_selector("svg")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("{} has no <svg>", url))?;
    let view_box = svg
        .get_attribute("viewBox")
        .ok_or_else(|| anyhow::anyhow!("{} has no viewBox", url))?;
    let d = doc
        .query_selector("path")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .and_then(|p| p.get_attribute("d"))
        .ok_or_else(|| anyhow::anyhow!("{} has no path data", url))?;
    Ok(CurveSource::from_svg(&view_box, &d)?)
}

/// Load one asset, recording the outcome in the runner's store. Resolves to
/// the decoded image element, or `undefined` for curves and failures.
async fn load_one(runner: Rc<RefCell<SketchRunner>>, req: &'static AssetRequest) -> JsValue {
    match req.kind {
        AssetKind::Image => match load_image(req.url).await {
            Ok(img) => {
                let natural = Vec2::new(img.natural_width() as f32, img.natural_height() as f32);
                let size = if natural.min_element() > 0.0 {
                    natural
                } else {
                    Vec2::from(FALLBACK_IMAGE_SIZE)
                };
                runner.borrow_mut().assets_mut().mark_ready(req.name, size);
                img.into()
            }
            Err(e) => {
                runner
                    .borrow_mut()
                    .assets_mut()
                    .mark_failed(req.name, e.to_string());
                JsValue::UNDEFINED
            }
        },
        AssetKind::Curve => {
            let curve = load_curve(req.url).await.map_err(|e| SketchError::AssetLoad {
                name: req.name.to_owned(),
                reason: e.to_string(),
            });
            runner.borrow_mut().deliver_curve(req.name, curve);
            JsValue::UNDEFINED
        }
    }
}

/// Load every asset the runner's sketch asked for, all at once. Failures are
/// recorded in the store and logged; they never abort the sketch.
pub async fn load_all(runner: &Rc<RefCell<SketchRunner>>, surface: &mut CanvasSurface) {
    let requests = runner.borrow().sketch().assets();
    let loads = js_sys::Array::new();
    for req in requests {
        let runner = runner.clone();
        loads.push(&future_to_promise(async move {
            Ok::<_, JsValue>(load_one(runner, req).await)
        }));
    }
    // Each load settles to Ok, so this only rejects if the runtime does.
    let loaded = match JsFuture::from(js_sys::Promise::all(&loads)).await {
        Ok(v) => js_sys::Array::from(&v),
        Err(e) => {
            log::error!("[assets] loading aborted: {:?}", e);
            return;
        }
    };
    for (req, value) in requests.iter().zip(loaded.iter()) {
        if let Ok(img) = value.dyn_into::<web::HtmlImageElement>() {
            surface.insert_image(req.name, img);
        }
    }

    let runner = runner.borrow();
    let pending: Vec<&str> = runner.assets().pending().collect();
    if pending.is_empty() {
        log::info!("[assets] {} requested, loading finished", requests.len());
    } else {
        log::warn!("[assets] still pending after load: {:?}", pending);
    }
}
