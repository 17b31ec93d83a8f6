use fnv::FnvHashMap;
use glam::Vec2;
use sketch_core::math::Rect;
use sketch_core::surface::{StrokeStyle, Surface, TextStyle};
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`Surface`] over a 2D canvas context. Images are looked up by asset name;
/// drawing one that never loaded is skipped.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    images: FnvHashMap<String, web::HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            images: FnvHashMap::default(),
        }
    }

    pub fn insert_image(&mut self, name: &str, image: web::HtmlImageElement) {
        self.images.insert(name.to_owned(), image);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, by: Vec2) {
        _ = self.ctx.translate(by.x as f64, by.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, by: Vec2) {
        _ = self.ctx.scale(by.x as f64, by.y as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_filter(&mut self, filter: Option<&str>) {
        self.ctx.set_filter(filter.unwrap_or("none"));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        let size = rect.size();
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx
            .fill_rect(rect.min.x as f64, rect.min.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_image(&mut self, image: &str, dest: Rect) {
        let Some(img) = self.images.get(image) else {
            return;
        };
        let size = dest.size();
        _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            dest.min.x as f64,
            dest.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style(&JsValue::from_str(style.color));
        self.ctx.set_line_width(style.width as f64);
        self.ctx
            .set_line_cap(if style.round_cap { "round" } else { "butt" });
        self.ctx.set_line_join("round");
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.ctx.set_font(&style.font);
        self.ctx.set_fill_style(&JsValue::from_str(style.color));
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
