//! A layered illustration: drag its two speech bubbles along their axes, or
//! drag anywhere else to turn the whole piece about the canvas centre.

use crate::assets::{AssetRequest, AssetStore};
use crate::config::DialConfig;
use crate::constants::{
    BACKGROUND, DIAL_ARTBOARD, DIAL_LEFT_BUBBLE_BOUNDS, DIAL_RIGHT_BUBBLE_BOUNDS,
};
use crate::driver::{FrameCtx, Sketch};
use crate::gesture::{drag_rotation, GestureTracker, InputEvent};
use crate::math::{smooth_toward, Rect};
use crate::surface::Surface;
use glam::Vec2;

pub const METRE: &str = "metre";
pub const CIRCLE: &str = "cercle";
pub const RECTANGLE: &str = "rectangle";
pub const LEFT_BUBBLE: &str = "bgauche";
pub const RIGHT_BUBBLE: &str = "bdroite";

const STATIC_LAYERS: [&str; 3] = [METRE, CIRCLE, RECTANGLE];
const ALL_LAYERS: [&str; 5] = [METRE, CIRCLE, RECTANGLE, LEFT_BUBBLE, RIGHT_BUBBLE];

static ASSETS: [AssetRequest; 5] = [
    AssetRequest::image(RIGHT_BUBBLE, "./bdroite.svg"),
    AssetRequest::image(LEFT_BUBBLE, "./bgauche.svg"),
    AssetRequest::image(METRE, "./metre.svg"),
    AssetRequest::image(CIRCLE, "./cercle.svg"),
    AssetRequest::image(RECTANGLE, "./rectangle.svg"),
];

/// Artboard scaled to the canvas width and centred vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtboardLayout {
    pub scale: f32,
    pub offset_y: f32,
    pub size: Vec2,
}

impl ArtboardLayout {
    pub fn fit(canvas: Vec2) -> Self {
        let [art_w, art_h] = DIAL_ARTBOARD;
        let scale = canvas.x / art_w;
        let height = art_h * scale;
        Self {
            scale,
            offset_y: (canvas.y - height) / 2.0,
            size: Vec2::new(canvas.x, height),
        }
    }

    /// Full-size destination every layer is stretched into.
    pub fn dest(&self) -> Rect {
        Rect::from_origin_size(Vec2::new(0.0, self.offset_y), self.size)
    }

    /// Artboard `[x, y, w, h]` bounds in canvas space.
    pub fn map_bounds(&self, [x, y, w, h]: [f32; 4]) -> Rect {
        Rect::from_origin_size(
            Vec2::new(x * self.scale, self.offset_y + y * self.scale),
            Vec2::new(w, h) * self.scale,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialDrag {
    Rotate { base: f32 },
    LeftBubble { base: f32 },
    RightBubble { base: f32 },
}

/// A value that eases toward wherever the last drag left it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Smoothed {
    pub current: f32,
    pub target: f32,
}

impl Smoothed {
    fn step(&mut self, factor: f32) {
        self.current = smooth_toward(self.current, self.target, factor);
    }
}

pub struct DialSketch {
    config: DialConfig,
    canvas: Vec2,
    layout: ArtboardLayout,
    gesture: GestureTracker,
    drag: Option<DialDrag>,
    rotation: Smoothed,
    left_offset: Smoothed,
    right_offset: Smoothed,
}

impl DialSketch {
    pub fn new(canvas: Vec2, config: DialConfig) -> Self {
        Self {
            config,
            canvas,
            layout: ArtboardLayout::fit(canvas),
            gesture: GestureTracker::default(),
            drag: None,
            rotation: Smoothed::default(),
            left_offset: Smoothed::default(),
            right_offset: Smoothed::default(),
        }
    }

    pub fn layout(&self) -> ArtboardLayout {
        self.layout
    }

    pub fn drag(&self) -> Option<DialDrag> {
        self.drag
    }

    pub fn rotation(&self) -> Smoothed {
        self.rotation
    }

    pub fn left_offset(&self) -> Smoothed {
        self.left_offset
    }

    pub fn right_offset(&self) -> Smoothed {
        self.right_offset
    }

    fn center(&self) -> Vec2 {
        self.canvas * 0.5
    }

    /// Undo the displayed rotation so `p` can be tested against the
    /// unrotated artboard.
    fn unrotate(&self, p: Vec2) -> Vec2 {
        let c = self.center();
        c + Vec2::from_angle(-self.rotation.current).rotate(p - c)
    }

    pub fn left_bubble_rect(&self) -> Rect {
        self.layout
            .map_bounds(DIAL_LEFT_BUBBLE_BOUNDS)
            .translate(Vec2::new(self.left_offset.current, 0.0))
    }

    pub fn right_bubble_rect(&self) -> Rect {
        self.layout
            .map_bounds(DIAL_RIGHT_BUBBLE_BOUNDS)
            .translate(Vec2::new(0.0, self.right_offset.current))
    }

    fn begin_drag(&mut self, p: Vec2) {
        let local = self.unrotate(p);
        let drag = if self.left_bubble_rect().contains(local) {
            DialDrag::LeftBubble {
                base: self.left_offset.target,
            }
        } else if self.right_bubble_rect().contains(local) {
            DialDrag::RightBubble {
                base: self.right_offset.target,
            }
        } else {
            DialDrag::Rotate {
                base: self.rotation.target,
            }
        };
        log::debug!("[dial] drag {:?}", drag);
        self.drag = Some(drag);
    }

    fn continue_drag(&mut self, p: Vec2) {
        let (Some(drag), Some(start)) = (self.drag, self.gesture.start()) else {
            return;
        };
        let max = self.config.max_offset;
        // Bubble drags follow the artboard's own axes.
        let delta = Vec2::from_angle(-self.rotation.current).rotate(p - start);
        match drag {
            DialDrag::Rotate { base } => {
                self.rotation.target =
                    drag_rotation(self.center(), start, p, base, 0.0, self.config.max_rotation);
            }
            DialDrag::LeftBubble { base } => {
                self.left_offset.target = (base + delta.x).clamp(-max, max);
            }
            DialDrag::RightBubble { base } => {
                self.right_offset.target = (base + delta.y).clamp(-max, max);
            }
        }
    }

    fn draw_layer(&self, surface: &mut dyn Surface, name: &str, shift: Vec2) {
        let c = self.center();
        surface.save();
        surface.translate(c);
        surface.rotate(self.rotation.current);
        surface.translate(-c);
        surface.draw_image(name, self.layout.dest().translate(shift));
        surface.restore();
    }
}

impl Sketch for DialSketch {
    fn name(&self) -> &'static str {
        "dial"
    }

    fn assets(&self) -> &'static [AssetRequest] {
        &ASSETS
    }

    fn on_input(&mut self, event: InputEvent, ctx: &FrameCtx, assets: &AssetStore) {
        if ctx.canvas != self.canvas {
            self.canvas = ctx.canvas;
            self.layout = ArtboardLayout::fit(ctx.canvas);
        }
        // Nothing to grab until every layer is on screen.
        let ready = assets.all_ready(&ALL_LAYERS);
        match event {
            InputEvent::Press(_) | InputEvent::Move(_) if !ready => {}
            InputEvent::Press(p) => {
                self.gesture.press(p);
                self.begin_drag(p);
            }
            InputEvent::Move(p) => {
                if self.gesture.move_to(p) {
                    self.continue_drag(p);
                }
            }
            InputEvent::Release(_) | InputEvent::Leave => {
                self.gesture.release();
                self.drag = None;
            }
        }
    }

    fn update(&mut self, ctx: &FrameCtx) {
        if ctx.canvas != self.canvas {
            self.canvas = ctx.canvas;
            self.layout = ArtboardLayout::fit(ctx.canvas);
        }
        let k = self.config.smoothing;
        self.rotation.step(k);
        self.left_offset.step(k);
        self.right_offset.step(k);
    }

    fn draw(&self, surface: &mut dyn Surface, assets: &AssetStore) {
        surface.clear(BACKGROUND);
        if !assets.all_ready(&ALL_LAYERS) {
            return;
        }
        for name in STATIC_LAYERS {
            self.draw_layer(surface, name, Vec2::ZERO);
        }
        self.draw_layer(
            surface,
            LEFT_BUBBLE,
            Vec2::new(self.left_offset.current, 0.0),
        );
        self.draw_layer(
            surface,
            RIGHT_BUBBLE,
            Vec2::new(0.0, self.right_offset.current),
        );
    }
}
