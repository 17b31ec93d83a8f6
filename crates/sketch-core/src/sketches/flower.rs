//! Slice the leaves and the bloom off a flower; once everything has fallen,
//! the bare stem centres itself, the finished flower fades in over it, holds
//! for a moment and then drops out of the window.

use crate::assets::{AssetRequest, AssetStore};
use crate::body::Body;
use crate::config::FlowerConfig;
use crate::constants::{
    BACKGROUND, DETACHED_TINT_FILTER, FLOWER_ASPECT, SLICE_TRAIL_COLOR, SLICE_TRAIL_WIDTH,
};
use crate::driver::{FrameCtx, Sketch};
use crate::gesture::{DragPath, GestureTracker, InputEvent};
use crate::math::Rect;
use crate::parts::{DetachablePart, PartSet};
use crate::phase::{Phase, PhaseMachine};
use crate::surface::{StrokeStyle, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const STEM: &str = "stem";
pub const LEFT_LEAF: &str = "left_leaf";
pub const RIGHT_LEAF: &str = "right_leaf";
pub const BLOOM: &str = "bloom";
pub const FINAL_FLOWER: &str = "final_flower";

/// Layers that must be ready before the flower draws or reacts to slices.
const PLANT_LAYERS: [&str; 4] = [STEM, LEFT_LEAF, RIGHT_LEAF, BLOOM];

static ASSETS: [AssetRequest; 5] = [
    AssetRequest::image(BLOOM, "fleur.svg"),
    AssetRequest::image(STEM, "1.svg"),
    AssetRequest::image(LEFT_LEAF, "fgauche.svg"),
    AssetRequest::image(RIGHT_LEAF, "fdroite.svg"),
    AssetRequest::image(FINAL_FLOWER, "final1.svg"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowerPhase {
    Rising,
    Gardening,
    Centering,
    Holding,
    FadingIn,
    Showcase,
    Falling,
    Done,
}

impl Phase for FlowerPhase {
    fn successors(self) -> &'static [Self] {
        use FlowerPhase::*;
        match self {
            Rising => &[Gardening],
            Gardening => &[Centering],
            Centering => &[Holding],
            Holding => &[FadingIn],
            FadingIn => &[Showcase],
            Showcase => &[Falling],
            Falling => &[Done],
            Done => &[],
        }
    }
}

pub struct Flower {
    config: FlowerConfig,
    phase: PhaseMachine<FlowerPhase>,
    body: Body,
    size: Vec2,
    parts: PartSet,
    rise_speed: f32,
    centering_speed: f32,
    final_opacity: f32,
    rng: StdRng,
}

impl Flower {
    /// A flower of `height` that rises from below the canvas to `target_y`.
    pub fn new(
        center_x: f32,
        target_y: f32,
        height: f32,
        canvas_height: f32,
        config: FlowerConfig,
        seed: u64,
    ) -> Self {
        let size = Vec2::new(height * FLOWER_ASPECT, height);
        let start = Vec2::new(center_x, canvas_height + height);
        let mut body = Body::at(start);
        body.target = Vec2::new(center_x, target_y);
        let rise_speed = (start.y - target_y) / config.rise_frames as f32;
        Self {
            parts: Self::build_parts(size),
            phase: PhaseMachine::new(FlowerPhase::Rising),
            body,
            size,
            rise_speed,
            centering_speed: 0.0,
            final_opacity: 0.0,
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// Sized and placed the way the sketch lays it out on `canvas`.
    pub fn for_canvas(canvas: Vec2, config: FlowerConfig, seed: u64) -> Self {
        let height = canvas.y * config.height_ratio;
        let target_y = canvas.y / 2.0 + (canvas.y - height) / 2.0;
        Self::new(canvas.x / 2.0, target_y, height, canvas.y, config, seed)
    }

    fn build_parts(size: Vec2) -> PartSet {
        let half = size * 0.5;
        let inf = f32::INFINITY;
        let leaf_y = (-half.y * 0.2, half.y * 0.4);
        PartSet::new([
            DetachablePart::new(
                LEFT_LEAF,
                Rect::new(
                    Vec2::new(-inf, leaf_y.0),
                    Vec2::new(-half.x * 0.2, leaf_y.1),
                ),
            ),
            DetachablePart::new(
                RIGHT_LEAF,
                Rect::new(Vec2::new(half.x * 0.2, leaf_y.0), Vec2::new(inf, leaf_y.1)),
            ),
            DetachablePart::new(
                BLOOM,
                Rect::new(
                    Vec2::new(-half.x * 0.6, -inf),
                    Vec2::new(half.x * 0.6, -half.y * 0.3),
                ),
            ),
        ])
    }

    #[inline]
    pub fn phase(&self) -> FlowerPhase {
        self.phase.current()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn parts(&self) -> &PartSet {
        &self.parts
    }

    #[inline]
    pub fn final_opacity(&self) -> f32 {
        self.final_opacity
    }

    #[inline]
    pub fn fall_rotation(&self) -> f32 {
        self.body.rotation
    }

    /// Only the gardening phase accepts slices.
    #[inline]
    pub fn accepts_slices(&self) -> bool {
        self.phase.is(FlowerPhase::Gardening)
    }

    /// Run a finished drag path against the parts. Returns how many parts
    /// came off.
    pub fn slice(&mut self, path: &DragPath) -> usize {
        if !self.accepts_slices() {
            return 0;
        }
        self.parts
            .slice_path(self.body.position, path, &self.config.physics, &mut self.rng)
    }

    pub fn update(&mut self, canvas_height: f32, dt_sec: f32) {
        self.phase.tick(dt_sec);
        match self.phase.current() {
            FlowerPhase::Rising => {
                self.body.position.y -= self.rise_speed;
                if self.phase.ticks() >= self.config.rise_frames
                    || self.body.position.y <= self.body.target.y
                {
                    self.body.snap_to_target();
                    self.enter(FlowerPhase::Gardening);
                    log::info!("[flower] fully risen");
                }
            }
            FlowerPhase::Gardening => {
                self.parts.step(&self.config.physics);
                let threshold = canvas_height + self.config.fallen_margin;
                if self.parts.all_below(self.body.position.y, threshold) {
                    self.start_centering(canvas_height);
                }
            }
            FlowerPhase::Centering => {
                self.body.position.y += self.centering_speed;
                if (self.body.position.y - self.body.target.y).abs() <= self.centering_speed.abs() {
                    self.body.snap_to_target();
                    self.enter(FlowerPhase::Holding);
                    log::info!("[flower] stem centered");
                }
            }
            FlowerPhase::Holding => {
                if self.phase.ticks() >= self.config.hold_frames {
                    self.enter(FlowerPhase::FadingIn);
                    log::info!("[flower] final flower appearing");
                }
            }
            FlowerPhase::FadingIn => {
                self.final_opacity += self.config.fade_step;
                if self.final_opacity >= 1.0 {
                    self.final_opacity = 1.0;
                    self.enter(FlowerPhase::Showcase);
                }
            }
            FlowerPhase::Showcase => {
                if self.phase.ticks() >= self.config.showcase_frames {
                    self.body.velocity = Vec2::ZERO;
                    self.body.angular_velocity =
                        (self.rng.gen::<f32>() - 0.5) * self.config.fall_spin_span;
                    self.enter(FlowerPhase::Falling);
                    log::info!("[flower] final flower falling");
                }
            }
            FlowerPhase::Falling => {
                // Spin stays constant while the whole plant drops.
                self.body.integrate(
                    self.config.physics.gravity * self.config.fall_gravity_scale,
                    1.0,
                );
                self.body.velocity.x = 0.0;
                if self.body.position.y > canvas_height + self.size.y {
                    self.enter(FlowerPhase::Done);
                    log::info!("[flower] fell out of the window");
                }
            }
            FlowerPhase::Done => {}
        }
    }

    fn start_centering(&mut self, canvas_height: f32) {
        let size = self.size.y * self.config.centered_size_ratio;
        let target_y = canvas_height / 2.0 - (canvas_height - size) / 2.0;
        self.body.target.y = target_y;
        self.centering_speed = (target_y - self.body.position.y) / self.config.centering_frames as f32;
        self.enter(FlowerPhase::Centering);
        log::info!("[flower] gardening complete, centering stem");
    }

    fn enter(&mut self, next: FlowerPhase) {
        self.phase.advance(next);
    }

    fn draw_layer(&self, surface: &mut dyn Surface, image: &str, part: Option<&DetachablePart>) {
        surface.save();
        if let Some(part) = part {
            surface.translate(part.offset);
            surface.rotate(part.rotation);
            if part.detached {
                surface.set_filter(Some(DETACHED_TINT_FILTER));
            }
        }
        surface.draw_image(image, Rect::from_center_size(Vec2::ZERO, self.size));
        surface.restore();
    }

    pub fn draw(&self, surface: &mut dyn Surface, assets: &AssetStore) {
        if !assets.all_ready(&PLANT_LAYERS) || self.phase.is(FlowerPhase::Done) {
            return;
        }
        surface.save();
        surface.translate(self.body.position);
        if self.phase.is(FlowerPhase::Falling) {
            surface.rotate(self.body.rotation);
        }

        self.draw_layer(surface, STEM, None);
        if matches!(
            self.phase.current(),
            FlowerPhase::Rising | FlowerPhase::Gardening
        ) {
            for part in self.parts.iter() {
                self.draw_layer(surface, part.name, Some(part));
            }
        }

        let showing_final = matches!(
            self.phase.current(),
            FlowerPhase::FadingIn | FlowerPhase::Showcase | FlowerPhase::Falling
        );
        if showing_final && assets.is_ready(FINAL_FLOWER) {
            surface.save();
            surface.set_global_alpha(self.final_opacity);
            surface.draw_image(FINAL_FLOWER, Rect::from_center_size(Vec2::ZERO, self.size));
            surface.restore();
        }
        surface.restore();
    }
}

pub struct FlowerSketch {
    flower: Flower,
    gesture: GestureTracker,
}

impl FlowerSketch {
    pub fn new(canvas: Vec2, config: FlowerConfig, seed: u64) -> Self {
        log::info!("[flower] created for {}x{}", canvas.x, canvas.y);
        Self {
            flower: Flower::for_canvas(canvas, config, seed),
            gesture: GestureTracker::default(),
        }
    }

    pub fn flower(&self) -> &Flower {
        &self.flower
    }

    fn finish_gesture(&mut self, assets: &AssetStore) {
        let Some(path) = self.gesture.release() else {
            return;
        };
        if assets.all_ready(&PLANT_LAYERS) {
            self.flower.slice(&path);
        }
    }
}

impl Sketch for FlowerSketch {
    fn name(&self) -> &'static str {
        "flower"
    }

    fn assets(&self) -> &'static [AssetRequest] {
        &ASSETS
    }

    fn on_input(&mut self, event: InputEvent, _ctx: &FrameCtx, assets: &AssetStore) {
        match event {
            InputEvent::Press(p) => self.gesture.press(p),
            InputEvent::Move(p) => {
                self.gesture.move_to(p);
            }
            InputEvent::Release(_) | InputEvent::Leave => self.finish_gesture(assets),
        }
    }

    fn update(&mut self, ctx: &FrameCtx) {
        self.flower.update(ctx.canvas.y, ctx.dt_sec);
    }

    fn draw(&self, surface: &mut dyn Surface, assets: &AssetStore) {
        surface.clear(BACKGROUND);
        self.flower.draw(surface, assets);

        let trail = self.gesture.path();
        if self.gesture.is_pressed() && trail.len() > 1 && self.flower.accepts_slices() {
            surface.stroke_polyline(
                trail.points(),
                &StrokeStyle {
                    color: SLICE_TRAIL_COLOR,
                    width: SLICE_TRAIL_WIDTH,
                    round_cap: true,
                },
            );
        }
    }

    fn is_finished(&self) -> bool {
        self.flower.phase() == FlowerPhase::Done
    }
}
