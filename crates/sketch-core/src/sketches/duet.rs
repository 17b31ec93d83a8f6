//! Two text faces on either side of a wall. Dragging one drives it directly
//! while the other mirrors it through the canvas centre; when both wink at
//! each other, level, for long enough they meet in the middle and part ways.

use crate::assets::{AssetRequest, AssetStore};
use crate::body::Body;
use crate::config::DuetConfig;
use crate::constants::BACKGROUND;
use crate::driver::{FrameCtx, Sketch};
use crate::gesture::{GestureTracker, InputEvent};
use crate::math::{smooth_toward, Rect};
use crate::phase::{Phase, PhaseMachine};
use crate::surface::{Surface, TextAlign, TextBaseline, TextStyle};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

const FACE_COLOR: &str = "white";
const SPARK_COLOR: &str = "rgba(255, 220, 120, 1)";
const SPARK_SIZE: f32 = 8.0;
const SPARK_SPEED: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmojiPhase {
    SlidingIn,
    Tracking,
    Snapping,
    Snapped,
    Separating,
    SlidingOut,
    Done,
}

impl Phase for EmojiPhase {
    fn successors(self) -> &'static [Self] {
        use EmojiPhase::*;
        match self {
            SlidingIn => &[Tracking],
            Tracking => &[Snapping],
            Snapping => &[Snapped],
            Snapped => &[Separating],
            Separating => &[SlidingOut],
            SlidingOut => &[Done],
            Done => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Smile,
    Wink,
    Neutral,
    Cat,
}

impl Face {
    pub fn text(self) -> &'static str {
        match self {
            Face::Smile => ":)",
            Face::Wink => ";)",
            Face::Neutral => ":|",
            Face::Cat => ":3",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Emoji {
    side: Side,
    body: Body,
    home: Vec2,
    smoothing: f32,
    neutral: bool,
    winking: bool,
    was_winking: bool,
    visible: bool,
    colon_opacity: f32,
    three_scale: f32,
    phase: PhaseMachine<EmojiPhase>,
}

impl Emoji {
    /// Starts just off its own edge of the canvas and slides to `home`, a
    /// quarter of the width from the centre.
    pub fn new(side: Side, canvas: Vec2, config: &DuetConfig) -> Self {
        let center = canvas * 0.5;
        let home = Vec2::new(center.x + side.sign() * canvas.x / 4.0, center.y);
        let start_x = match side {
            Side::Left => -config.face_size,
            Side::Right => canvas.x + config.face_size,
        };
        let mut body = Body::at(Vec2::new(start_x, home.y));
        body.target = home;
        Self {
            side,
            body,
            home,
            smoothing: config.direct_smoothing,
            neutral: false,
            winking: false,
            was_winking: false,
            visible: true,
            colon_opacity: 1.0,
            three_scale: 1.0,
            phase: PhaseMachine::new(EmojiPhase::SlidingIn),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn phase(&self) -> EmojiPhase {
        self.phase.current()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.body.target
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.body.rotation
    }

    #[inline]
    pub fn home(&self) -> Vec2 {
        self.home
    }

    #[inline]
    pub fn is_winking(&self) -> bool {
        self.winking
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn colon_opacity(&self) -> f32 {
        self.colon_opacity
    }

    #[inline]
    pub fn three_scale(&self) -> f32 {
        self.three_scale
    }

    pub fn face(&self) -> Face {
        match self.phase.current() {
            EmojiPhase::SlidingIn => Face::Smile,
            EmojiPhase::Tracking if self.winking => Face::Wink,
            EmojiPhase::Tracking if self.neutral => Face::Neutral,
            EmojiPhase::Tracking => Face::Smile,
            _ => Face::Cat,
        }
    }

    /// Aim at `pointer` directly, or at its reflection through the canvas
    /// centre when the other face is the one being dragged.
    pub fn follow(&mut self, pointer: Vec2, controlled: bool, center: Vec2, config: &DuetConfig) {
        if !self.phase.is(EmojiPhase::Tracking) {
            return;
        }
        if controlled {
            self.smoothing = config.direct_smoothing;
            self.body.target = pointer;
        } else {
            self.smoothing = config.mirror_smoothing;
            self.body.target = center * 2.0 - pointer;
        }
    }

    pub fn snap_to(&mut self, target: Vec2) {
        if self.phase.advance(EmojiPhase::Snapping) {
            self.body.target = target;
            self.body.target_rotation = 0.0;
            self.winking = false;
        }
    }

    pub fn begin_separation(&mut self, canvas: Vec2) {
        if self.phase.advance(EmojiPhase::Separating) {
            let x = canvas.x * 0.75 + self.side.sign() * canvas.x / 12.0;
            self.body.target = Vec2::new(x, self.body.position.y);
        }
    }

    fn begin_slide_out(&mut self, canvas: Vec2, config: &DuetConfig) {
        if self.phase.advance(EmojiPhase::SlidingOut) {
            let x = match self.side {
                Side::Right => canvas.x + config.face_size,
                Side::Left => canvas.x / 2.0,
            };
            self.body.target = Vec2::new(x, self.body.position.y);
        }
    }

    /// True on the tick a wink begins.
    pub fn wink_started(&mut self) -> bool {
        let started = self.winking && !self.was_winking;
        self.was_winking = self.winking;
        started
    }

    pub fn update(&mut self, canvas: Vec2, config: &DuetConfig, dt_sec: f32) {
        self.phase.tick(dt_sec);
        let center = canvas * 0.5;
        match self.phase.current() {
            EmojiPhase::SlidingIn => {
                self.body.smooth_position(config.slide_in_smoothing);
                if (self.body.position.x - self.home.x).abs() < config.slide_in_tolerance {
                    self.body.position = self.home;
                    self.body.target = self.home;
                    self.phase.advance(EmojiPhase::Tracking);
                    log::debug!("[duet] {:?} face arrived", self.side);
                }
            }
            EmojiPhase::Tracking => {
                self.body.smooth_position(self.smoothing);
                let crossed = match self.side {
                    Side::Right => self.body.position.x > self.home.x,
                    Side::Left => self.body.position.x < self.home.x,
                };
                // Past its home the face turns away from the wall.
                self.neutral = crossed;
                self.body.target_rotation = if crossed { PI } else { 0.0 };
                self.body.smooth_rotation(config.rotation_smoothing);
                self.winking =
                    !self.neutral && self.body.position.distance(center) < canvas.x / 6.0;
            }
            EmojiPhase::Snapping => {
                self.body.smooth_rotation(config.rotation_smoothing);
                let remaining = self.body.eased_snap(
                    config.snap_smoothing,
                    config.snap_reference_dist,
                    config.snap_ease_strength,
                );
                if remaining < config.snap_epsilon {
                    self.body.snap_to_target();
                    self.phase.advance(EmojiPhase::Snapped);
                }
            }
            EmojiPhase::Snapped => {
                self.body.smooth_rotation(config.rotation_smoothing);
            }
            EmojiPhase::Separating => {
                self.body.smooth_position(config.separate_smoothing);
                if self.body.distance_to_target() < config.separate_epsilon {
                    self.begin_slide_out(canvas, config);
                }
            }
            EmojiPhase::SlidingOut => {
                self.body.smooth_position(config.slide_out_smoothing);
                match self.side {
                    Side::Right => {
                        if self.body.position.x > canvas.x {
                            self.visible = false;
                            self.phase.advance(EmojiPhase::Done);
                        }
                    }
                    Side::Left => {
                        self.colon_opacity = (self.colon_opacity - config.colon_fade_step).max(0.0);
                        self.three_scale = smooth_toward(
                            self.three_scale,
                            config.three_target_scale,
                            config.three_scale_smoothing,
                        );
                        if self.colon_opacity == 0.0
                            && (self.three_scale - config.three_target_scale).abs() < 0.01
                        {
                            self.phase.advance(EmojiPhase::Done);
                        }
                    }
                }
            }
            EmojiPhase::Done => {}
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, config: &DuetConfig) {
        if !self.visible {
            return;
        }
        let style = TextStyle {
            font: format!("bold {}px Helvetica Neue, Helvetica, sans-serif", config.face_size),
            color: FACE_COLOR,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        };
        surface.save();
        surface.translate(self.body.position);
        surface.rotate(self.body.rotation);
        if self.side == Side::Right {
            surface.scale(Vec2::new(-1.0, 1.0));
        }
        let leaving = matches!(
            self.phase.current(),
            EmojiPhase::SlidingOut | EmojiPhase::Done
        );
        if self.side == Side::Left && leaving {
            // The colon fades while the mouth grows on its own.
            let half_glyph = config.face_size * 0.125;
            surface.set_global_alpha(self.colon_opacity);
            surface.fill_text(":", Vec2::new(-half_glyph, 0.0), &style);
            surface.set_global_alpha(1.0);
            surface.save();
            surface.scale(Vec2::splat(self.three_scale));
            surface.fill_text("3", Vec2::new(half_glyph / self.three_scale, 0.0), &style);
            surface.restore();
        } else {
            surface.fill_text(self.face().text(), Vec2::ZERO, &style);
        }
        surface.restore();
    }
}

/// Short-lived flash thrown off when a wink starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub position: Vec2,
    pub velocity: Vec2,
    pub age: f32,
    pub life: f32,
}

impl Spark {
    pub fn step(&mut self) {
        self.position += self.velocity;
        self.velocity *= 0.92;
        self.age += 1.0;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.life
    }

    pub fn opacity(&self) -> f32 {
        (1.0 - self.age / self.life).clamp(0.0, 1.0)
    }
}

/// Sparks spaced evenly on the circle of `radius` about `center`, each
/// flying outward.
fn burst(center: Vec2, radius: f32, count: usize, life: f32) -> impl Iterator<Item = Spark> {
    (0..count).map(move |i| {
        let dir = Vec2::from_angle(i as f32 / count as f32 * TAU);
        Spark {
            position: center + dir * radius,
            velocity: dir * SPARK_SPEED,
            age: 0.0,
            life,
        }
    })
}

pub struct DuetSketch {
    config: DuetConfig,
    canvas: Vec2,
    left: Emoji,
    right: Emoji,
    gesture: GestureTracker,
    /// Which face the current drag controls.
    controlled: Option<Side>,
    facing_secs: f32,
    sparks: Vec<Spark>,
}

impl DuetSketch {
    pub fn new(canvas: Vec2, config: DuetConfig) -> Self {
        Self {
            left: Emoji::new(Side::Left, canvas, &config),
            right: Emoji::new(Side::Right, canvas, &config),
            gesture: GestureTracker::default(),
            controlled: None,
            facing_secs: 0.0,
            sparks: Vec::new(),
            canvas,
            config,
        }
    }

    pub fn left(&self) -> &Emoji {
        &self.left
    }

    pub fn right(&self) -> &Emoji {
        &self.right
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    /// Seconds both faces have been winking at each other, level.
    pub fn facing_secs(&self) -> f32 {
        self.facing_secs
    }

    fn both(&self, phase: EmojiPhase) -> bool {
        self.left.phase() == phase && self.right.phase() == phase
    }

    /// Keep the dragged point on its own side of the wall, then steer both
    /// faces.
    fn steer(&mut self, pointer: Vec2) {
        let Some(side) = self.controlled else {
            return;
        };
        let center = self.canvas * 0.5;
        let half_wall = self.config.wall_thickness / 2.0;
        let mut p = pointer;
        p.x = match side {
            Side::Right => p.x.max(center.x + half_wall),
            Side::Left => p.x.min(center.x - half_wall),
        };
        self.left.follow(p, side == Side::Left, center, &self.config);
        self.right.follow(p, side == Side::Right, center, &self.config);
    }

    fn update_courtship(&mut self, dt_sec: f32) {
        if !self.both(EmojiPhase::Tracking) {
            self.facing_secs = 0.0;
            return;
        }
        let aligned =
            (self.left.position().y - self.right.position().y).abs() < self.config.align_tolerance;
        if self.left.is_winking() && self.right.is_winking() && aligned {
            self.facing_secs += dt_sec;
        } else {
            self.facing_secs = 0.0;
        }
        if self.facing_secs >= self.config.facing_secs {
            let center = self.canvas * 0.5;
            let gap = Vec2::new(self.config.snap_gap / 2.0, 0.0);
            self.left.snap_to(center - gap);
            self.right.snap_to(center + gap);
            self.controlled = None;
            self.facing_secs = 0.0;
            log::info!("[duet] faces met in the middle");
        }
    }
}

impl Sketch for DuetSketch {
    fn name(&self) -> &'static str {
        "duet"
    }

    fn assets(&self) -> &'static [AssetRequest] {
        &[]
    }

    fn on_input(&mut self, event: InputEvent, ctx: &FrameCtx, _assets: &AssetStore) {
        self.canvas = ctx.canvas;
        match event {
            InputEvent::Press(p) => {
                if !self.both(EmojiPhase::Tracking) {
                    return;
                }
                self.gesture.press(p);
                self.controlled = Some(if p.x > ctx.center().x {
                    Side::Right
                } else {
                    Side::Left
                });
                self.steer(p);
            }
            InputEvent::Move(p) => {
                if self.gesture.move_to(p) {
                    self.steer(p);
                }
            }
            InputEvent::Release(_) | InputEvent::Leave => {
                self.gesture.release();
                self.controlled = None;
            }
        }
    }

    fn update(&mut self, ctx: &FrameCtx) {
        self.canvas = ctx.canvas;
        self.left.update(ctx.canvas, &self.config, ctx.dt_sec);
        self.right.update(ctx.canvas, &self.config, ctx.dt_sec);

        for spark in &mut self.sparks {
            spark.step();
        }
        self.sparks.retain(Spark::is_alive);

        let left_wink = self.left.wink_started();
        let right_wink = self.right.wink_started();
        if left_wink || right_wink {
            let center = ctx.center();
            let radius = self.left.position().distance(center);
            self.sparks.extend(burst(
                center,
                radius,
                self.config.burst_sparks,
                self.config.spark_life_ticks,
            ));
        }

        self.update_courtship(ctx.dt_sec);

        let dwell = self.config.snapped_secs;
        if self.both(EmojiPhase::Snapped)
            && self.left.phase.elapsed() >= dwell
            && self.right.phase.elapsed() >= dwell
        {
            self.left.begin_separation(ctx.canvas);
            self.right.begin_separation(ctx.canvas);
            log::info!("[duet] separating");
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _assets: &AssetStore) {
        surface.clear(BACKGROUND);
        for spark in &self.sparks {
            surface.save();
            surface.set_global_alpha(spark.opacity());
            surface.fill_rect(
                Rect::from_center_size(spark.position, Vec2::splat(SPARK_SIZE)),
                SPARK_COLOR,
            );
            surface.restore();
        }
        self.left.draw(surface, &self.config);
        self.right.draw(surface, &self.config);
    }

    fn is_finished(&self) -> bool {
        self.both(EmojiPhase::Done)
    }
}
