//! Hold to drive a car along a curvy road; highlighted stretches of road
//! fill in behind it the first time it passes.

use crate::assets::{AssetRequest, AssetStore};
use crate::body::Body;
use crate::config::RoadConfig;
use crate::constants::{BACKGROUND, CAR_ASPECT, SAMPLE_MARKER_SIZE, ZONE_TRAIL_WIDTH};
use crate::driver::{FrameCtx, Sketch};
use crate::error::SketchError;
use crate::gesture::{GestureTracker, InputEvent};
use crate::math::{point_in_polygon, rotated_rect_corners, Rect};
use crate::path::{CurveSource, PathSampler, Zone};
use crate::phase::{Phase, PhaseMachine};
use crate::surface::{StrokeStyle, Surface};
use glam::Vec2;

pub const ROAD: &str = "road";
pub const CAR: &str = "car";

static ASSETS: [AssetRequest; 2] = [
    AssetRequest::curve(ROAD, "path.svg"),
    AssetRequest::image(CAR, "Voiture.svg"),
];

const ROAD_COLOR: &str = "white";
const ROAD_WIDTH: f32 = 2.0;
const MARKER_COLOR: &str = "red";
const ZONE_COLOR: &str = "rgba(255, 200, 0, 1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarPhase {
    /// No road yet.
    Parked,
    Coasting,
    Accelerating,
}

impl Phase for CarPhase {
    fn successors(self) -> &'static [Self] {
        match self {
            CarPhase::Parked => &[CarPhase::Coasting],
            CarPhase::Coasting => &[CarPhase::Accelerating],
            CarPhase::Accelerating => &[CarPhase::Coasting],
        }
    }
}

/// The single pooled traveller. Running off the end of the road respawns it
/// at the start instead of creating a new one.
#[derive(Clone, Debug)]
pub struct Car {
    body: Body,
    size: Vec2,
    distance: f32,
    speed: f32,
    laps: u32,
    phase: PhaseMachine<CarPhase>,
}

impl Car {
    pub fn new(width: f32) -> Self {
        Self {
            body: Body::default(),
            size: Vec2::new(width, width * CAR_ASPECT),
            distance: 0.0,
            speed: 0.0,
            laps: 0,
            phase: PhaseMachine::new(CarPhase::Parked),
        }
    }

    #[inline]
    pub fn phase(&self) -> CarPhase {
        self.phase.current()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.body.rotation
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Times the car ran off the end and started over.
    #[inline]
    pub fn laps(&self) -> u32 {
        self.laps
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Put the car at the start of `road` and let it coast.
    pub fn place(&mut self, road: &PathSampler) {
        self.respawn(road);
        if self.phase.is(CarPhase::Parked) {
            self.phase.advance(CarPhase::Coasting);
        }
    }

    fn respawn(&mut self, road: &PathSampler) {
        self.distance = 0.0;
        self.speed = 0.0;
        if let (Some(p), Some(a)) = (road.position_at_distance(0.0), road.angle_at_distance(0.0)) {
            self.body.position = p;
            self.body.rotation = a;
        }
    }

    pub fn accelerate(&mut self) {
        if self.phase.is(CarPhase::Coasting) {
            self.phase.advance(CarPhase::Accelerating);
        }
    }

    pub fn coast(&mut self) {
        if self.phase.is(CarPhase::Accelerating) {
            self.phase.advance(CarPhase::Coasting);
        }
    }

    pub fn update(&mut self, road: &PathSampler, config: &RoadConfig, dt_sec: f32) {
        self.phase.tick(dt_sec);
        match self.phase.current() {
            CarPhase::Parked => return,
            CarPhase::Accelerating => self.speed += config.acceleration,
            CarPhase::Coasting => self.speed *= config.coast_damping,
        }
        self.distance += self.speed;
        match (
            road.position_at_distance(self.distance),
            road.angle_at_distance(self.distance),
        ) {
            (Some(p), Some(a)) => {
                self.body.position = p;
                self.body.rotation = a;
            }
            _ => {
                self.laps += 1;
                log::info!("[road] end of road, respawning (lap {})", self.laps);
                self.respawn(road);
            }
        }
    }

    /// Progress along `road` in percent.
    pub fn progress_pct(&self, road: &PathSampler) -> Option<f32> {
        (road.total_length() > 0.0).then(|| self.distance / road.total_length() * 100.0)
    }

    /// Whether `p` falls under the car's rotated body.
    pub fn covers(&self, p: Vec2) -> bool {
        let corners = rotated_rect_corners(self.body.position, self.size, self.body.rotation);
        point_in_polygon(p, &corners)
    }
}

pub struct RoadSketch {
    config: RoadConfig,
    canvas: Vec2,
    road: PathSampler,
    car: Car,
    zones: Vec<Zone>,
    gesture: GestureTracker,
}

impl RoadSketch {
    pub fn new(canvas: Vec2, config: RoadConfig) -> Self {
        let zones = config
            .zones_pct
            .iter()
            .map(|[start, end]| Zone::new(*start, *end))
            .collect();
        Self {
            car: Car::new(config.car_width),
            road: PathSampler::unloaded(),
            zones,
            gesture: GestureTracker::default(),
            canvas,
            config,
        }
    }

    pub fn road(&self) -> &PathSampler {
        &self.road
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Lay `curve` across the canvas and sample it.
    pub fn install_curve(&mut self, curve: &CurveSource) -> Result<(), SketchError> {
        let fitted = curve.fit_to_width(self.canvas);
        self.road = PathSampler::from_curve(&fitted, self.config.sample_step)?;
        self.car.place(&self.road);
        if self.gesture.is_pressed() {
            self.car.accelerate();
        }
        log::info!(
            "[road] {} samples over {:.0}px",
            self.road.points().len(),
            self.road.total_length()
        );
        Ok(())
    }

    fn draw_zones(&self, surface: &mut dyn Surface) {
        let total = self.road.total_length();
        let style = StrokeStyle {
            color: ZONE_COLOR,
            width: ZONE_TRAIL_WIDTH,
            round_cap: true,
        };
        for (start, end) in self.zones.iter().filter_map(Zone::drawn_range) {
            let trail = self.road.polyline_between(start / 100.0 * total, end / 100.0 * total);
            if trail.len() > 1 {
                surface.stroke_polyline(&trail, &style);
            }
        }
    }

    fn draw_car(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.translate(self.car.position());
        surface.rotate(self.car.rotation());
        surface.draw_image(CAR, Rect::from_center_size(Vec2::ZERO, self.car.size()));
        surface.restore();
    }
}

impl Sketch for RoadSketch {
    fn name(&self) -> &'static str {
        "road"
    }

    fn assets(&self) -> &'static [AssetRequest] {
        &ASSETS
    }

    fn on_curve(&mut self, name: &str, curve: Result<CurveSource, SketchError>) {
        if name != ROAD {
            return;
        }
        let result = curve.and_then(|c| self.install_curve(&c));
        if let Err(e) = result {
            log::error!("[road] road unavailable: {}", e);
            self.road = PathSampler::unloaded();
        }
    }

    fn on_input(&mut self, event: InputEvent, _ctx: &FrameCtx, _assets: &AssetStore) {
        match event {
            InputEvent::Press(p) => {
                self.gesture.press(p);
                self.car.accelerate();
            }
            InputEvent::Move(p) => {
                self.gesture.move_to(p);
            }
            InputEvent::Release(_) | InputEvent::Leave => {
                self.gesture.release();
                self.car.coast();
            }
        }
    }

    fn update(&mut self, ctx: &FrameCtx) {
        self.car.update(&self.road, &self.config, ctx.dt_sec);
        if let Some(pct) = self.car.progress_pct(&self.road) {
            for zone in &mut self.zones {
                zone.observe(pct);
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, assets: &AssetStore) {
        surface.clear(BACKGROUND);
        if !self.road.is_loaded() {
            return;
        }
        surface.stroke_polyline(
            self.road.points(),
            &StrokeStyle {
                color: ROAD_COLOR,
                width: ROAD_WIDTH,
                round_cap: false,
            },
        );
        let marker = Vec2::splat(SAMPLE_MARKER_SIZE);
        for p in self.road.points() {
            if !self.car.covers(*p) {
                surface.fill_rect(Rect::from_center_size(*p, marker), MARKER_COLOR);
            }
        }
        self.draw_zones(surface);
        if assets.is_ready(CAR) {
            self.draw_car(surface);
        }
    }
}
