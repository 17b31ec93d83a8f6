//! Frame pacing and the per-frame control flow shared by every front-end:
//! queued input first, then fixed-step updates, then one draw.

use crate::assets::{AssetRequest, AssetStore};
use crate::constants::{MAX_TICKS_PER_FRAME, TICK_HZ, TICK_SECONDS};
use crate::error::SketchError;
use crate::gesture::InputEvent;
use crate::path::CurveSource;
use crate::surface::Surface;
use glam::Vec2;
use std::collections::VecDeque;
use std::time::Duration;

/// Converts wall-clock frame time into whole fixed ticks.
#[derive(Clone, Debug)]
pub struct FrameClock {
    step: Duration,
    accum: Duration,
    max_ticks: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_HZ, MAX_TICKS_PER_FRAME)
    }
}

impl FrameClock {
    pub fn new(hz: f32, max_ticks: u32) -> Self {
        Self {
            step: Duration::from_nanos((1e9 / f64::from(hz)) as u64),
            accum: Duration::ZERO,
            max_ticks: max_ticks.max(1),
        }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of ticks to run for a frame that took `dt`. Backlog beyond
    /// `max_ticks` is dropped.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accum += dt;
        let mut ticks = 0;
        while self.accum >= self.step && ticks < self.max_ticks {
            self.accum -= self.step;
            ticks += 1;
        }
        if self.accum >= self.step {
            self.accum = Duration::ZERO;
        }
        ticks
    }
}

/// What a sketch can see during one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    pub canvas: Vec2,
    pub dt_sec: f32,
    pub tick: u64,
}

impl FrameCtx {
    pub fn new(canvas: Vec2) -> Self {
        Self {
            canvas,
            dt_sec: TICK_SECONDS,
            tick: 0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.canvas * 0.5
    }
}

pub trait Sketch {
    fn name(&self) -> &'static str;

    /// Assets the front-end should fetch before the loop starts.
    fn assets(&self) -> &'static [AssetRequest];

    /// A curve asset finished loading (or failed to).
    fn on_curve(&mut self, _name: &str, _curve: Result<CurveSource, SketchError>) {}

    fn on_input(&mut self, event: InputEvent, ctx: &FrameCtx, assets: &AssetStore);

    /// Advance one fixed tick.
    fn update(&mut self, ctx: &FrameCtx);

    fn draw(&self, surface: &mut dyn Surface, assets: &AssetStore);

    fn is_finished(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Finished,
}

/// Owns one sketch plus everything the frame loop needs around it.
pub struct SketchRunner {
    sketch: Box<dyn Sketch>,
    assets: AssetStore,
    clock: FrameClock,
    queue: VecDeque<InputEvent>,
    tick: u64,
    finished: bool,
}

impl SketchRunner {
    pub fn new(sketch: Box<dyn Sketch>) -> Self {
        let mut assets = AssetStore::new();
        for req in sketch.assets() {
            assets.register(req.name);
        }
        log::info!("[runner] {} with {} assets", sketch.name(), sketch.assets().len());
        Self {
            sketch,
            assets,
            clock: FrameClock::default(),
            queue: VecDeque::new(),
            tick: 0,
            finished: false,
        }
    }

    pub fn sketch(&self) -> &dyn Sketch {
        self.sketch.as_ref()
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetStore {
        &mut self.assets
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record a loaded (or failed) curve and hand it to the sketch.
    pub fn deliver_curve(&mut self, name: &str, curve: Result<CurveSource, SketchError>) {
        match &curve {
            Ok(c) => self.assets.mark_ready(name, c.view_box().size()),
            Err(e) => self.assets.mark_failed(name, e.to_string()),
        }
        self.sketch.on_curve(name, curve);
    }

    /// Queue pointer input; it is applied at the start of the next frame.
    pub fn queue_input(&mut self, event: InputEvent) {
        if !self.finished {
            self.queue.push_back(event);
        }
    }

    /// Stop the loop; later frames do nothing.
    pub fn finish(&mut self) {
        if !self.finished {
            log::info!("[runner] {} finished after {} ticks", self.sketch.name(), self.tick);
        }
        self.finished = true;
        self.queue.clear();
    }

    pub fn frame(&mut self, dt: Duration, canvas: Vec2, surface: &mut dyn Surface) -> RunState {
        if self.finished {
            return RunState::Finished;
        }
        let mut ctx = FrameCtx {
            canvas,
            dt_sec: TICK_SECONDS,
            tick: self.tick,
        };
        while let Some(event) = self.queue.pop_front() {
            self.sketch.on_input(event, &ctx, &self.assets);
        }
        for _ in 0..self.clock.advance(dt) {
            self.tick += 1;
            ctx.tick = self.tick;
            self.sketch.update(&ctx);
            if self.sketch.is_finished() {
                break;
            }
        }
        self.sketch.draw(surface, &self.assets);
        if self.sketch.is_finished() {
            self.finish();
            return RunState::Finished;
        }
        RunState::Running
    }
}
