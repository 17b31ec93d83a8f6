// Frame pacing, the runner's control flow, sketch selection and config checks.

use glam::Vec2;
use sketch_core::surface::Surface;
use sketch_core::{
    AssetRequest, AssetStore, DialConfig, DuetConfig, FlowerConfig, FrameClock, FrameCtx,
    InputEvent, RecordingSurface, RoadConfig, RunState, Sketch, SketchError, SketchKind,
    SketchRunner,
};
use std::time::Duration;

#[test]
fn clock_runs_whole_ticks_and_carries_remainder() {
    let mut clock = FrameClock::new(60.0, 4);
    let step = clock.step();
    assert_eq!(clock.advance(step * 2), 2);
    assert_eq!(clock.advance(step / 2), 0);
    assert_eq!(clock.advance(step / 2 + Duration::from_micros(10)), 1);
}

#[test]
fn clock_drops_backlog_after_a_stall() {
    let mut clock = FrameClock::new(60.0, 4);
    let step = clock.step();
    assert_eq!(clock.advance(step * 10), 4);
    assert_eq!(clock.advance(Duration::ZERO), 0);
}

static NO_ASSETS: [AssetRequest; 1] = [AssetRequest::image("dot", "dot.svg")];

#[derive(Default)]
struct Counter {
    updates: u32,
    presses: u32,
    stop_after: u32,
}

impl Sketch for Counter {
    fn name(&self) -> &'static str {
        "counter"
    }
    fn assets(&self) -> &'static [AssetRequest] {
        &NO_ASSETS
    }
    fn on_input(&mut self, event: InputEvent, _ctx: &FrameCtx, _assets: &AssetStore) {
        if let InputEvent::Press(_) = event {
            self.presses += 1;
        }
    }
    fn update(&mut self, _ctx: &FrameCtx) {
        self.updates += 1;
    }
    fn draw(&self, surface: &mut dyn Surface, _assets: &AssetStore) {
        surface.clear("black");
    }
    fn is_finished(&self) -> bool {
        self.updates >= self.stop_after
    }
}

fn counter(stop_after: u32) -> SketchRunner {
    SketchRunner::new(Box::new(Counter {
        stop_after,
        ..Counter::default()
    }))
}

#[test]
fn runner_registers_assets_as_pending() {
    let runner = counter(10);
    assert!(!runner.assets().is_ready("dot"));
    assert_eq!(runner.assets().pending().collect::<Vec<_>>(), vec!["dot"]);
}

#[test]
fn runner_updates_then_draws_once_per_frame() {
    let mut runner = counter(100);
    let mut surface = RecordingSurface::new(Vec2::new(64.0, 64.0));
    let step = runner.clock().step();

    runner.queue_input(InputEvent::Press(Vec2::ONE));
    assert_eq!(runner.frame(step * 3, surface.size(), &mut surface), RunState::Running);
    assert_eq!(runner.ticks(), 3);
    assert_eq!(surface.commands().len(), 1);
}

#[test]
fn runner_stops_when_the_sketch_finishes() {
    let mut runner = counter(5);
    let mut surface = RecordingSurface::new(Vec2::new(64.0, 64.0));
    let step = runner.clock().step();

    let mut frames = 0;
    while runner.frame(step, surface.size(), &mut surface) == RunState::Running {
        frames += 1;
        assert!(frames < 100);
    }
    assert_eq!(runner.ticks(), 5);
    assert!(runner.is_finished());

    surface.clear_commands();
    runner.queue_input(InputEvent::Press(Vec2::ONE));
    assert_eq!(runner.frame(step, surface.size(), &mut surface), RunState::Finished);
    assert!(surface.commands().is_empty());
    assert_eq!(runner.ticks(), 5);
}

#[test]
fn finish_halts_a_running_sketch() {
    let mut runner = counter(1000);
    let mut surface = RecordingSurface::new(Vec2::splat(8.0));
    runner.finish();
    assert_eq!(
        runner.frame(runner.clock().step(), surface.size(), &mut surface),
        RunState::Finished
    );
    assert_eq!(runner.ticks(), 0);
}

#[test]
fn failed_curves_are_recorded() {
    let mut runner = counter(10);
    runner.deliver_curve("dot", Err(SketchError::CurveParse("empty".into())));
    assert!(!runner.assets().is_ready("dot"));
    assert!(runner.assets().pending().next().is_none());
}

#[test]
fn sketch_kinds_parse_by_name() {
    assert_eq!("flower".parse::<SketchKind>().unwrap(), SketchKind::Flower);
    assert_eq!(" Road ".parse::<SketchKind>().unwrap(), SketchKind::Road);
    assert_eq!(
        "fireworks".parse::<SketchKind>(),
        Err(SketchError::UnknownSketch("fireworks".into()))
    );
    for kind in SketchKind::ALL {
        assert_eq!(kind.to_string().parse::<SketchKind>().unwrap(), kind);
    }
}

#[test]
fn every_kind_builds_with_default_tuning() {
    for kind in SketchKind::ALL {
        let sketch = kind.build(Vec2::new(1280.0, 720.0), 42).unwrap();
        assert_eq!(sketch.name(), kind.name());
        assert!(!sketch.is_finished());
    }
}

#[test]
fn default_configs_validate() {
    FlowerConfig::default().validate().unwrap();
    RoadConfig::default().validate().unwrap();
    DuetConfig::default().validate().unwrap();
    DialConfig::default().validate().unwrap();
}

#[test]
fn bad_tuning_is_rejected_with_the_field_name() {
    let duet = DuetConfig {
        direct_smoothing: 0.0,
        ..DuetConfig::default()
    };
    assert!(matches!(
        duet.validate(),
        Err(SketchError::InvalidConfig {
            field: "direct_smoothing",
            ..
        })
    ));

    let road = RoadConfig {
        zones_pct: vec![[50.0, 20.0]],
        ..RoadConfig::default()
    };
    assert!(matches!(
        road.validate(),
        Err(SketchError::InvalidConfig { field: "zones_pct", .. })
    ));

    let road = RoadConfig {
        coast_damping: 1.0,
        ..RoadConfig::default()
    };
    assert!(road.validate().is_err());

    let mut flower = FlowerConfig::default();
    flower.rise_frames = 0;
    assert!(matches!(
        flower.validate(),
        Err(SketchError::InvalidConfig { field: "rise_frames", .. })
    ));
}
