// The slice-the-flower sketch from rise to fall.

use glam::Vec2;
use sketch_core::constants::{DETACHED_TINT_FILTER, TICK_SECONDS};
use sketch_core::sketches::flower::{Flower, FlowerPhase, FlowerSketch};
use sketch_core::surface::DrawCommand;
use sketch_core::{DragPath, FlowerConfig, InputEvent, RecordingSurface, RunState, Sketch, SketchRunner};

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

fn risen_flower() -> Flower {
    let mut flower = Flower::for_canvas(CANVAS, FlowerConfig::default(), 11);
    for _ in 0..90 {
        flower.update(CANVAS.y, TICK_SECONDS);
    }
    assert_eq!(flower.phase(), FlowerPhase::Gardening);
    flower
}

/// Cuts through the bloom, then sweeps across both leaves.
fn slice_everything(flower: &mut Flower) -> usize {
    let center = flower.position();
    let bloom_y = center.y - flower.size().y * 0.3;
    let leaf_y = center.y + 20.0;
    flower.slice(&DragPath::from_points([
        Vec2::new(center.x - 100.0, bloom_y),
        Vec2::new(center.x + 100.0, bloom_y),
    ])) + flower.slice(&DragPath::from_points([
        Vec2::new(0.0, leaf_y),
        Vec2::new(center.x, leaf_y),
        Vec2::new(CANVAS.x, leaf_y),
    ]))
}

#[test]
fn rises_to_its_target_in_exactly_ninety_updates() {
    let mut flower = Flower::new(200.0, 100.0, 200.0, 400.0, FlowerConfig::default(), 1);
    assert_eq!(flower.position().y, 600.0);
    for _ in 0..89 {
        flower.update(400.0, TICK_SECONDS);
    }
    assert_eq!(flower.phase(), FlowerPhase::Rising);
    assert!(flower.position().y > 100.0);

    flower.update(400.0, TICK_SECONDS);
    assert_eq!(flower.phase(), FlowerPhase::Gardening);
    assert_eq!(flower.position().y, 100.0);
}

#[test]
fn slices_are_ignored_while_rising() {
    let mut flower = Flower::for_canvas(CANVAS, FlowerConfig::default(), 2);
    let cut = DragPath::from_points([Vec2::new(0.0, 650.0), Vec2::new(800.0, 650.0)]);
    assert_eq!(flower.slice(&cut), 0);
    assert!(flower.parts().iter().all(|p| !p.detached));
}

#[test]
fn a_slice_across_the_bloom_only_takes_the_bloom() {
    let mut flower = risen_flower();
    let center = flower.position();
    let y = center.y - flower.size().y * 0.3;
    let taken = flower.slice(&DragPath::from_points([
        Vec2::new(center.x - 50.0, y),
        Vec2::new(center.x + 50.0, y),
    ]));
    assert_eq!(taken, 1);
    let detached: Vec<_> = flower
        .parts()
        .iter()
        .filter(|p| p.detached)
        .map(|p| p.name)
        .collect();
    assert_eq!(detached, vec!["bloom"]);
}

#[test]
fn runs_through_every_phase_once_gardened() {
    let mut flower = risen_flower();
    assert_eq!(slice_everything(&mut flower), 3);

    let mut seen = vec![flower.phase()];
    for _ in 0..5000 {
        flower.update(CANVAS.y, TICK_SECONDS);
        if seen.last() != Some(&flower.phase()) {
            seen.push(flower.phase());
        }
        if flower.phase() == FlowerPhase::Done {
            break;
        }
    }
    assert_eq!(
        seen,
        vec![
            FlowerPhase::Gardening,
            FlowerPhase::Centering,
            FlowerPhase::Holding,
            FlowerPhase::FadingIn,
            FlowerPhase::Showcase,
            FlowerPhase::Falling,
            FlowerPhase::Done,
        ]
    );
    assert_eq!(flower.final_opacity(), 1.0);
}

#[test]
fn centering_stops_on_the_reduced_stem_target() {
    let mut flower = risen_flower();
    slice_everything(&mut flower);
    while flower.phase() != FlowerPhase::Holding {
        flower.update(CANVAS.y, TICK_SECONDS);
    }
    let height = CANVAS.y * 0.8;
    let expected = CANVAS.y / 2.0 - (CANVAS.y - height * 0.9) / 2.0;
    assert!((flower.position().y - expected).abs() < 1e-3);
}

fn ready_runner() -> SketchRunner {
    let sketch = FlowerSketch::new(CANVAS, FlowerConfig::default(), 5);
    let mut runner = SketchRunner::new(Box::new(sketch));
    let names: Vec<_> = runner.sketch().assets().iter().map(|a| a.name).collect();
    for name in names {
        runner.assets_mut().mark_ready(name, Vec2::new(852.5, 912.1));
    }
    runner
}

#[test]
fn nothing_is_drawn_until_the_layers_load() {
    let sketch = FlowerSketch::new(CANVAS, FlowerConfig::default(), 5);
    let mut runner = SketchRunner::new(Box::new(sketch));
    let mut surface = RecordingSurface::new(CANVAS);
    runner.frame(runner.clock().step(), CANVAS, &mut surface);
    assert!(surface.images().is_empty());
}

#[test]
fn leaves_and_bloom_rise_with_the_stem() {
    let mut runner = ready_runner();
    let mut surface = RecordingSurface::new(CANVAS);
    let step = runner.clock().step();
    for _ in 0..10 {
        surface.clear_commands();
        runner.frame(step, CANVAS, &mut surface);
    }
    assert_eq!(surface.images(), vec!["stem", "left_leaf", "right_leaf", "bloom"]);
}

#[test]
fn detached_parts_are_tinted_while_gardening() {
    let mut runner = ready_runner();
    let mut surface = RecordingSurface::new(CANVAS);
    let step = runner.clock().step();
    for _ in 0..90 {
        runner.frame(step, CANVAS, &mut surface);
    }

    // Bloom sits at the top of the flower: target y 360, 0.3 of 480 above.
    let y = 360.0 - 144.0;
    runner.queue_input(InputEvent::Press(Vec2::new(300.0, y)));
    runner.queue_input(InputEvent::Move(Vec2::new(500.0, y)));
    surface.clear_commands();
    runner.frame(step, CANVAS, &mut surface);
    assert!(surface
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Polyline { .. })));

    runner.queue_input(InputEvent::Release(Vec2::new(500.0, y)));
    surface.clear_commands();
    runner.frame(step, CANVAS, &mut surface);
    assert_eq!(surface.images(), vec!["stem", "left_leaf", "right_leaf", "bloom"]);
    let tinted = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Filter(Some(f)) if f == DETACHED_TINT_FILTER))
        .count();
    assert_eq!(tinted, 1);
}

#[test]
fn runner_finishes_once_the_flower_has_fallen() {
    let mut runner = ready_runner();
    let mut surface = RecordingSurface::new(CANVAS);
    let step = runner.clock().step();
    for _ in 0..90 {
        runner.frame(step, CANVAS, &mut surface);
    }
    let bloom_y = 360.0 - 144.0;
    let leaf_y = 380.0;
    for event in [
        InputEvent::Press(Vec2::new(300.0, bloom_y)),
        InputEvent::Move(Vec2::new(500.0, bloom_y)),
        InputEvent::Release(Vec2::new(500.0, bloom_y)),
        InputEvent::Press(Vec2::new(0.0, leaf_y)),
        InputEvent::Move(Vec2::new(400.0, leaf_y)),
        InputEvent::Move(Vec2::new(800.0, leaf_y)),
        InputEvent::Leave,
    ] {
        runner.queue_input(event);
    }

    let mut state = RunState::Running;
    for _ in 0..5000 {
        state = runner.frame(step, CANVAS, &mut surface);
        if state == RunState::Finished {
            break;
        }
    }
    assert_eq!(state, RunState::Finished);
    assert!(runner.sketch().is_finished());
}
