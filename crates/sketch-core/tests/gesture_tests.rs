// Pointer mapping and drag bookkeeping.

use glam::Vec2;
use sketch_core::{client_to_canvas, drag_rotation, GestureTracker};
use std::f32::consts::FRAC_PI_2;

#[test]
fn client_positions_scale_into_backing_pixels() {
    let p = client_to_canvas(
        Vec2::new(150.0, 100.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Some(Vec2::new(200.0, 200.0)));
}

#[test]
fn hidden_canvas_maps_nothing() {
    let p = client_to_canvas(Vec2::ONE, Vec2::ZERO, Vec2::new(0.0, 10.0), Vec2::splat(100.0));
    assert_eq!(p, None);
}

#[test]
fn tracker_collects_points_between_press_and_release() {
    let mut g = GestureTracker::default();
    assert!(!g.move_to(Vec2::ONE));
    assert_eq!(g.release(), None);

    g.press(Vec2::new(1.0, 2.0));
    assert!(g.is_pressed());
    assert!(g.move_to(Vec2::new(3.0, 4.0)));
    assert!(g.move_to(Vec2::new(5.0, 6.0)));
    assert_eq!(g.start(), Some(Vec2::new(1.0, 2.0)));
    assert_eq!(g.current(), Some(Vec2::new(5.0, 6.0)));

    let path = g.release().unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.segments().count(), 2);
    assert!(!g.is_pressed());
    assert!(g.path().is_empty());
}

#[test]
fn a_new_press_starts_a_fresh_path() {
    let mut g = GestureTracker::default();
    g.press(Vec2::ZERO);
    g.move_to(Vec2::ONE);
    g.press(Vec2::splat(9.0));
    assert_eq!(g.path().points(), &[Vec2::splat(9.0)]);
}

#[test]
fn drag_rotation_follows_the_pointer_and_clamps() {
    let pivot = Vec2::ZERO;
    let start = Vec2::new(10.0, 0.0);

    let quarter = drag_rotation(pivot, start, Vec2::new(0.0, 10.0), 0.0, -10.0, 10.0);
    assert!((quarter - FRAC_PI_2).abs() < 1e-5);

    let clamped = drag_rotation(pivot, start, Vec2::new(-10.0, 0.1), 0.0, 0.0, FRAC_PI_2);
    assert_eq!(clamped, FRAC_PI_2);

    let floor = drag_rotation(pivot, start, Vec2::new(0.0, -10.0), 0.2, 0.0, FRAC_PI_2);
    assert_eq!(floor, 0.0);
}
