// Slicing detachable parts.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sketch_core::math::Rect;
use sketch_core::parts::{DetachablePart, PartSet};
use sketch_core::{DragPath, PhysicsConfig};

fn square_part(name: &'static str) -> DetachablePart {
    DetachablePart::new(name, Rect::new(Vec2::new(40.0, 40.0), Vec2::new(60.0, 60.0)))
}

#[test]
fn diagonal_slice_detaches_once_with_scaled_velocity() {
    let physics = PhysicsConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut parts = PartSet::new([square_part("box")]);

    let hit = parts.slice_segment(
        Vec2::ZERO,
        Vec2::ZERO,
        Vec2::new(100.0, 100.0),
        &physics,
        &mut rng,
    );
    assert_eq!(hit, Some(0));
    let part = parts.get("box").unwrap();
    assert!(part.detached);
    assert!(part.velocity.distance(Vec2::new(5.0, 5.0)) < 1e-5);
    assert!(part.angular_velocity.abs() <= physics.detach_spin_span / 2.0);

    // Already detached parts are not hit again.
    let again = parts.slice_segment(
        Vec2::ZERO,
        Vec2::ZERO,
        Vec2::new(100.0, 100.0),
        &physics,
        &mut rng,
    );
    assert_eq!(again, None);
}

#[test]
fn detach_is_idempotent() {
    let physics = PhysicsConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut part = square_part("leaf");
    assert!(part.detach(Vec2::new(20.0, 0.0), &physics, &mut rng));
    let after_first = part.clone();
    assert!(!part.detach(Vec2::new(-400.0, 80.0), &physics, &mut rng));
    assert_eq!(part, after_first);
}

#[test]
fn slices_are_tested_in_the_parent_frame() {
    let physics = PhysicsConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut parts = PartSet::new([square_part("box")]);
    let origin = Vec2::new(1000.0, 1000.0);

    let miss = parts.slice_segment(origin, Vec2::ZERO, Vec2::new(100.0, 100.0), &physics, &mut rng);
    assert_eq!(miss, None);
    let hit = parts.slice_segment(
        origin,
        Vec2::new(1000.0, 1050.0),
        Vec2::new(1100.0, 1050.0),
        &physics,
        &mut rng,
    );
    assert_eq!(hit, Some(0));
}

#[test]
fn every_segment_of_a_drag_path_is_tested() {
    let physics = PhysicsConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let left = DetachablePart::new("left", Rect::new(Vec2::new(-60.0, -10.0), Vec2::new(-40.0, 10.0)));
    let right = DetachablePart::new("right", Rect::new(Vec2::new(40.0, -10.0), Vec2::new(60.0, 10.0)));
    let mut parts = PartSet::new([left, right]);

    let path = DragPath::from_points([
        Vec2::new(-100.0, 0.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
    ]);
    assert_eq!(parts.slice_path(Vec2::ZERO, &path, &physics, &mut rng), 2);
    assert!(parts.all_detached());
}

#[test]
fn detached_parts_fall_until_below_threshold() {
    let physics = PhysicsConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut parts = PartSet::new([square_part("box")]);
    assert!(!parts.all_below(0.0, 100.0));

    parts
        .get_mut("box")
        .unwrap()
        .detach(Vec2::ZERO, &physics, &mut rng);
    let mut ticks = 0;
    while !parts.all_below(0.0, 100.0) {
        parts.step(&physics);
        ticks += 1;
        assert!(ticks < 1000, "part never fell");
    }
    // 0.3 * n * (n + 1) / 2 > 100 first holds at n = 26.
    assert_eq!(ticks, 26);
}
