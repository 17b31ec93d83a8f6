// Smoothing, eased snaps and phase bookkeeping.

use glam::Vec2;
use sketch_core::body::Body;
use sketch_core::sketches::flower::FlowerPhase;
use sketch_core::{Phase, PhaseMachine};

#[test]
fn smoothing_converges_without_overshoot() {
    let mut body = Body::at(Vec2::ZERO);
    body.target = Vec2::new(100.0, -40.0);
    let mut last_x = body.position.x;
    for _ in 0..200 {
        body.smooth_position(0.1);
        assert!(body.position.x >= last_x, "moved away from the target");
        assert!(body.position.x <= 100.0, "overshot: {}", body.position.x);
        assert!(body.position.y >= -40.0, "overshot: {}", body.position.y);
        last_x = body.position.x;
    }
    assert!(body.distance_to_target() < 0.01);
}

#[test]
fn rotation_takes_the_short_way_across_pi() {
    let mut body = Body::default();
    body.rotation = 170f32.to_radians();
    body.target_rotation = (-170f32).to_radians();

    body.smooth_rotation(0.5);
    // Shortest path is +20 degrees through 180, not -340.
    assert!(body.rotation > 170f32.to_radians());

    for _ in 0..100 {
        body.smooth_rotation(0.2);
    }
    let settled = sketch_core::math::wrap_angle(body.rotation);
    assert!((settled - (-170f32).to_radians()).abs() < 1e-3);
}

#[test]
fn eased_snap_is_gentle_far_away() {
    let mut body = Body::at(Vec2::new(1000.0, 0.0));
    body.target = Vec2::ZERO;
    let before = body.eased_snap(0.25, 400.0, 0.8);
    assert_eq!(before, 1000.0);
    // Beyond the reference distance the factor bottoms out at 0.25 * 0.2.
    assert!((body.position.x - 950.0).abs() < 1e-3);
}

#[test]
fn integrate_applies_gravity_and_damps_spin() {
    let mut body = Body::default();
    body.velocity = Vec2::new(2.0, 0.0);
    body.angular_velocity = 1.0;
    body.integrate(0.3, 0.5);
    assert_eq!(body.position, Vec2::new(2.0, 0.3));
    assert_eq!(body.rotation, 1.0);
    assert_eq!(body.angular_velocity, 0.5);
}

#[test]
fn phase_machine_refuses_undeclared_transitions() {
    let mut phase = PhaseMachine::new(FlowerPhase::Rising);
    phase.tick(0.5);
    phase.tick(0.5);
    assert_eq!(phase.ticks(), 2);
    assert!((phase.elapsed() - 1.0).abs() < 1e-6);

    assert!(!phase.advance(FlowerPhase::Falling));
    assert!(phase.is(FlowerPhase::Rising));
    assert_eq!(phase.ticks(), 2);

    assert!(phase.advance(FlowerPhase::Gardening));
    assert_eq!(phase.current(), FlowerPhase::Gardening);
    assert_eq!(phase.ticks(), 0);
    assert_eq!(phase.elapsed(), 0.0);
}

#[test]
fn only_done_is_terminal() {
    assert!(FlowerPhase::Done.is_terminal());
    assert!(!FlowerPhase::Falling.is_terminal());
}
