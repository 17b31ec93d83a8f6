// Arclength sampling, boundary policy and zones.

use glam::Vec2;
use sketch_core::{CurveSource, PathSampler, SketchError, Zone};
use std::f32::consts::{FRAC_PI_2, PI};

fn elbow() -> PathSampler {
    PathSampler::from_points(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
    ])
    .unwrap()
}

fn close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-3
}

#[test]
fn midpoint_of_second_leg() {
    let path = elbow();
    assert_eq!(path.total_length(), 20.0);
    assert!(close(path.position_at_distance(15.0).unwrap(), Vec2::new(10.0, 5.0)));
    assert!((path.angle_at_distance(15.0).unwrap() - FRAC_PI_2).abs() < 1e-5);
    assert!(path.angle_at_distance(5.0).unwrap().abs() < 1e-5);
}

#[test]
fn heading_left_stays_near_pi_across_the_wrap() {
    // Segment headings straddle the -PI/PI seam: about -3.09 then 3.04.
    let path = PathSampler::from_points(vec![
        Vec2::new(10.0, 0.0),
        Vec2::new(0.0, -0.5),
        Vec2::new(-10.0, 0.5),
    ])
    .unwrap();
    let steps = 50;
    for i in 0..=steps {
        let d = path.total_length() * i as f32 / steps as f32;
        let angle = path.angle_at_distance(d).unwrap();
        assert!(angle.abs() > 3.0, "angle {} at distance {}", angle, d);
        assert!(angle > -PI && angle <= PI);
    }
}

#[test]
fn sample_points_resolve_to_themselves() {
    let path = elbow();
    for (p, d) in path.points().iter().zip(path.distances()) {
        assert!(close(path.position_at_distance(*d).unwrap(), *p));
    }
}

#[test]
fn out_of_range_distances_are_none() {
    let path = elbow();
    assert!(close(path.position_at_distance(20.0).unwrap(), Vec2::new(10.0, 10.0)));
    assert_eq!(path.position_at_distance(20.5), None);
    assert_eq!(path.position_at_distance(-0.1), None);
    assert_eq!(path.position_at_distance(f32::NAN), None);
    assert_eq!(path.angle_at_distance(21.0), None);
}

#[test]
fn unloaded_sampler_answers_nothing() {
    let path = PathSampler::unloaded();
    assert!(!path.is_loaded());
    assert_eq!(path.position_at_distance(0.0), None);
    assert!(path.polyline_between(0.0, 10.0).is_empty());
}

#[test]
fn degenerate_point_lists_are_rejected() {
    assert!(matches!(
        PathSampler::from_points(vec![Vec2::ONE]),
        Err(SketchError::DegenerateCurve(_))
    ));
    assert!(matches!(
        PathSampler::from_points(vec![Vec2::ONE, Vec2::ONE]),
        Err(SketchError::DegenerateCurve(_))
    ));
}

#[test]
fn polyline_between_follows_the_corner() {
    let trail = elbow().polyline_between(5.0, 15.0);
    assert_eq!(trail.len(), 3);
    assert!(close(trail[0], Vec2::new(5.0, 0.0)));
    assert!(close(trail[1], Vec2::new(10.0, 0.0)));
    assert!(close(trail[2], Vec2::new(10.0, 5.0)));
}

#[test]
fn svg_line_is_sampled_every_step_and_at_the_end() {
    let curve = CurveSource::from_svg("0 0 100 50", "M0,0 L100,0").unwrap();
    let path = PathSampler::from_curve(&curve, 40.0).unwrap();
    assert_eq!(path.points().len(), 4);
    assert!((path.total_length() - 100.0).abs() < 0.01);
    assert!(close(*path.points().last().unwrap(), Vec2::new(100.0, 0.0)));
    assert!(path.position_at_distance(50.0).unwrap().distance(Vec2::new(50.0, 0.0)) < 0.01);
}

#[test]
fn fit_to_width_scales_and_centres() {
    let curve = CurveSource::from_svg("0 0 100 50", "M0,0 L100,0").unwrap();
    let fitted = curve.fit_to_width(Vec2::new(200.0, 400.0));
    assert_eq!(fitted.view_box().size(), Vec2::new(200.0, 100.0));
    assert_eq!(fitted.view_box().min, Vec2::new(0.0, 150.0));

    let path = PathSampler::from_curve(&fitted, 40.0).unwrap();
    assert!((path.total_length() - 200.0).abs() < 0.01);
    assert!(path.position_at_distance(0.0).unwrap().distance(Vec2::new(0.0, 150.0)) < 0.01);
}

#[test]
fn bad_svg_input_is_reported() {
    assert!(matches!(
        CurveSource::from_svg("0 0 100", "M0,0 L1,1"),
        Err(SketchError::CurveParse(_))
    ));
    assert!(matches!(
        CurveSource::from_svg("0 0 0 10", "M0,0 L1,1"),
        Err(SketchError::CurveParse(_))
    ));
    assert!(matches!(
        CurveSource::from_svg("0 0 10 10", "X 1 2"),
        Err(SketchError::CurveParse(_))
    ));
    let curve = CurveSource::from_svg("0,0,10,10", "M0,0 L1,1").unwrap();
    assert!(matches!(
        PathSampler::from_curve(&curve, 0.0),
        Err(SketchError::InvalidConfig { .. })
    ));
}

#[test]
fn zone_high_water_mark_only_grows() {
    let mut zone = Zone::new(10.0, 35.0);
    zone.observe(5.0);
    assert_eq!(zone.drawn_range(), None);

    zone.observe(20.0);
    assert_eq!(zone.max_drawn_pct(), 20.0);
    zone.observe(15.0);
    assert_eq!(zone.max_drawn_pct(), 20.0);
    // A respawn back at 0 leaves the trail alone.
    zone.observe(0.0);
    assert_eq!(zone.drawn_range(), Some((10.0, 20.0)));

    zone.observe(50.0);
    assert!(zone.is_complete());
    assert_eq!(zone.drawn_range(), Some((10.0, 35.0)));
}
