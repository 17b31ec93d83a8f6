//! Small geometry helpers used by the bodies, samplers and hit tests.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Close `factor` of the remaining gap to `target`.
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]` without clamping.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Normalize an angle into (-PI, PI].
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let a = (angle + PI).rem_euclid(TAU) - PI;
    if a <= -PI {
        a + TAU
    } else {
        a
    }
}

/// Interpolate between two angles along the shorter arc.
#[inline]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + wrap_angle(to - from) * t
}

/// Axis-aligned bounds. Either side may be infinite, which turns the rect
/// into a half-plane or strip ("everything above y = -40").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict containment: points on the border are outside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    pub fn translate(&self, by: Vec2) -> Self {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }

    /// Slab test for the segment `a..=b`.
    pub fn intersects_segment(&self, a: Vec2, b: Vec2) -> bool {
        let d = b - a;
        let mut t_enter = 0.0_f32;
        let mut t_exit = 1.0_f32;
        for axis in 0..2 {
            let (p, dir, lo, hi) = (a[axis], d[axis], self.min[axis], self.max[axis]);
            if dir.abs() < f32::EPSILON {
                if p <= lo || p >= hi {
                    return false;
                }
                continue;
            }
            let mut t0 = (lo - p) / dir;
            let mut t1 = (hi - p) / dir;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return false;
            }
        }
        // Touching the border only (zero-length overlap) does not count.
        t_enter < t_exit || self.contains(a.lerp(b, t_enter))
    }
}

/// Corners of a `size` rectangle centred at `center` and rotated by `angle`,
/// in winding order.
pub fn rotated_rect_corners(center: Vec2, size: Vec2, angle: f32) -> [Vec2; 4] {
    let half = size * 0.5;
    let rot = Vec2::from_angle(angle);
    [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|corner| center + rot.rotate(corner))
}

/// Even-odd ray casting.
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let cross_x = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
