//! Arclength-addressable paths.
//!
//! A [`CurveSource`] wraps SVG path data parsed by `kurbo`. The
//! [`PathSampler`] turns it into evenly spaced samples once, at load time, and
//! then answers "where am I / which way am I facing after `d` pixels" with a
//! binary search and a linear blend between the two bracketing samples.
//!
//! Boundary policy: distances in `[0, total_length]` resolve (the end maps to
//! the last sample); negative, NaN or larger distances return `None` so the
//! caller can decide what "past the end" means.

use crate::error::SketchError;
use crate::math::{lerp_angle, wrap_angle, Rect};
use glam::Vec2;
use kurbo::{Affine, BezPath, ParamCurve, ParamCurveArclen, PathSeg};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Curve definition plus the artboard it was drawn on.
#[derive(Clone, Debug)]
pub struct CurveSource {
    path: BezPath,
    view_box: Rect,
}

impl CurveSource {
    /// Build from an SVG `viewBox` attribute (`"min-x min-y width height"`)
    /// and a path `d` attribute.
    pub fn from_svg(view_box: &str, d: &str) -> Result<Self, SketchError> {
        let view_box = parse_view_box(view_box)?;
        let path = BezPath::from_svg(d).map_err(|e| SketchError::CurveParse(e.to_string()))?;
        Ok(Self { path, view_box })
    }

    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    pub fn bez_path(&self) -> &BezPath {
        &self.path
    }

    /// Scale to the canvas width and centre vertically.
    pub fn fit_to_width(&self, canvas: Vec2) -> Self {
        let vb_size = self.view_box.size();
        let scale = (canvas.x / vb_size.x) as f64;
        let offset_y = canvas.y as f64 / 2.0 - vb_size.y as f64 / 2.0 * scale;
        let affine = Affine::translate((
            -self.view_box.min.x as f64 * scale,
            offset_y - self.view_box.min.y as f64 * scale,
        )) * Affine::scale(scale);
        let mut path = self.path.clone();
        path.apply_affine(affine);
        let fitted_height = vb_size.y * scale as f32;
        Self {
            path,
            view_box: Rect::from_origin_size(
                Vec2::new(0.0, offset_y as f32),
                Vec2::new(canvas.x, fitted_height),
            ),
        }
    }
}

fn parse_view_box(raw: &str) -> Result<Rect, SketchError> {
    let values = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SketchError::CurveParse(format!("viewBox `{raw}`: {e}")))?;
    match values.as_slice() {
        [x, y, w, h] if *w > 0.0 && *h > 0.0 => Ok(Rect::from_origin_size(
            Vec2::new(*x, *y),
            Vec2::new(*w, *h),
        )),
        _ => Err(SketchError::CurveParse(format!(
            "viewBox `{raw}` needs four numbers with positive size"
        ))),
    }
}

/// Precomputed samples with cumulative distance and tangent angle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSampler {
    points: Vec<Vec2>,
    distances: Vec<f32>,
    angles: Vec<f32>,
    total: f32,
}

impl PathSampler {
    /// A sampler with nothing loaded; every query returns `None`.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Sample `curve` every `step` pixels of arclength, ending exactly on
    /// the curve's end point.
    pub fn from_curve(curve: &CurveSource, step: f32) -> Result<Self, SketchError> {
        if !(step > 0.0) || !step.is_finite() {
            return Err(SketchError::InvalidConfig {
                field: "sample_step",
                reason: "must be positive",
            });
        }
        let segments: Vec<(PathSeg, f64)> = curve
            .path
            .segments()
            .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
            .collect();
        let total: f64 = segments.iter().map(|(_, len)| len).sum();
        if total <= f64::from(f32::EPSILON) {
            return Err(SketchError::DegenerateCurve("zero length"));
        }

        let step = f64::from(step);
        let count = (total / step).floor() as usize;
        let mut points = Vec::with_capacity(count + 2);
        let mut seg_index = 0;
        let mut seg_start = 0.0;
        for i in 0..=count {
            let s = i as f64 * step;
            while seg_index + 1 < segments.len() && seg_start + segments[seg_index].1 < s {
                seg_start += segments[seg_index].1;
                seg_index += 1;
            }
            let (seg, len) = segments[seg_index];
            points.push(eval_at_length(seg, len, s - seg_start));
        }
        if (count as f64) * step < total - ARCLEN_ACCURACY {
            if let Some((seg, len)) = segments.last() {
                points.push(eval_at_length(*seg, *len, *len));
            }
        }
        Self::from_points(points)
    }

    /// Build from already sampled points; distances come from the straight
    /// lines between them.
    pub fn from_points(points: Vec<Vec2>) -> Result<Self, SketchError> {
        if points.len() < 2 {
            return Err(SketchError::DegenerateCurve("needs at least two points"));
        }
        let mut distances = Vec::with_capacity(points.len());
        let mut angles = Vec::with_capacity(points.len());
        let mut total = 0.0;
        distances.push(0.0);
        for pair in points.windows(2) {
            let delta = pair[1] - pair[0];
            let len = delta.length();
            total += len;
            distances.push(total);
            let angle = if len > 0.0 {
                delta.y.atan2(delta.x)
            } else {
                angles.last().copied().unwrap_or(0.0)
            };
            angles.push(angle);
        }
        if total <= f32::EPSILON {
            return Err(SketchError::DegenerateCurve("zero length"));
        }
        // Final point has no successor; it repeats the last tangent.
        let last_angle = angles.last().copied().unwrap_or(0.0);
        angles.push(last_angle);
        Ok(Self {
            points,
            distances,
            angles,
            total,
        })
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        !self.points.is_empty()
    }

    #[inline]
    pub fn total_length(&self) -> f32 {
        self.total
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Indices of the samples around `d` and the blend factor between them.
    fn bracket(&self, d: f32) -> Option<(usize, usize, f32)> {
        if !self.is_loaded() || !(d >= 0.0) || d > self.total {
            return None;
        }
        let idx = self.distances.partition_point(|&x| x <= d);
        if idx >= self.distances.len() {
            let last = self.distances.len() - 1;
            return Some((last, last, 0.0));
        }
        let (i, j) = (idx - 1, idx);
        let span = self.distances[j] - self.distances[i];
        Some((i, j, (d - self.distances[i]) / span))
    }

    pub fn position_at_distance(&self, d: f32) -> Option<Vec2> {
        let (i, j, t) = self.bracket(d)?;
        Some(self.points[i].lerp(self.points[j], t))
    }

    /// Tangent angle in (-PI, PI], blended the short way between samples.
    pub fn angle_at_distance(&self, d: f32) -> Option<f32> {
        let (i, j, t) = self.bracket(d)?;
        Some(wrap_angle(lerp_angle(self.angles[i], self.angles[j], t)))
    }

    /// Polyline following the path from `start` to `end` (distances, clamped
    /// to the path). Empty when unloaded or the range is empty.
    pub fn polyline_between(&self, start: f32, end: f32) -> Vec<Vec2> {
        let start = start.max(0.0);
        let end = end.min(self.total);
        let (Some(first), Some(last)) = (
            self.position_at_distance(start),
            self.position_at_distance(end),
        ) else {
            return Vec::new();
        };
        if start >= end {
            return Vec::new();
        }
        let mut out = vec![first];
        out.extend(
            self.points
                .iter()
                .zip(&self.distances)
                .filter(|(_, d)| **d > start && **d < end)
                .map(|(p, _)| *p),
        );
        out.push(last);
        out
    }
}

fn eval_at_length(seg: PathSeg, seg_len: f64, local: f64) -> Vec2 {
    let local = local.clamp(0.0, seg_len);
    let t = if seg_len > 0.0 {
        seg.inv_arclen(local, ARCLEN_ACCURACY)
    } else {
        0.0
    };
    let p = seg.eval(t);
    Vec2::new(p.x as f32, p.y as f32)
}

/// A stretch of the path, in percent of its length, whose trail grows as a
/// traveller passes through and never shrinks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub start_pct: f32,
    pub end_pct: f32,
    max_drawn_pct: f32,
}

impl Zone {
    pub fn new(start_pct: f32, end_pct: f32) -> Self {
        Self {
            start_pct,
            end_pct,
            max_drawn_pct: start_pct,
        }
    }

    #[inline]
    pub fn max_drawn_pct(&self) -> f32 {
        self.max_drawn_pct
    }

    /// Raise the high-water mark with the traveller's current progress.
    pub fn observe(&mut self, progress_pct: f32) {
        if progress_pct >= self.start_pct {
            let reached = progress_pct.min(self.end_pct);
            if reached > self.max_drawn_pct {
                self.max_drawn_pct = reached;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.max_drawn_pct >= self.end_pct
    }

    /// `[start, max_drawn]` in percent once anything has been drawn.
    pub fn drawn_range(&self) -> Option<(f32, f32)> {
        (self.max_drawn_pct > self.start_pct).then_some((self.start_pct, self.max_drawn_pct))
    }
}
