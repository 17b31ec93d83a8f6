//! Pointer gestures: canvas-space mapping, drag-path capture and the
//! drag-to-rotate helper.

use crate::math::wrap_angle;
use glam::Vec2;

/// Pointer input already converted to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press(Vec2),
    Move(Vec2),
    Release(Vec2),
    /// Pointer left the canvas; treated like a release at the last position.
    Leave,
}

/// Rescale a client-space pointer position into canvas pixels.
///
/// `rect_origin`/`rect_size` describe where the canvas is displayed (CSS
/// pixels) and `canvas_size` is its backing store size. Returns `None` when
/// the canvas has no displayed area.
#[inline]
pub fn client_to_canvas(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((client - rect_origin) * (canvas_size / rect_size))
}

/// Ordered pointer positions between one press and its release.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragPath {
    points: Vec<Vec2>,
}

impl DragPath {
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Consecutive `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }
}

/// Press/move/release bookkeeping for one pointer.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    pressed: bool,
    path: DragPath,
}

impl GestureTracker {
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Path collected so far (empty when not pressed).
    #[inline]
    pub fn path(&self) -> &DragPath {
        &self.path
    }

    pub fn start(&self) -> Option<Vec2> {
        self.path.first()
    }

    pub fn current(&self) -> Option<Vec2> {
        self.path.last()
    }

    pub fn press(&mut self, at: Vec2) {
        self.pressed = true;
        self.path = DragPath::from_points([at]);
    }

    /// Records `at` while pressed. Returns whether the point was recorded.
    pub fn move_to(&mut self, at: Vec2) -> bool {
        if !self.pressed {
            return false;
        }
        self.path.push(at);
        true
    }

    /// Ends the gesture, handing back the finished path. `None` when no press
    /// was active.
    pub fn release(&mut self) -> Option<DragPath> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(std::mem::take(&mut self.path))
    }
}

/// Rotation produced by dragging from `start` to `current` around `pivot`,
/// applied on top of `base` and clamped to `[min, max]`.
pub fn drag_rotation(pivot: Vec2, start: Vec2, current: Vec2, base: f32, min: f32, max: f32) -> f32 {
    let (s, c) = (start - pivot, current - pivot);
    let a0 = s.y.atan2(s.x);
    let a1 = c.y.atan2(c.x);
    (base + wrap_angle(a1 - a0)).clamp(min, max)
}
