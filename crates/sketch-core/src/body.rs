use crate::math::{smooth_toward, wrap_angle};
use glam::Vec2;

/// Transform and motion state of one visual actor.
///
/// Bodies never own their phase; the entity wrapping them decides which of
/// the update rules below applies on a given tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub target: Vec2,
    pub rotation: f32,
    pub target_rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

impl Body {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            target: position,
            rotation: 0.0,
            target_rotation: 0.0,
            scale: 1.0,
            opacity: 1.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
        }
    }

    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Exponential smoothing toward `target`. Factors in (0, 1) never overshoot.
    pub fn smooth_position(&mut self, factor: f32) {
        self.position.x = smooth_toward(self.position.x, self.target.x, factor);
        self.position.y = smooth_toward(self.position.y, self.target.y, factor);
    }

    /// Smooth `rotation` toward `target_rotation` along the shorter arc.
    pub fn smooth_rotation(&mut self, factor: f32) {
        let delta = wrap_angle(self.target_rotation - self.rotation);
        self.rotation += delta * factor;
    }

    /// Ease-in approach: slow while far away, snappier as the gap closes.
    /// Returns the distance that remained before the step.
    pub fn eased_snap(&mut self, factor: f32, reference_distance: f32, strength: f32) -> f32 {
        let dist = self.distance_to_target();
        let normalized = (dist / reference_distance).min(1.0);
        let eased = factor * (1.0 - normalized * normalized * strength);
        self.smooth_position(eased);
        dist
    }

    /// One tick of free fall with damped spin.
    pub fn integrate(&mut self, gravity: f32, angular_damping: f32) {
        self.velocity.y += gravity;
        self.position += self.velocity;
        self.rotation += self.angular_velocity;
        self.angular_velocity *= angular_damping;
    }

    pub fn snap_to_target(&mut self) {
        self.position = self.target;
    }
}
