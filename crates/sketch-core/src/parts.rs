//! Sub-parts that ride along with their parent until a slice knocks them off.

use crate::config::PhysicsConfig;
use crate::gesture::DragPath;
use crate::math::Rect;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct DetachablePart {
    pub name: &'static str,
    /// Hit region in parent-local coordinates, before `offset` is applied.
    pub region: Rect,
    pub offset: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub angular_velocity: f32,
    pub detached: bool,
}

impl DetachablePart {
    pub fn new(name: &'static str, region: Rect) -> Self {
        Self {
            name,
            region,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            detached: false,
        }
    }

    /// Region in parent-local coordinates, following the part as it falls.
    #[inline]
    pub fn current_region(&self) -> Rect {
        self.region.translate(self.offset)
    }

    /// One-way switch to free fall. Velocity follows the slice direction;
    /// spin is random. Returns `false` (and changes nothing) when the part
    /// already fell.
    pub fn detach(&mut self, slice_delta: Vec2, physics: &PhysicsConfig, rng: &mut impl Rng) -> bool {
        if self.detached {
            return false;
        }
        self.detached = true;
        self.velocity = slice_delta * physics.detach_velocity_scale;
        self.angular_velocity = (rng.gen::<f32>() - 0.5) * physics.detach_spin_span;
        log::info!("[parts] {} detached", self.name);
        true
    }

    pub fn step(&mut self, physics: &PhysicsConfig) {
        if !self.detached {
            return;
        }
        self.velocity.y += physics.gravity;
        self.offset += self.velocity;
        self.rotation += self.angular_velocity;
        self.angular_velocity *= physics.angular_damping;
    }
}

/// Parts of one entity in draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartSet {
    parts: SmallVec<[DetachablePart; 4]>,
}

impl PartSet {
    pub fn new(parts: impl IntoIterator<Item = DetachablePart>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DetachablePart> {
        self.parts.iter()
    }

    pub fn get(&self, name: &str) -> Option<&DetachablePart> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DetachablePart> {
        self.parts.iter_mut().find(|p| p.name == name)
    }

    pub fn all_detached(&self) -> bool {
        self.parts.iter().all(|p| p.detached)
    }

    /// True once every part is detached and its origin sits below `threshold_y`
    /// in canvas space.
    pub fn all_below(&self, origin_y: f32, threshold_y: f32) -> bool {
        self.all_detached() && self.parts.iter().all(|p| origin_y + p.offset.y > threshold_y)
    }

    /// Test one slice segment (canvas space) against the still-attached parts
    /// and detach the first one it crosses. Returns the index of that part.
    pub fn slice_segment(
        &mut self,
        origin: Vec2,
        a: Vec2,
        b: Vec2,
        physics: &PhysicsConfig,
        rng: &mut impl Rng,
    ) -> Option<usize> {
        let (la, lb) = (a - origin, b - origin);
        let hit = self
            .parts
            .iter()
            .position(|p| !p.detached && p.current_region().intersects_segment(la, lb))?;
        self.parts[hit].detach(b - a, physics, rng);
        Some(hit)
    }

    /// Apply every consecutive pair of a drag path so fast or curved
    /// gestures still cross small parts. Returns the number of detachments.
    pub fn slice_path(
        &mut self,
        origin: Vec2,
        path: &DragPath,
        physics: &PhysicsConfig,
        rng: &mut impl Rng,
    ) -> usize {
        path.segments()
            .filter(|(a, b)| self.slice_segment(origin, *a, *b, physics, rng).is_some())
            .count()
    }

    pub fn step(&mut self, physics: &PhysicsConfig) {
        for part in &mut self.parts {
            part.step(physics);
        }
    }
}
