//! Named tuning for every sketch. Defaults come from [`crate::constants`];
//! front-ends may override fields and must call `validate` before use.

use crate::constants::*;
use crate::error::SketchError;

fn smoothing(field: &'static str, v: f32) -> Result<(), SketchError> {
    if v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(SketchError::config(field, "must be in (0, 1]"))
    }
}

fn damping(field: &'static str, v: f32) -> Result<(), SketchError> {
    if v > 0.0 && v < 1.0 {
        Ok(())
    } else {
        Err(SketchError::config(field, "must be in (0, 1)"))
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), SketchError> {
    if v > 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(SketchError::config(field, "must be positive"))
    }
}

fn nonzero_frames(field: &'static str, v: u32) -> Result<(), SketchError> {
    if v > 0 {
        Ok(())
    } else {
        Err(SketchError::config(field, "must be at least one frame"))
    }
}

/// Free-fall parameters for detached parts.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub angular_damping: f32,
    pub detach_velocity_scale: f32,
    pub detach_spin_span: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            angular_damping: ANGULAR_DAMPING,
            detach_velocity_scale: DETACH_VELOCITY_SCALE,
            detach_spin_span: DETACH_SPIN_SPAN,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        positive("gravity", self.gravity)?;
        damping("angular_damping", self.angular_damping)?;
        positive("detach_velocity_scale", self.detach_velocity_scale)?;
        if self.detach_spin_span < 0.0 {
            return Err(SketchError::config("detach_spin_span", "must not be negative"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowerConfig {
    pub physics: PhysicsConfig,
    pub height_ratio: f32,
    pub rise_frames: u32,
    pub centering_frames: u32,
    pub centered_size_ratio: f32,
    pub fallen_margin: f32,
    pub hold_frames: u32,
    pub fade_step: f32,
    pub showcase_frames: u32,
    pub fall_gravity_scale: f32,
    pub fall_spin_span: f32,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            height_ratio: FLOWER_HEIGHT_RATIO,
            rise_frames: FLOWER_RISE_FRAMES,
            centering_frames: FLOWER_CENTERING_FRAMES,
            centered_size_ratio: FLOWER_CENTERED_SIZE_RATIO,
            fallen_margin: FLOWER_FALLEN_MARGIN,
            hold_frames: FLOWER_HOLD_FRAMES,
            fade_step: FLOWER_FADE_STEP,
            showcase_frames: FLOWER_SHOWCASE_FRAMES,
            fall_gravity_scale: FLOWER_FALL_GRAVITY_SCALE,
            fall_spin_span: FLOWER_FALL_SPIN_SPAN,
        }
    }
}

impl FlowerConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        self.physics.validate()?;
        positive("height_ratio", self.height_ratio)?;
        nonzero_frames("rise_frames", self.rise_frames)?;
        nonzero_frames("centering_frames", self.centering_frames)?;
        positive("centered_size_ratio", self.centered_size_ratio)?;
        smoothing("fade_step", self.fade_step)?;
        positive("fall_gravity_scale", self.fall_gravity_scale)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoadConfig {
    pub sample_step: f32,
    pub car_width: f32,
    pub acceleration: f32,
    pub coast_damping: f32,
    /// `[start, end]` in percent of the total path length.
    pub zones_pct: Vec<[f32; 2]>,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            sample_step: ROAD_SAMPLE_STEP,
            car_width: CAR_WIDTH,
            acceleration: CAR_ACCELERATION,
            coast_damping: CAR_COAST_DAMPING,
            zones_pct: ROAD_ZONES_PCT.to_vec(),
        }
    }
}

impl RoadConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        positive("sample_step", self.sample_step)?;
        positive("car_width", self.car_width)?;
        positive("acceleration", self.acceleration)?;
        damping("coast_damping", self.coast_damping)?;
        for [start, end] in &self.zones_pct {
            if !(0.0..=100.0).contains(start) || !(0.0..=100.0).contains(end) || start >= end {
                return Err(SketchError::config(
                    "zones_pct",
                    "each zone needs 0 <= start < end <= 100",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DuetConfig {
    pub face_size: f32,
    pub wall_thickness: f32,
    pub slide_in_smoothing: f32,
    pub slide_in_tolerance: f32,
    pub direct_smoothing: f32,
    pub mirror_smoothing: f32,
    pub rotation_smoothing: f32,
    pub align_tolerance: f32,
    pub facing_secs: f32,
    pub snap_smoothing: f32,
    pub snap_reference_dist: f32,
    pub snap_ease_strength: f32,
    pub snap_epsilon: f32,
    pub snap_gap: f32,
    pub snapped_secs: f32,
    pub separate_smoothing: f32,
    pub separate_epsilon: f32,
    pub slide_out_smoothing: f32,
    pub colon_fade_step: f32,
    pub three_target_scale: f32,
    pub three_scale_smoothing: f32,
    pub burst_sparks: usize,
    pub spark_life_ticks: f32,
}

impl Default for DuetConfig {
    fn default() -> Self {
        Self {
            face_size: DUET_FACE_SIZE,
            wall_thickness: DUET_WALL_THICKNESS,
            slide_in_smoothing: DUET_SLIDE_IN_SMOOTHING,
            slide_in_tolerance: DUET_SLIDE_IN_TOLERANCE,
            direct_smoothing: DUET_DIRECT_SMOOTHING,
            mirror_smoothing: DUET_MIRROR_SMOOTHING,
            rotation_smoothing: DUET_ROTATION_SMOOTHING,
            align_tolerance: DUET_ALIGN_TOLERANCE,
            facing_secs: DUET_FACING_SECS,
            snap_smoothing: DUET_SNAP_SMOOTHING,
            snap_reference_dist: DUET_SNAP_REFERENCE_DIST,
            snap_ease_strength: DUET_SNAP_EASE_STRENGTH,
            snap_epsilon: DUET_SNAP_EPSILON,
            snap_gap: DUET_SNAP_GAP,
            snapped_secs: DUET_SNAPPED_SECS,
            separate_smoothing: DUET_SEPARATE_SMOOTHING,
            separate_epsilon: DUET_SEPARATE_EPSILON,
            slide_out_smoothing: DUET_SLIDE_OUT_SMOOTHING,
            colon_fade_step: DUET_COLON_FADE_STEP,
            three_target_scale: DUET_THREE_TARGET_SCALE,
            three_scale_smoothing: DUET_THREE_SCALE_SMOOTHING,
            burst_sparks: DUET_BURST_SPARKS,
            spark_life_ticks: DUET_SPARK_LIFE_TICKS,
        }
    }
}

impl DuetConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        positive("face_size", self.face_size)?;
        smoothing("slide_in_smoothing", self.slide_in_smoothing)?;
        smoothing("direct_smoothing", self.direct_smoothing)?;
        smoothing("mirror_smoothing", self.mirror_smoothing)?;
        smoothing("rotation_smoothing", self.rotation_smoothing)?;
        smoothing("snap_smoothing", self.snap_smoothing)?;
        smoothing("separate_smoothing", self.separate_smoothing)?;
        smoothing("slide_out_smoothing", self.slide_out_smoothing)?;
        smoothing("three_scale_smoothing", self.three_scale_smoothing)?;
        positive("snap_reference_dist", self.snap_reference_dist)?;
        if !(0.0..1.0).contains(&self.snap_ease_strength) {
            return Err(SketchError::config("snap_ease_strength", "must be in [0, 1)"));
        }
        positive("snap_epsilon", self.snap_epsilon)?;
        positive("separate_epsilon", self.separate_epsilon)?;
        positive("facing_secs", self.facing_secs)?;
        positive("spark_life_ticks", self.spark_life_ticks)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialConfig {
    pub max_offset: f32,
    pub max_rotation: f32,
    pub smoothing: f32,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            max_offset: DIAL_MAX_OFFSET,
            max_rotation: DIAL_MAX_ROTATION,
            smoothing: DIAL_SMOOTHING,
        }
    }
}

impl DialConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        positive("max_offset", self.max_offset)?;
        positive("max_rotation", self.max_rotation)?;
        smoothing("smoothing", self.smoothing)
    }
}
