// Visually tuned constants shared by the sketches. Frame counts assume the
// 60 Hz reference tick driven by `FrameClock`.

// Frame pacing
pub const TICK_HZ: f32 = 60.0;
pub const TICK_SECONDS: f32 = 1.0 / TICK_HZ;
pub const MAX_TICKS_PER_FRAME: u32 = 4; // drop time rather than spiral after a stall

// Detachment physics
pub const GRAVITY: f32 = 0.3; // px per tick^2
pub const ANGULAR_DAMPING: f32 = 0.98;
pub const DETACH_VELOCITY_SCALE: f32 = 0.05; // slice delta -> initial part velocity
pub const DETACH_SPIN_SPAN: f32 = 0.15; // angular velocity drawn from +-span/2

// Flower
pub const FLOWER_HEIGHT_RATIO: f32 = 0.8; // of canvas height
pub const FLOWER_ASPECT: f32 = 852.5 / 912.1; // width / height of the artwork
pub const FLOWER_RISE_FRAMES: u32 = 90;
pub const FLOWER_CENTERING_FRAMES: u32 = 60;
pub const FLOWER_CENTERED_SIZE_RATIO: f32 = 0.9;
pub const FLOWER_FALLEN_MARGIN: f32 = 500.0; // px below the canvas before a part counts as gone
pub const FLOWER_HOLD_FRAMES: u32 = 30;
pub const FLOWER_FADE_STEP: f32 = 0.02;
pub const FLOWER_SHOWCASE_FRAMES: u32 = 90;
pub const FLOWER_FALL_GRAVITY_SCALE: f32 = 1.5;
pub const FLOWER_FALL_SPIN_SPAN: f32 = 0.1;
pub const SLICE_TRAIL_WIDTH: f32 = 25.0;
pub const SLICE_TRAIL_COLOR: &str = "rgba(255, 0, 0, 1)";
pub const DETACHED_TINT_FILTER: &str =
    "hue-rotate(0deg) saturate(100) brightness(0.2) sepia(2) hue-rotate(-50deg) saturate(10)";

// Road
pub const ROAD_SAMPLE_STEP: f32 = 40.0; // px of arclength between samples
pub const CAR_WIDTH: f32 = 120.0;
pub const CAR_ASPECT: f32 = 1080.0 / 1560.7; // height / width of the artwork
pub const CAR_ACCELERATION: f32 = 0.2;
pub const CAR_COAST_DAMPING: f32 = 0.98;
pub const ROAD_ZONES_PCT: [[f32; 2]; 3] = [[10.0, 35.0], [45.0, 70.0], [80.0, 95.0]];
pub const ZONE_TRAIL_WIDTH: f32 = 18.0;
pub const SAMPLE_MARKER_SIZE: f32 = 10.0;

// Duet
pub const DUET_SLIDE_IN_SMOOTHING: f32 = 0.03;
pub const DUET_SLIDE_IN_TOLERANCE: f32 = 100.0;
pub const DUET_DIRECT_SMOOTHING: f32 = 0.03;
pub const DUET_MIRROR_SMOOTHING: f32 = 0.015;
pub const DUET_ROTATION_SMOOTHING: f32 = 0.05;
pub const DUET_WALL_THICKNESS: f32 = 300.0;
pub const DUET_FACE_SIZE: f32 = 500.0;
pub const DUET_ALIGN_TOLERANCE: f32 = 50.0;
pub const DUET_FACING_SECS: f32 = 1.5;
pub const DUET_SNAP_SMOOTHING: f32 = 0.25;
pub const DUET_SNAP_REFERENCE_DIST: f32 = 400.0;
pub const DUET_SNAP_EASE_STRENGTH: f32 = 0.8;
pub const DUET_SNAP_EPSILON: f32 = 1.0;
pub const DUET_SNAP_GAP: f32 = 300.0;
pub const DUET_SNAPPED_SECS: f32 = 2.0;
pub const DUET_SEPARATE_SMOOTHING: f32 = 0.1;
pub const DUET_SEPARATE_EPSILON: f32 = 2.0;
pub const DUET_SLIDE_OUT_SMOOTHING: f32 = 0.05;
pub const DUET_COLON_FADE_STEP: f32 = 0.02;
pub const DUET_THREE_TARGET_SCALE: f32 = 3.0;
pub const DUET_THREE_SCALE_SMOOTHING: f32 = 0.05;
pub const DUET_BURST_SPARKS: usize = 8;
pub const DUET_SPARK_LIFE_TICKS: f32 = 45.0;

// Dial
pub const DIAL_ARTBOARD: [f32; 2] = [1920.0, 535.6];
pub const DIAL_LEFT_BUBBLE_BOUNDS: [f32; 4] = [565.0, 28.0, 66.0, 43.0]; // x, y, w, h
pub const DIAL_RIGHT_BUBBLE_BOUNDS: [f32; 4] = [1245.0, 233.0, 45.0, 67.0];
pub const DIAL_MAX_OFFSET: f32 = 240.0; // canvas px
pub const DIAL_MAX_ROTATION: f32 = std::f32::consts::FRAC_PI_2;
pub const DIAL_SMOOTHING: f32 = 0.15;

pub const BACKGROUND: &str = "black";
