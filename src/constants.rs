/// Page wiring and frame-loop limits for the browser front-end.
///
/// Sketch tuning lives in `sketch_core::constants`; only values that concern
/// the page itself belong here.
// Element the sketch draws into
pub const CANVAS_ID: &str = "app-canvas";

// Query-string keys: `?sketch=road&seed=7`
pub const SKETCH_QUERY_KEY: &str = "sketch";
pub const SEED_QUERY_KEY: &str = "seed";

// Longest frame handed to the runner; a background tab can report seconds
pub const MAX_FRAME_DT_MS: u64 = 250;

// Nominal size recorded for an image whose natural size reads as zero
pub const FALLBACK_IMAGE_SIZE: [f32; 2] = [1.0, 1.0];
