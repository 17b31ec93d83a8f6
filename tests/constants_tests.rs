// Host-side tests for page constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(!CANVAS_ID.is_empty());
    assert_ne!(SKETCH_QUERY_KEY, SEED_QUERY_KEY);

    // A frame cap shorter than one 60 Hz tick would stall the sketches
    assert!(MAX_FRAME_DT_MS >= 17);
    assert!(MAX_FRAME_DT_MS <= 1000);

    assert!(FALLBACK_IMAGE_SIZE.iter().all(|v| *v > 0.0));
}
