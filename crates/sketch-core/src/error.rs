use thiserror::Error;

/// Everything that can go wrong outside the frame loop. Inside the loop
/// failures degrade to "don't draw it" instead of surfacing as errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
    #[error("asset `{name}` failed to load: {reason}")]
    AssetLoad { name: String, reason: String },

    #[error("curve data could not be parsed: {0}")]
    CurveParse(String),

    #[error("curve is degenerate: {0}")]
    DegenerateCurve(&'static str),

    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("unknown sketch `{0}`")]
    UnknownSketch(String),
}

impl SketchError {
    pub(crate) fn config(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfig { field, reason }
    }
}
