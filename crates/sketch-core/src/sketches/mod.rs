pub mod dial;
pub mod duet;
pub mod flower;
pub mod road;

use crate::config::{DialConfig, DuetConfig, FlowerConfig, RoadConfig};
use crate::driver::Sketch;
use crate::error::SketchError;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

pub use dial::DialSketch;
pub use duet::DuetSketch;
pub use flower::FlowerSketch;
pub use road::RoadSketch;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SketchKind {
    #[default]
    Flower,
    Road,
    Duet,
    Dial,
}

impl SketchKind {
    pub const ALL: [SketchKind; 4] = [
        SketchKind::Flower,
        SketchKind::Road,
        SketchKind::Duet,
        SketchKind::Dial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SketchKind::Flower => "flower",
            SketchKind::Road => "road",
            SketchKind::Duet => "duet",
            SketchKind::Dial => "dial",
        }
    }

    /// Build the sketch with its default tuning. `seed` drives every random
    /// draw the sketch makes.
    pub fn build(self, canvas: Vec2, seed: u64) -> Result<Box<dyn Sketch>, SketchError> {
        let sketch: Box<dyn Sketch> = match self {
            SketchKind::Flower => {
                let config = FlowerConfig::default();
                config.validate()?;
                Box::new(FlowerSketch::new(canvas, config, seed))
            }
            SketchKind::Road => {
                let config = RoadConfig::default();
                config.validate()?;
                Box::new(RoadSketch::new(canvas, config))
            }
            SketchKind::Duet => {
                let config = DuetConfig::default();
                config.validate()?;
                Box::new(DuetSketch::new(canvas, config))
            }
            SketchKind::Dial => {
                let config = DialConfig::default();
                config.validate()?;
                Box::new(DialSketch::new(canvas, config))
            }
        };
        Ok(sketch)
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SketchKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SketchError::UnknownSketch(s.to_owned()))
    }
}
