pub mod assets;
pub mod body;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod gesture;
pub mod math;
pub mod parts;
pub mod path;
pub mod phase;
pub mod sketches;
pub mod surface;

pub use assets::{AssetKind, AssetRequest, AssetState, AssetStore};
pub use body::Body;
pub use config::{DialConfig, DuetConfig, FlowerConfig, PhysicsConfig, RoadConfig};
pub use driver::{FrameClock, FrameCtx, RunState, Sketch, SketchRunner};
pub use error::SketchError;
pub use gesture::{client_to_canvas, drag_rotation, DragPath, GestureTracker, InputEvent};
pub use path::{CurveSource, PathSampler, Zone};
pub use phase::{Phase, PhaseMachine};
pub use sketches::SketchKind;
pub use surface::{DrawCommand, RecordingSurface, StrokeStyle, Surface, TextStyle};
