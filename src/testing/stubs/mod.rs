pub mod recording_canvas;
pub mod scripted_driver;
pub mod scripted_points;

pub use recording_canvas::RecordingCanvas;
pub use scripted_driver::{DriverEvent, ScriptedDriver};
pub use scripted_points::ScriptedPoints;
