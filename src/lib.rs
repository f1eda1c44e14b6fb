#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod capture;
pub mod error;
pub mod event;
mod id_generator;
pub mod input;
pub mod model;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod style;

pub use app::SketchApp;
pub use capture::{CaptureState, DragEvent, StrokeCapture};
pub use error::{DrawingError, DrawingResult};
pub use event::{EventBus, EventHandler, ModelEvent};
pub use model::DrawingModel;
pub use renderer::Renderer;
pub use stroke::{ActiveStroke, Stroke, StrokeId, StrokeRef};
pub use style::{StrokeStyle, StyleState};
