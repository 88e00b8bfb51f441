#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod command;
pub mod editor;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;

pub use app::InkpadApp;
pub use brush::Brush;
pub use canvas::{Canvas, Snapshot};
pub use command::{Command, CommandOutcome};
pub use editor::{CanvasEditor, UndoStatus};
pub use export::ExportError;
pub use history::SnapshotHistory;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::CanvasRenderer;
