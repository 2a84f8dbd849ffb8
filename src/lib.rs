#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod tools;

mod id_generator;

pub use action::{Action, Stamp, Stroke};
pub use app::SketchApp;
pub use config::SketchConfig;
pub use controller::{Interaction, InteractionController};
pub use error::{Result, SketchError};
pub use event::{SceneEvent, SceneObserver, SceneView};
pub use history::SceneHistory;
pub use input::{InputHandler, PointerEvent};
pub use renderer::Renderer;
pub use scene::Scene;
pub use surface::{DisplayList, RenderSurface};
pub use tools::{CursorPreview, ToolId, ToolKind, ToolState};

pub const APP_NAME: &str = "Sticker Sketchpad";
