//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Konstruktion,
/// Werkzeug, Cursor, Optionen).
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use scene::build as build_scene;
pub use state::{AppState, PointerState};
pub use tools::{ActiveTool, ToolAction, ToolKind, ToolPrimitive};
