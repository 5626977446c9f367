//! Zirkel-Editor Library.
//! Konstruktionskern als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ActiveTool, AppCommand, AppController, AppIntent, AppState, CommandLog, PointerState,
    ToolAction, ToolKind, ToolPrimitive,
};
pub use core::{
    resolve_snap, Circle, LineSegment, Sketch, SketchError, SnapIndex, SnapMatch, SnapSource,
    SnapTarget,
};
pub use shared::{EditorOptions, SketchScene, SNAP_DISTANCE};
