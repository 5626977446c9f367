//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem UI-Kollaborateur geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod scene;

pub use options::EditorOptions;
pub use options::SNAP_DISTANCE;
pub use scene::SketchScene;
