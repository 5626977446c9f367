//! Core-Domänentypen: Segmente, Kreise, Sketch, Schnittpunkte, Snap-Index.

pub mod intersect;
pub mod primitive;
/// Core-Datenmodell der Konstruktion
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Sketch: Container für alle Segmente, Kreise und Schnittpunkte
/// - LineSegment / Circle: vom Nutzer platzierte Primitive
pub mod sketch;
pub mod snap;
pub mod spatial;

pub use primitive::{Circle, LineSegment};
pub use sketch::{Sketch, SketchError};
pub use snap::{resolve_snap, SnapSource, SnapTarget};
pub use spatial::{SnapClass, SnapIndex, SnapMatch};
