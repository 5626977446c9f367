//! Application State: Sketch, Werkzeug, Cursor und Laufzeit-Optionen.

use glam::DVec2;

use super::tools::{ActiveTool, ToolKind};
use super::CommandLog;
use crate::core::{Sketch, SnapTarget};
use crate::shared::EditorOptions;

/// Cursor-Zustand: Roh-Position und aufgelöstes Snap-Ziel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Roh-Cursorposition in Weltkoordinaten
    pub cursor: DVec2,
    /// Aufgelöstes Snap-Ziel für diese Position
    pub target: SnapTarget,
}

impl PointerState {
    /// Erstellt den Anfangszustand am Ursprung (kein Snap).
    pub fn new() -> Self {
        Self {
            cursor: DVec2::ZERO,
            target: SnapTarget::Free(DVec2::ZERO),
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauptzustand der Anwendung
///
/// Der Sketch gehört exklusiv diesem Zustand und wird nur über die
/// Command-Handler mutiert — keine prozessweiten Singletons.
pub struct AppState {
    /// Die aktuelle Konstruktion (Segmente, Kreise, Schnittpunkte)
    pub sketch: Sketch,
    /// Aktives Werkzeug inklusive Schwebezustand
    pub tool: ActiveTool,
    /// Cursor-Zustand des letzten Pointer-Events
    pub pointer: PointerState,
    /// Laufzeit-Optionen (Snap-Distanz, Farben, Größen)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State (Lineal aktiv).
    pub fn new() -> Self {
        Self {
            sketch: Sketch::new(),
            tool: ActiveTool::new(ToolKind::Straightedge),
            pointer: PointerState::new(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
