//! Handler für Werkzeug-Auswahl.

use crate::app::tools::{ActiveTool, ToolKind};
use crate::app::AppState;

/// Wechselt das Konstruktions-Werkzeug.
///
/// Ein Wechsel der Identität verwirft den Schwebezustand des vorherigen
/// Werkzeugs — angefangene Platzierungen werden nicht festgeschrieben.
/// Die erneute Auswahl des aktiven Werkzeugs lässt den Zustand unberührt.
pub fn set_tool(state: &mut AppState, kind: ToolKind) {
    if state.tool.kind() == kind {
        return;
    }
    state.tool = ActiveTool::new(kind);
    log::info!("Werkzeug aktiviert: {kind:?}");
}
