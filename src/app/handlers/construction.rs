//! Handler für Platzierungen: Cursor-Auflösung, Punktsetzen, Festschreiben.

use glam::DVec2;

use crate::app::state::PointerState;
use crate::app::tools::{ToolAction, ToolPrimitive};
use crate::app::AppState;
use crate::core::resolve_snap;

/// Aktualisiert Cursor- und Schwebezustand bei Mausbewegung.
///
/// Die Vorschau folgt der aufgelösten Position, nicht dem Roh-Cursor —
/// ein angefangenes Segment rastet damit sichtbar auf Features ein.
pub fn update_pointer(state: &mut AppState, world_pos: DVec2) {
    let target = resolve_snap(world_pos, &state.sketch, state.options.snap_distance);
    state.tool.on_cursor_moved(target.position());
    state.pointer = PointerState {
        cursor: world_pos,
        target,
    };
}

/// Verarbeitet einen Primärklick: Platzierung beginnen oder festschreiben.
pub fn place_point(state: &mut AppState, world_pos: DVec2) -> anyhow::Result<()> {
    let target = resolve_snap(world_pos, &state.sketch, state.options.snap_distance);
    state.pointer = PointerState {
        cursor: world_pos,
        target,
    };

    match state.tool.on_click(target.position()) {
        ToolAction::Continue => Ok(()),
        ToolAction::ReadyToExecute => commit_pending(state),
    }
}

/// Gemeinsame Logik: Primitiv entnehmen, anhängen, Schnittpunkte synchron
/// neu berechnen. Der Store gilt erst danach wieder als konsistent.
fn commit_pending(state: &mut AppState) -> anyhow::Result<()> {
    let Some(primitive) = state.tool.take_commit() else {
        return Ok(());
    };

    match primitive {
        ToolPrimitive::Segment(segment) => state.sketch.add_segment(segment.start, segment.end),
        ToolPrimitive::Circle(circle) => state.sketch.add_circle(circle.center, circle.radius)?,
    }
    state.sketch.recompute_intersections();

    log::info!(
        "Primitiv festgeschrieben: {} Segmente, {} Kreise, {} Schnittpunkte",
        state.sketch.segment_count(),
        state.sketch.circle_count(),
        state.sketch.intersection_count()
    );

    Ok(())
}
