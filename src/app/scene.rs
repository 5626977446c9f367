//! Builder für Szenen-Snapshots aus dem AppState.

use crate::app::AppState;
use crate::shared::SketchScene;

/// Baut eine SketchScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> SketchScene {
    let snap_indicator = state
        .pointer
        .target
        .is_snap()
        .then(|| state.pointer.target.position());

    SketchScene {
        segments: state.sketch.segments().to_vec(),
        circles: state.sketch.circles().to_vec(),
        intersections: state.sketch.intersections().to_vec(),
        preview: state.tool.preview(),
        snap_indicator,
        status_text: state.tool.status_text(),
        options: state.options.clone(),
    }
}
