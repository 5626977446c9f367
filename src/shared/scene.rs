//! Szenen-Snapshot als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` ihn baut und der UI-Kollaborateur ihn
//! konsumiert.

use glam::DVec2;

use super::options::EditorOptions;
use crate::app::tools::ToolPrimitive;
use crate::core::{Circle, LineSegment};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct SketchScene {
    /// Alle festgeschriebenen Liniensegmente in Einfüge-Reihenfolge
    pub segments: Vec<LineSegment>,
    /// Alle festgeschriebenen Kreise in Einfüge-Reihenfolge
    pub circles: Vec<Circle>,
    /// Aktuelle Schnittpunkte (Stand des letzten Recompute)
    pub intersections: Vec<DVec2>,
    /// Unbestätigtes Vorschau-Primitiv des aktiven Werkzeugs
    pub preview: Option<ToolPrimitive>,
    /// Position des Snap-Indikators (None = kein Snap aktiv)
    pub snap_indicator: Option<DVec2>,
    /// Statuszeile des aktiven Werkzeugs
    pub status_text: &'static str,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl SketchScene {
    /// Gibt zurück, ob die Szene festgeschriebene Primitive enthält.
    pub fn has_content(&self) -> bool {
        !self.segments.is_empty() || !self.circles.is_empty()
    }
}
