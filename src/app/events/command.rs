use crate::app::tools::ToolKind;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Cursor-Zustand aktualisieren (Snap-Auflösung + Vorschau nachziehen)
    UpdatePointer { world_pos: glam::DVec2 },
    /// Punkt an aufgelöster Position platzieren
    PlacePoint { world_pos: glam::DVec2 },
    /// Konstruktions-Werkzeug wechseln
    SetTool { kind: ToolKind },
    /// Anwendung beenden
    RequestExit,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
