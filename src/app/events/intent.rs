use crate::app::tools::ToolKind;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Cursor hat sich bewegt (Weltkoordinaten der Renderfläche)
    PointerMoved { world_pos: glam::DVec2 },
    /// Primärklick an Position (Punkt platzieren oder Platzierung abschließen)
    PrimaryClicked { world_pos: glam::DVec2 },
    /// Konstruktions-Werkzeug gewählt
    ToolSelected { kind: ToolKind },
    /// Anwendung beenden
    ExitRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
