//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { world_pos } => vec![AppCommand::UpdatePointer { world_pos }],
        // Klick aktualisiert zuerst den Cursor-Zustand, damit Platzierung
        // und Snap-Indikator dieselbe Auflösung sehen
        AppIntent::PrimaryClicked { world_pos } => vec![
            AppCommand::UpdatePointer { world_pos },
            AppCommand::PlacePoint { world_pos },
        ],
        AppIntent::ToolSelected { kind } => vec![AppCommand::SetTool { kind }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
