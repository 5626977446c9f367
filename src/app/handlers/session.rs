//! Handler für Anwendungssteuerung und Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Signalisiert dem Host, die Anwendung kontrolliert zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Wendet geänderte Optionen an und persistiert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}

/// Setzt die Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}
