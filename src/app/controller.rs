//! Application Controller für zentrale Event-Verarbeitung.

use super::{scene, AppCommand, AppIntent, AppState};
use crate::shared::SketchScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Konstruktion ===
            AppCommand::UpdatePointer { world_pos } => {
                handlers::construction::update_pointer(state, world_pos)
            }
            AppCommand::PlacePoint { world_pos } => {
                handlers::construction::place_point(state, world_pos)?
            }

            // === Werkzeuge ===
            AppCommand::SetTool { kind } => handlers::tooling::set_tool(state, kind),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
            AppCommand::ApplyOptions { options } => {
                handlers::session::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::session::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut den read-only Szenen-Snapshot aus dem aktuellen AppState.
    pub fn build_scene(&self, state: &AppState) -> SketchScene {
        scene::build(state)
    }
}
