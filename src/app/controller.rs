//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
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
            // === Karte & Viewport ===
            AppCommand::MarkMapReady => handlers::view::mark_map_ready(state),
            AppCommand::SetViewport { viewport } => handlers::view::set_viewport(state, viewport),
            AppCommand::SetActiveTab { tab } => handlers::view::set_active_tab(state, tab),

            // === Punkt hinzufügen ===
            AppCommand::OpenAddPointPopup { lng_lat, anchor } => {
                handlers::points::open_add_point_popup(state, lng_lat, anchor)
            }
            AppCommand::CloseAddPointPopup => handlers::points::close_add_point_popup(state),
            AppCommand::SubmitAddPoint => handlers::points::submit(state),
            AppCommand::FinishAddPoint {
                request_id,
                outcome,
            } => handlers::points::finish(state, request_id, outcome),

            // === Feature-Details ===
            AppCommand::OpenFeaturePopup { feature } => {
                handlers::features::open_feature_popup(state, feature)
            }
            AppCommand::CloseFeaturePopup => handlers::features::close_feature_popup(state),
            AppCommand::SelectFeatures { features } => {
                handlers::features::select_features(state, features)
            }

            // === Benachrichtigungen ===
            AppCommand::DismissNotification { id } => {
                handlers::notifications::dismiss(state, id)
            }
        }

        Ok(())
    }
}
