//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::Tab;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapReady => vec![AppCommand::MarkMapReady],
        AppIntent::ViewportMoved { viewport } => vec![AppCommand::SetViewport { viewport }],
        AppIntent::TabSelected { tab } => vec![AppCommand::SetActiveTab { tab }],

        AppIntent::AddPointPopupRequested { lng_lat, anchor } => {
            vec![AppCommand::OpenAddPointPopup { lng_lat, anchor }]
        }
        AppIntent::AddPointSubmitted => vec![AppCommand::SubmitAddPoint],
        AppIntent::AddPointPopupClosed => vec![AppCommand::CloseAddPointPopup],
        AppIntent::AddPointCompleted {
            request_id,
            outcome,
        } => vec![AppCommand::FinishAddPoint {
            request_id,
            outcome,
        }],

        AppIntent::FeaturePopupRequested { feature } => {
            vec![AppCommand::OpenFeaturePopup { feature }]
        }
        AppIntent::FeatureDetailsRequested => match state.popups.feature.as_ref() {
            Some(popup) => vec![
                AppCommand::SelectFeatures {
                    features: vec![popup.feature.clone()],
                },
                AppCommand::CloseFeaturePopup,
                AppCommand::SetActiveTab { tab: Tab::Point },
            ],
            None => Vec::new(),
        },
        AppIntent::FeaturePopupClosed => vec![AppCommand::CloseFeaturePopup],
        AppIntent::EmptyMapClicked => {
            let mut commands = Vec::new();
            if state.popups.add_point.is_some() {
                commands.push(AppCommand::CloseAddPointPopup);
            }
            if state.popups.feature.is_some() {
                commands.push(AppCommand::CloseFeaturePopup);
            }
            commands
        }

        AppIntent::NotificationDismissed { id } | AppIntent::NotificationExpired { id } => {
            vec![AppCommand::DismissNotification { id }]
        }
    }
}

#[cfg(test)]
mod tests;
