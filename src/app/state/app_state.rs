use crate::app::CommandLog;
use crate::core::Feature;
use crate::shared::AppOptions;

use super::{NotificationState, PopupState, SelectionState, SubmissionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// View-State (Viewport, Tab)
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Offene Popups
    pub popups: PopupState,
    /// Snackbar-Benachrichtigungen
    pub notifications: NotificationState,
    /// Laufende `addPoint`-Aufrufe
    pub submissions: SubmissionState,
    /// Neue Features, die noch in die Punktquelle der Karte müssen
    pub pending_source_features: Vec<Feature>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Konfiguration
    pub options: AppOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            view: ViewState::new(options.initial_viewport),
            selection: SelectionState::new(),
            popups: PopupState::default(),
            notifications: NotificationState::default(),
            submissions: SubmissionState::default(),
            pending_source_features: Vec::new(),
            command_log: CommandLog::new(),
            options,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
