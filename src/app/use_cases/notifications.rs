//! Use-Case-Funktionen für Benachrichtigungen.

use crate::app::state::Severity;
use crate::app::AppState;

/// Zeigt eine Benachrichtigung an.
pub fn notify(state: &mut AppState, severity: Severity, message: String) {
    log::debug!("Benachrichtigung ({:?}): {}", severity, message);
    state.notifications.push(severity, message);
}

/// Entfernt eine Benachrichtigung.
pub fn dismiss(state: &mut AppState, id: u64) {
    state.notifications.dismiss(id);
}
