//! Use-Case: Punkt über das Formular-Popup hinzufügen.
//!
//! Ablauf: Popup öffnen → Formular validieren → genau eine Mutation einreihen →
//! Antwort verarbeiten (Erfolg, leeres Ergebnis oder Fehler).

use serde_json::Value;

use super::notifications;
use crate::api::{is_truthy, AddPointOutcome};
use crate::app::state::{AddPointPopup, Severity};
use crate::app::AppState;
use crate::core::{Feature, LngLat, PopupAnchor};

/// Öffnet ein neues Formular-Popup; ein offenes wird ersetzt.
pub fn open_popup(state: &mut AppState, lng_lat: LngLat, anchor: PopupAnchor) {
    let id = state.popups.next_id();
    log::debug!(
        "Punkt-Popup #{} bei {:.5}, {:.5} (Anker {})",
        id,
        lng_lat.lng,
        lng_lat.lat,
        anchor.as_str()
    );
    state.popups.add_point = Some(AddPointPopup::new(id, lng_lat, anchor));
}

/// Schließt das Formular-Popup. Eine laufende Anfrage wird trotzdem ausgewertet.
pub fn close_popup(state: &mut AppState) {
    state.popups.add_point = None;
}

/// Validiert das Formular und reiht bei Erfolg genau eine `addPoint`-Anfrage ein.
pub fn submit(state: &mut AppState) {
    let Some(popup) = state.popups.add_point.as_mut() else {
        log::debug!("Submit ohne offenes Punkt-Popup ignoriert");
        return;
    };

    if let Some(request_id) = popup.pending_request {
        log::debug!("Submit ignoriert, addPoint #{} läuft noch", request_id);
        return;
    }

    match popup.fields.validate() {
        Ok(point) => {
            popup.errors = Default::default();
            log::info!("addPoint eingereiht: {}", point.title);
            let request_id = state.submissions.enqueue(point);
            popup.pending_request = Some(request_id);
        }
        Err(errors) => {
            log::debug!("Formular ungültig: {:?}", errors);
            popup.errors = errors;
        }
    }
}

/// Verarbeitet die Antwort einer `addPoint`-Anfrage.
pub fn finish(state: &mut AppState, request_id: u64, outcome: AddPointOutcome) {
    let Some(point) = state.submissions.finish(request_id) else {
        log::warn!("Antwort für unbekannte addPoint-Anfrage #{}", request_id);
        return;
    };

    let owns_popup = state
        .popups
        .add_point
        .as_ref()
        .is_some_and(|p| p.pending_request == Some(request_id));

    match outcome {
        AddPointOutcome::Saved { result } if is_truthy(&result) => {
            let id = result_id(&result).unwrap_or_else(|| format!("local-{}", request_id));
            log::info!("Punkt gespeichert: {} ({})", point.title, id);
            state.pending_source_features.push(Feature::from_new_point(id, &point));
            notifications::notify(state, Severity::Success, format!("{} added", point.title));
            if owns_popup {
                close_popup(state);
            }
        }
        AddPointOutcome::Saved { .. } => {
            log::info!("addPoint #{} ohne Ergebnis beendet", request_id);
            if owns_popup {
                close_popup(state);
            }
        }
        AddPointOutcome::Failed { message } => {
            log::warn!("addPoint #{} fehlgeschlagen: {}", request_id, message);
            notifications::notify(
                state,
                Severity::Error,
                format!("Adding {} failed: {}", point.title, message),
            );
            if let Some(popup) = state.popups.add_point.as_mut().filter(|_| owns_popup) {
                popup.pending_request = None;
            }
        }
    }
}

/// ID aus dem Mutationsergebnis (`{ id }`, Zahl oder String).
fn result_id(result: &Value) -> Option<String> {
    match result.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
