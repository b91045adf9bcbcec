//! Handler für das "Punkt hinzufügen"-Popup und die `addPoint`-Mutation.

use crate::api::AddPointOutcome;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LngLat, PopupAnchor};

/// Öffnet das Formular-Popup am Klickpunkt.
pub fn open_add_point_popup(state: &mut AppState, lng_lat: LngLat, anchor: PopupAnchor) {
    use_cases::add_point::open_popup(state, lng_lat, anchor);
}

/// Schließt das Formular-Popup.
pub fn close_add_point_popup(state: &mut AppState) {
    use_cases::add_point::close_popup(state);
}

/// Validiert und reiht die Mutation ein.
pub fn submit(state: &mut AppState) {
    use_cases::add_point::submit(state);
}

/// Verarbeitet die Antwort des Backends.
pub fn finish(state: &mut AppState, request_id: u64, outcome: AddPointOutcome) {
    use_cases::add_point::finish(state, request_id, outcome);
}
