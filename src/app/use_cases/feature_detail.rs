//! Use-Case-Funktionen für das Detail-Popup und die Auswahl.

use crate::app::state::FeaturePopup;
use crate::app::AppState;
use crate::core::Feature;

/// Öffnet das Detail-Popup; ein offenes wird ersetzt.
pub fn open_popup(state: &mut AppState, feature: Feature) {
    let id = state.popups.next_id();
    log::debug!("Detail-Popup #{} für Feature {}", id, feature.id);
    state.popups.feature = Some(FeaturePopup { id, feature });
}

/// Schließt das Detail-Popup.
pub fn close_popup(state: &mut AppState) {
    state.popups.feature = None;
}

/// Ersetzt die Auswahl durch die übergebenen Features.
pub fn select_features(state: &mut AppState, features: Vec<Feature>) {
    state.selection.replace(features);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NewPoint;

    fn feature(id: &str) -> Feature {
        Feature::from_new_point(
            id,
            &NewPoint {
                title: format!("P{id}"),
                category: String::new(),
                point_type: String::new(),
                group_id: String::new(),
                lng: 24.9,
                lat: 60.1,
            },
        )
    }

    #[test]
    fn opening_replaces_previous_popup() {
        let mut state = AppState::new();

        open_popup(&mut state, feature("a"));
        let first_id = state.popups.feature.as_ref().map(|p| p.id);
        open_popup(&mut state, feature("b"));

        let popup = state.popups.feature.as_ref().expect("Popup offen");
        assert_eq!(popup.feature.id, "b");
        assert_ne!(Some(popup.id), first_id);

        close_popup(&mut state);
        assert!(state.popups.feature.is_none());
    }

    #[test]
    fn select_replaces_selection() {
        let mut state = AppState::new();

        select_features(&mut state, vec![feature("a"), feature("b")]);
        select_features(&mut state, vec![feature("c")]);

        let ids: Vec<&str> = state.selection.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }
}
