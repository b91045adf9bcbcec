//! Handler für Detail-Popup und Feature-Auswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Feature;

pub fn open_feature_popup(state: &mut AppState, feature: Feature) {
    use_cases::feature_detail::open_popup(state, feature);
}

pub fn close_feature_popup(state: &mut AppState) {
    use_cases::feature_detail::close_popup(state);
}

/// Ersetzt die aktuelle Auswahl.
pub fn select_features(state: &mut AppState, features: Vec<Feature>) {
    use_cases::feature_detail::select_features(state, features);
}
