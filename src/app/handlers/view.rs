//! Handler für Karten-Status, Viewport und Tabs.

use crate::app::state::Tab;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Viewport;

/// Markiert die Karte als vollständig aufgebaut.
pub fn mark_map_ready(state: &mut AppState) {
    use_cases::viewport::mark_map_ready(state);
}

/// Übernimmt einen neuen (gerundeten) Viewport.
pub fn set_viewport(state: &mut AppState, viewport: Viewport) {
    use_cases::viewport::set_viewport(state, viewport);
}

/// Wechselt den aktiven Tab.
pub fn set_active_tab(state: &mut AppState, tab: Tab) {
    use_cases::viewport::set_active_tab(state, tab);
}
