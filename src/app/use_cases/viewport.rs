//! Use-Case-Funktionen für Viewport-Anzeige und Tabs.

use crate::app::state::Tab;
use crate::app::AppState;
use crate::core::Viewport;

/// Setzt das "Karte bereit"-Flag.
pub fn mark_map_ready(state: &mut AppState) {
    if !state.view.map_ready {
        log::info!("Karte bereit");
    }
    state.view.map_ready = true;
}

/// Speichert den Viewport gerundet (Länge/Breite 4, Zoom 2 Nachkommastellen).
pub fn set_viewport(state: &mut AppState, viewport: Viewport) {
    state.view.viewport = viewport.rounded();
}

/// Wechselt den aktiven Tab.
pub fn set_active_tab(state: &mut AppState, tab: Tab) {
    if state.view.active_tab != tab {
        log::debug!("Tab gewechselt: {}", tab.label());
    }
    state.view.active_tab = tab;
}
