//! Kopfzeile mit Titel und Tabs.

use crate::app::{AppIntent, AppState, Tab};

/// Titel der Anwendung.
pub const APP_TITLE: &str = "Bike parking areas";

/// Rendert Titel und Tab-Leiste und gibt erzeugte Events zurück.
pub fn render_header(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(APP_TITLE);
            ui.separator();

            for tab in [Tab::Map, Tab::Point] {
                let selected = state.view.active_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                    events.push(AppIntent::TabSelected { tab });
                }
            }
        });
    });

    events
}
