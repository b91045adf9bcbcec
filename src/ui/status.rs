//! Status-Bar am unteren Bildschirmrand und Viewport-Sidebar über der Karte.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.view.map_ready {
                ui.label("Map ready");
            } else {
                ui.label("Loading map…");
            }

            ui.separator();

            let selected_count = state.selection.len();
            if selected_count > 0 {
                ui.label(format!("Selected points: {}", selected_count));
            } else {
                ui.label("Selected points: none");
            }

            ui.separator();

            if state.submissions.has_pending() {
                ui.spinner();
                ui.label(format!(
                    "Saving {} point(s)…",
                    state.submissions.in_flight.len()
                ));
                ui.separator();
            }

            ui.label(format!("API: {}", state.options.api_url));
        });
    });
}

/// Text der Sidebar: `Longitude: … | Latitude: … | Zoom: …`.
pub fn viewport_text(state: &AppState) -> String {
    let vp = &state.view.viewport;
    format!(
        "Longitude: {} | Latitude: {} | Zoom: {}",
        vp.center_longitude, vp.center_latitude, vp.zoom
    )
}

/// Rendert die Viewport-Anzeige oben links über der Karte.
pub fn render_viewport_sidebar(ctx: &egui::Context, map_rect: egui::Rect, state: &AppState) {
    egui::Area::new(egui::Id::new("viewport_sidebar"))
        .fixed_pos(map_rect.min + egui::vec2(12.0, 12.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_unmultiplied(35, 55, 75, 230))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(viewport_text(state))
                            .monospace()
                            .color(egui::Color32::WHITE),
                    );
                });
        });
}
