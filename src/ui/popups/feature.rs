//! Detail-Popup eines angeklickten Markers.

use super::{popup_area, title_bar};
use crate::app::state::FeaturePopup;
use crate::app::AppIntent;

/// Zeigt Titel (oder `id: <id>`) und die Aktion "more" über dem Marker.
/// `marker_top` ist die Oberkante des Marker-Icons in Bildschirmkoordinaten.
pub fn show_feature_popup(
    ctx: &egui::Context,
    popup: &FeaturePopup,
    marker_top: egui::Pos2,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    popup_area(
        egui::Id::new(("feature_popup", popup.id)),
        egui::Align2::CENTER_BOTTOM,
        marker_top - egui::vec2(0.0, 4.0),
    )
    .show(ctx, |ui| {
        egui::Frame::popup(ui.style()).show(ui, |ui| {
            if title_bar(ui, &popup.feature.label()) {
                events.push(AppIntent::FeaturePopupClosed);
            }
            ui.add_space(4.0);
            if ui.button("more").clicked() {
                events.push(AppIntent::FeatureDetailsRequested);
            }
        });
    });

    events
}
