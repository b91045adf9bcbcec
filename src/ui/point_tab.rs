//! Tab "Point": Details der ausgewählten Features.

use crate::app::AppState;
use crate::core::Feature;

fn value_or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("–")
}

fn feature_grid(ui: &mut egui::Ui, feature: &Feature) {
    let props = &feature.properties;
    let ll = feature.lng_lat();

    egui::Grid::new(("point_details", feature.id.as_str()))
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Title");
            ui.label(value_or_dash(feature.title()));
            ui.end_row();

            ui.label("Type");
            ui.label(value_or_dash(props.point_type.as_deref()));
            ui.end_row();

            ui.label("Category");
            ui.label(value_or_dash(props.category.as_deref()));
            ui.end_row();

            ui.label("GroupID");
            ui.label(value_or_dash(props.group_id.as_deref()));
            ui.end_row();

            ui.label("ID");
            ui.label(&feature.id);
            ui.end_row();

            ui.label("Longitude");
            ui.label(format!("{:.6}", ll.lng));
            ui.end_row();

            ui.label("Latitude");
            ui.label(format!("{:.6}", ll.lat));
            ui.end_row();
        });
}

/// Rendert den Punkt-Tab in den zentralen Bereich.
pub fn render_point_tab(ui: &mut egui::Ui, state: &AppState) {
    if state.selection.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label("No point selected. Click a marker on the map and choose \"more\".");
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for feature in state.selection.iter() {
            ui.heading(feature.label());
            feature_grid(ui, feature);
            ui.separator();
        }
    });
}
