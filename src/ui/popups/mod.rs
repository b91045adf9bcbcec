//! Popups über der Karte, am Referenzpunkt über ihren Anker ausgerichtet.

mod add_point;
mod feature;

pub use add_point::show_add_point_popup;
pub use feature::show_feature_popup;

use crate::core::PopupAnchor;

/// Pivot des Popups: die Stelle, die den Referenzpunkt berührt.
pub fn anchor_pivot(anchor: PopupAnchor) -> egui::Align2 {
    match anchor {
        PopupAnchor::TopLeft => egui::Align2::LEFT_TOP,
        PopupAnchor::TopRight => egui::Align2::RIGHT_TOP,
        PopupAnchor::BottomLeft => egui::Align2::LEFT_BOTTOM,
        PopupAnchor::BottomRight => egui::Align2::RIGHT_BOTTOM,
        PopupAnchor::Left => egui::Align2::LEFT_CENTER,
        PopupAnchor::Right => egui::Align2::RIGHT_CENTER,
    }
}

/// Kleiner Abstand zwischen Referenzpunkt und Popup-Rand.
fn anchor_gap(anchor: PopupAnchor) -> egui::Vec2 {
    const GAP: f32 = 8.0;
    match anchor {
        PopupAnchor::TopLeft => egui::vec2(GAP, GAP),
        PopupAnchor::TopRight => egui::vec2(-GAP, GAP),
        PopupAnchor::BottomLeft => egui::vec2(GAP, -GAP),
        PopupAnchor::BottomRight => egui::vec2(-GAP, -GAP),
        PopupAnchor::Left => egui::vec2(GAP, 0.0),
        PopupAnchor::Right => egui::vec2(-GAP, 0.0),
    }
}

/// Rahmen-Area eines Popups am Referenzpunkt.
fn popup_area(id: egui::Id, pivot: egui::Align2, point: egui::Pos2) -> egui::Area {
    egui::Area::new(id)
        .fixed_pos(point)
        .pivot(pivot)
        .order(egui::Order::Foreground)
        .constrain(true)
}

/// Area eines Popups, das mit seinem Anker am Referenzpunkt sitzt.
fn anchored_area(id: egui::Id, anchor: PopupAnchor, point: egui::Pos2) -> egui::Area {
    popup_area(id, anchor_pivot(anchor), point + anchor_gap(anchor))
}

/// Kopfzeile mit Titel und Schließen-Knopf; `true` wenn geschlossen wurde.
fn title_bar(ui: &mut egui::Ui, title: &str) -> bool {
    let mut closed = false;
    ui.horizontal(|ui| {
        ui.strong(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            closed = ui.small_button("×").clicked();
        });
    });
    closed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_touches_reference_point_with_named_corner() {
        assert_eq!(anchor_pivot(PopupAnchor::TopLeft), egui::Align2::LEFT_TOP);
        assert_eq!(
            anchor_pivot(PopupAnchor::BottomRight),
            egui::Align2::RIGHT_BOTTOM
        );
        assert_eq!(anchor_pivot(PopupAnchor::Right), egui::Align2::RIGHT_CENTER);
    }
}
