//! Formular-Popup "Add a point".

use super::{anchored_area, title_bar};
use crate::app::state::AddPointPopup;
use crate::app::AppIntent;

const FIELD_WIDTH: f32 = 220.0;

/// Ein Formularfeld samt Label und Inline-Fehler.
struct FormField<'a> {
    label: &'static str,
    placeholder: &'static str,
    value: &'a mut String,
    error: Option<&'static str>,
}

fn field_id(popup_id: u64, label: &str) -> egui::Id {
    egui::Id::new(("add_point_field", popup_id, label))
}

/// Zeichnet ein Feld; `true` wenn es per Enter verlassen wurde.
fn text_field(ui: &mut egui::Ui, id: egui::Id, field: FormField<'_>, enabled: bool) -> bool {
    ui.add_space(6.0);
    ui.label(field.label);
    let mut edit = egui::TextEdit::singleline(field.value)
        .id(id)
        .hint_text(field.placeholder)
        .desired_width(FIELD_WIDTH);
    if field.error.is_some() {
        edit = edit.text_color(ui.visuals().error_fg_color);
    }
    let response = ui.add_enabled(enabled, edit);
    if let Some(error) = field.error {
        ui.label(
            egui::RichText::new(error)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn form_body(ui: &mut egui::Ui, popup: &mut AddPointPopup, editable: bool) -> bool {
    let popup_id = popup.id;
    let fields = &mut popup.fields;
    let errors = &popup.errors;
    let rows = [
        FormField {
            label: "Title",
            placeholder: "e.g. Point A",
            value: &mut fields.title,
            error: errors.title,
        },
        FormField {
            label: "Type",
            placeholder: "e.g. line",
            value: &mut fields.point_type,
            error: None,
        },
        FormField {
            label: "GroupID",
            placeholder: "",
            value: &mut fields.group_id,
            error: None,
        },
        FormField {
            label: "Category",
            placeholder: "e.g. u-rack",
            value: &mut fields.category,
            error: None,
        },
        FormField {
            label: "Longitude",
            placeholder: "",
            value: &mut fields.lng,
            error: errors.lng,
        },
        FormField {
            label: "Latitude",
            placeholder: "",
            value: &mut fields.lat,
            error: errors.lat,
        },
    ];

    let mut entered = false;
    for row in rows {
        let id = field_id(popup_id, row.label);
        entered |= text_field(ui, id, row, editable);
    }

    ui.add_space(10.0);
    let mut submitted = false;
    ui.horizontal(|ui| {
        let submit = ui.add_enabled(editable, egui::Button::new("Submit"));
        submitted = submit.clicked() || (editable && entered);
        if !editable {
            ui.spinner();
        }
    });
    submitted
}

/// Zeigt das Formular am Klickpunkt. Eingaben werden direkt im Popup-Zustand editiert.
pub fn show_add_point_popup(
    ctx: &egui::Context,
    popup: &mut AddPointPopup,
    point: egui::Pos2,
    max_height: f32,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let editable = !popup.is_submitting();
    let area_id = egui::Id::new(("add_point_popup", popup.id));

    anchored_area(area_id, popup.anchor, point).show(ctx, |ui| {
        egui::Frame::popup(ui.style()).show(ui, |ui| {
            if title_bar(ui, "Add a point") {
                events.push(AppIntent::AddPointPopupClosed);
            }

            egui::ScrollArea::vertical()
                .max_height(max_height)
                .show(ui, |ui| {
                    if form_body(ui, popup, editable) {
                        events.push(AppIntent::AddPointSubmitted);
                    }
                });
        });
    });

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LngLat, PopupAnchor};

    fn enter_input() -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    fn frame(
        ctx: &egui::Context,
        popup: &mut AddPointPopup,
        input: egui::RawInput,
    ) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        let _ = ctx.run(input, |ctx| {
            intents = show_add_point_popup(ctx, popup, egui::pos2(300.0, 300.0), 400.0);
        });
        intents
    }

    fn popup() -> AddPointPopup {
        AddPointPopup::new(1, LngLat::new(24.93, 60.17), PopupAnchor::TopLeft)
    }

    #[test]
    fn enter_without_focused_field_does_not_submit() {
        let ctx = egui::Context::default();
        let mut popup = popup();
        frame(&ctx, &mut popup, egui::RawInput::default());
        frame(&ctx, &mut popup, egui::RawInput::default());

        let intents = frame(&ctx, &mut popup, enter_input());

        assert!(intents.is_empty());
    }

    #[test]
    fn enter_in_focused_field_submits() {
        let ctx = egui::Context::default();
        let mut popup = popup();
        frame(&ctx, &mut popup, egui::RawInput::default());
        ctx.memory_mut(|m| m.request_focus(field_id(1, "Title")));
        frame(&ctx, &mut popup, egui::RawInput::default());

        let intents = frame(&ctx, &mut popup, enter_input());

        assert!(matches!(intents[..], [AppIntent::AddPointSubmitted]));
    }
}
