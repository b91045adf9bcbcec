//! Snackbar-Benachrichtigungen am unteren Rand.

use std::time::Duration;

use crate::app::state::Severity;
use crate::app::{AppIntent, AppState};

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Success => egui::Color32::from_rgb(46, 125, 50),
        Severity::Info => egui::Color32::from_rgb(2, 136, 209),
        Severity::Warning => egui::Color32::from_rgb(237, 108, 2),
        Severity::Error => egui::Color32::from_rgb(211, 47, 47),
    }
}

/// Rendert alle aktiven Benachrichtigungen; abgelaufene werden gemeldet.
pub fn render_notifications(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if state.notifications.is_empty() {
        return events;
    }

    let lifetime = Duration::from_secs_f32(state.options.notification_seconds.max(0.0));
    let mut next_expiry = lifetime;

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -36.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notification in state.notifications.entries() {
                let age = notification.created_at.elapsed();
                if age >= lifetime {
                    events.push(AppIntent::NotificationExpired {
                        id: notification.id,
                    });
                    continue;
                }
                next_expiry = next_expiry.min(lifetime - age);

                egui::Frame::popup(ui.style())
                    .fill(severity_color(notification.severity))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&notification.message)
                                    .color(egui::Color32::WHITE),
                            );
                            if ui.small_button("×").clicked() {
                                events.push(AppIntent::NotificationDismissed {
                                    id: notification.id,
                                });
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

    ctx.request_repaint_after(next_expiry);
    events
}
