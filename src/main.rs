//! Bike parking areas.
//!
//! Kartenansicht für Fahrradparkplätze: Marker anzeigen, per Rechtsklick neue
//! Punkte über die `addPoint`-Mutation anlegen, Details im Punkt-Tab ansehen.

use std::sync::Arc;
use std::time::Duration;

use bicycle_parking_map::api::{GraphqlClient, MutationWorker};
use bicycle_parking_map::map::POINTS_LAYER;
use bicycle_parking_map::shared::options::ENV_ACCESS_TOKEN;
use bicycle_parking_map::{
    ui, AppController, AppIntent, AppOptions, AppState, CanvasMap, MapCoordinator, Tab,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Bike parking map v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut app_options = AppOptions::load_from_file(&AppOptions::config_path());
        app_options.apply_env_overrides();
        if app_options.map_access_token.is_empty() {
            log::warn!(
                "Kein Karten-Access-Token gesetzt ({} oder Optionen-Datei)",
                ENV_ACCESS_TOKEN
            );
        }
        log::info!(
            "Kartenstil: {}, API: {}",
            app_options.map_style,
            app_options.api_url
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title(ui::APP_TITLE),
            ..Default::default()
        };

        eframe::run_native(
            ui::APP_TITLE,
            options,
            Box::new(move |_cc| Ok(Box::new(MapApp::new(app_options)?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    coordinator: MapCoordinator<CanvasMap>,
    worker: MutationWorker,
    map_rect: egui::Rect,
}

impl MapApp {
    /// Baut Karte und Backend-Anbindung auf. Fehler beim Laden der Karte sind fatal.
    fn new(options: AppOptions) -> anyhow::Result<Self> {
        let api = GraphqlClient::new(options.api_url.clone())?;
        let coordinator = MapCoordinator::mount(CanvasMap::new(&options), options.clone())?;

        let mut app = Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            coordinator,
            worker: MutationWorker::new(Arc::new(api)),
            map_rect: egui::Rect::NOTHING,
        };
        let startup = app.coordinator.take_intents();
        app.process_events(startup);
        Ok(app)
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = self.worker.poll();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = !events.is_empty();
        self.process_events(events);

        self.worker.submit_pending(&mut self.state);
        self.sync_point_source();
        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_header(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        let show_map = self.state.view.active_tab == Tab::Map;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if show_map {
                    let (response, map_events) = self.coordinator.engine_mut().show(ui);
                    self.map_rect = response.rect;
                    for event in map_events {
                        if let Err(e) = self.coordinator.dispatch(&event) {
                            log::error!("Karten-Event fehlgeschlagen: {:#}", e);
                        }
                    }
                } else {
                    egui::Frame::central_panel(ui.style()).show(ui, |ui| {
                        ui::render_point_tab(ui, &self.state);
                    });
                }
            });
        events.extend(self.coordinator.take_intents());

        if show_map {
            events.extend(self.show_map_overlays(ctx));
        }
        events.extend(ui::render_notifications(ctx, &self.state));

        events
    }

    fn show_map_overlays(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = self.map_rect;
        let engine = self.coordinator.engine();

        ui::render_viewport_sidebar(ctx, rect, &self.state);

        if let Some(popup) = self.state.popups.add_point.as_mut() {
            let point = engine.to_screen(rect, popup.lng_lat);
            events.extend(ui::show_add_point_popup(
                ctx,
                popup,
                point,
                rect.height() * 0.5,
            ));
        }
        if let Some(popup) = self.state.popups.feature.as_ref() {
            let marker_top = engine.icon_top(rect, POINTS_LAYER, popup.lng_lat());
            events.extend(ui::show_feature_popup(ctx, popup, marker_top));
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_point_source(&mut self) {
        if let Err(e) = self.coordinator.sync_point_source(&mut self.state) {
            log::error!("Punktquelle konnte nicht aktualisiert werden: {:#}", e);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
        if self.worker.has_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl Drop for MapApp {
    fn drop(&mut self) {
        self.coordinator.unmount();
    }
}
