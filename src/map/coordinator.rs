//! Karten-Koordinator: verdrahtet Engine-Events mit dem Application-Layer.
//!
//! Beim Mount wird die Binding-Tabelle einmalig befüllt und `load` ausgeführt.
//! Handler lesen die Engine und liefern `AppIntent`s, die der Host abholt.

use anyhow::{Context, Result};

use super::events::{EventBindings, HandlerContext, MapEvent, MapEventKind};
use super::{CursorStyle, MapEngine, SymbolLayer, MARKER_IMAGE, POINTS_LAYER, POINTS_SOURCE};
use crate::app::{AppIntent, AppState};
use crate::core::{select_anchor_with_width, FeatureCollection, MarkerIcon, Viewport};
use crate::shared::AppOptions;

/// Besitzt die Engine und die Binding-Tabelle für die Lebensdauer der Kartenansicht.
pub struct MapCoordinator<E: MapEngine> {
    engine: E,
    options: AppOptions,
    bindings: EventBindings,
    intents: Vec<AppIntent>,
    mounted: bool,
}

impl<E: MapEngine> MapCoordinator<E> {
    /// Registriert alle Bindings und baut die Karte auf (`load`).
    /// Ein nicht ladbares Marker-Icon ist fatal.
    pub fn mount(engine: E, options: AppOptions) -> Result<Self> {
        let mut coordinator = Self {
            engine,
            options,
            bindings: EventBindings::new(),
            intents: Vec::new(),
            mounted: true,
        };
        coordinator.bind_events();
        log::info!(
            "Karte gemountet ({} Bindings, Stil {})",
            coordinator.bindings.len(),
            coordinator.options.map_style
        );

        if let Err(e) = coordinator.dispatch(&MapEvent::Load) {
            coordinator.unmount();
            return Err(e).context("Karte konnte nicht aufgebaut werden");
        }
        Ok(coordinator)
    }

    fn bind_events(&mut self) {
        self.bindings.on(MapEventKind::Load, on_load);
        self.bindings.on_layer(MapEventKind::MouseEnter, POINTS_LAYER, on_mouse_enter);
        self.bindings.on_layer(MapEventKind::MouseLeave, POINTS_LAYER, on_mouse_leave);
        self.bindings.on(MapEventKind::ContextMenu, on_context_menu);
        self.bindings.on(MapEventKind::Click, on_click);
        self.bindings.on(MapEventKind::Move, on_move);
    }

    /// Führt alle zum Event passenden Handler aus. Nach `unmount` ein No-op.
    pub fn dispatch(&mut self, event: &MapEvent) -> Result<()> {
        if !self.mounted {
            log::debug!("Event '{}' nach unmount ignoriert", event.kind().as_str());
            return Ok(());
        }

        for handler in self.bindings.handlers_for(event) {
            let mut ctx = HandlerContext {
                engine: &mut self.engine,
                options: &self.options,
                intents: &mut self.intents,
            };
            handler(&mut ctx, event).with_context(|| {
                format!("Handler für '{}' fehlgeschlagen", event.kind().as_str())
            })?;
        }
        Ok(())
    }

    /// Gibt die seit dem letzten Aufruf erzeugten Intents ab.
    pub fn take_intents(&mut self) -> Vec<AppIntent> {
        std::mem::take(&mut self.intents)
    }

    /// Überträgt neu gespeicherte Punkte aus dem State in die Punktquelle.
    pub fn sync_point_source(&mut self, state: &mut AppState) -> Result<()> {
        if !self.mounted || state.pending_source_features.is_empty() {
            return Ok(());
        }
        for feature in state.pending_source_features.drain(..) {
            log::debug!("Punktquelle: Feature {} eingefügt", feature.id);
            self.engine.upsert_feature(POINTS_SOURCE, feature)?;
        }
        Ok(())
    }

    /// Entfernt alle Bindings und gibt die Engine genau einmal frei.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.bindings.clear();
        self.engine.remove();
        log::info!("Karte entfernt");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn bindings(&self) -> &EventBindings {
        &self.bindings
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

fn on_load(ctx: &mut HandlerContext<'_>, _: &MapEvent) -> Result<()> {
    let icon = MarkerIcon::load(&ctx.options.marker_icon)?;
    ctx.engine.add_image(MARKER_IMAGE, icon)?;
    ctx.engine.add_source(POINTS_SOURCE, initial_points(ctx.options))?;
    ctx.engine.add_layer(SymbolLayer::points())?;
    ctx.intents.push(AppIntent::MapReady);
    Ok(())
}

/// Startdaten der Punktquelle: optionale GeoJSON-Datei, sonst leer.
fn initial_points(options: &AppOptions) -> FeatureCollection {
    let Some(path) = options.points_file.as_deref() else {
        return FeatureCollection::empty();
    };

    let loaded = std::fs::read_to_string(path)
        .with_context(|| format!("Punktdatei nicht lesbar: {}", path))
        .and_then(|text| FeatureCollection::from_json(&text));
    match loaded {
        Ok(collection) => {
            log::info!("{} Punkte geladen aus {}", collection.features.len(), path);
            collection
        }
        Err(e) => {
            log::warn!("Punktdatei ignoriert: {:#}", e);
            FeatureCollection::empty()
        }
    }
}

fn on_mouse_enter(ctx: &mut HandlerContext<'_>, _: &MapEvent) -> Result<()> {
    ctx.engine.set_cursor(CursorStyle::Pointer);
    Ok(())
}

fn on_mouse_leave(ctx: &mut HandlerContext<'_>, _: &MapEvent) -> Result<()> {
    ctx.engine.set_cursor(CursorStyle::Default);
    Ok(())
}

fn on_context_menu(ctx: &mut HandlerContext<'_>, event: &MapEvent) -> Result<()> {
    let MapEvent::ContextMenu(point) = event else {
        return Ok(());
    };
    let anchor = select_anchor_with_width(
        ctx.engine.container_box(),
        point.pixel,
        ctx.options.popup_width_estimate,
    );
    ctx.intents.push(AppIntent::AddPointPopupRequested {
        lng_lat: point.lng_lat,
        anchor,
    });
    Ok(())
}

fn on_click(ctx: &mut HandlerContext<'_>, event: &MapEvent) -> Result<()> {
    let MapEvent::Click(point) = event else {
        return Ok(());
    };
    let hit = ctx
        .engine
        .query_rendered_features(point.pixel, POINTS_LAYER)
        .into_iter()
        .next();
    match hit {
        Some(feature) => ctx.intents.push(AppIntent::FeaturePopupRequested { feature }),
        None => ctx.intents.push(AppIntent::EmptyMapClicked),
    }
    Ok(())
}

fn on_move(ctx: &mut HandlerContext<'_>, _: &MapEvent) -> Result<()> {
    let center = ctx.engine.center();
    let viewport = Viewport {
        center_longitude: center.lng,
        center_latitude: center.lat,
        zoom: ctx.engine.zoom(),
    };
    ctx.intents.push(AppIntent::ViewportMoved {
        viewport: viewport.rounded(),
    });
    Ok(())
}
