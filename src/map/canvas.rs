//! egui-Canvas als Karten-Engine: Marker-Layer über einer Web-Mercator-Kamera.
//!
//! Kacheln werden nicht geladen; der Hintergrund ist eine schlichte Fläche mit
//! Längen-/Breitengrad-Raster. Pan per Drag, Zoom per Scroll auf die Mausposition.

use std::collections::HashMap;

use anyhow::{bail, Result};
use glam::Vec2;

use super::{CursorStyle, IconAnchor, MapEngine, MapEvent, SymbolLayer};
use crate::core::{
    ClickPoint, Feature, FeatureCollection, LngLat, MapCamera, MarkerIcon, PointSource,
    Viewport, ViewportBox,
};
use crate::shared::AppOptions;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xE8, 0xE4, 0xDA);
const GRID: egui::Color32 = egui::Color32::from_rgb(0xD4, 0xCF, 0xC4);

/// Karten-Engine, die direkt mit dem egui-Painter zeichnet.
pub struct CanvasMap {
    camera: MapCamera,
    container: ViewportBox,
    images: HashMap<String, MarkerIcon>,
    textures: HashMap<String, egui::TextureHandle>,
    sources: HashMap<String, PointSource>,
    layers: Vec<SymbolLayer>,
    cursor: CursorStyle,
    hovered_layers: Vec<String>,
    pick_radius_px: f32,
    scroll_zoom_per_pixel: f64,
    attribution: String,
    removed: bool,
}

impl CanvasMap {
    /// Erstellt die Engine mit Startansicht und Optionen.
    pub fn new(options: &AppOptions) -> Self {
        Self {
            camera: MapCamera::from_viewport(&options.initial_viewport),
            container: ViewportBox::default(),
            images: HashMap::new(),
            textures: HashMap::new(),
            sources: HashMap::new(),
            layers: Vec::new(),
            cursor: CursorStyle::Default,
            hovered_layers: Vec::new(),
            pick_radius_px: options.pick_radius_px,
            scroll_zoom_per_pixel: options.scroll_zoom_per_pixel,
            attribution: format!("© Mapbox © OpenStreetMap | {}", options.map_style),
            removed: false,
        }
    }

    /// Aktueller, ungerundeter Viewport.
    pub fn viewport(&self) -> Viewport {
        self.camera.viewport()
    }

    /// Geokoordinate → Bildschirmposition innerhalb von `rect`.
    pub fn to_screen(&self, rect: egui::Rect, lng_lat: LngLat) -> egui::Pos2 {
        let p = self.camera.lnglat_to_screen(lng_lat, self.container);
        rect.min + egui::vec2(p.x, p.y)
    }

    /// Oberkante des Icons eines Layers über einer Koordinate (Bildschirm).
    pub fn icon_top(&self, rect: egui::Rect, layer: &str, lng_lat: LngLat) -> egui::Pos2 {
        let pos = self.to_screen(rect, lng_lat);
        match self.layers.iter().find(|l| l.id == layer) {
            Some(l) if l.icon_anchor == IconAnchor::Bottom => {
                pos - egui::vec2(0.0, self.icon_height(l))
            }
            Some(l) => pos - egui::vec2(0.0, self.icon_height(l) * 0.5),
            None => pos,
        }
    }

    /// Zeichnet die Karte, verarbeitet Eingaben und liefert die Engine-Events.
    pub fn show(&mut self, ui: &mut egui::Ui) -> (egui::Response, Vec<MapEvent>) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        self.container = ViewportBox::new(rect.width(), rect.height());

        if self.removed {
            return (response, Vec::new());
        }

        let mut events = Vec::new();
        self.handle_pan_zoom(ui, &response, &mut events);
        self.handle_hover(&response, &mut events);
        self.handle_clicks(&response, &mut events);

        if self.cursor == CursorStyle::Pointer && response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        self.paint(ui, rect);
        (response, events)
    }

    fn local_pixel(response: &egui::Response, pos: egui::Pos2) -> Vec2 {
        let local = pos - response.rect.min;
        Vec2::new(local.x, local.y)
    }

    fn click_point(&self, pixel: Vec2) -> ClickPoint {
        ClickPoint {
            pixel,
            lng_lat: self.camera.screen_to_lnglat(pixel, self.container),
        }
    }

    fn handle_pan_zoom(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<MapEvent>,
    ) {
        let drag = response.drag_delta();
        if response.dragged_by(egui::PointerButton::Primary) && drag != egui::Vec2::ZERO {
            self.camera.pan_pixels(Vec2::new(drag.x, drag.y));
            events.push(MapEvent::Move);
        }

        if !response.hovered() {
            return;
        }
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }
        let focus = response
            .hover_pos()
            .map(|pos| Self::local_pixel(response, pos))
            .unwrap_or_else(|| self.container.center());
        self.camera.zoom_around(
            f64::from(scroll) * self.scroll_zoom_per_pixel,
            focus,
            self.container,
        );
        events.push(MapEvent::Move);
    }

    fn handle_hover(&mut self, response: &egui::Response, events: &mut Vec<MapEvent>) {
        let pointer = response
            .hover_pos()
            .map(|pos| Self::local_pixel(response, pos));

        let layer_ids: Vec<String> = self.layers.iter().map(|l| l.id.clone()).collect();
        for layer in layer_ids {
            let over = pointer
                .map(|pixel| !self.query_rendered_features(pixel, &layer).is_empty())
                .unwrap_or(false);
            let was_over = self.hovered_layers.contains(&layer);

            if over && !was_over {
                self.hovered_layers.push(layer.clone());
                events.push(MapEvent::MouseEnter { layer });
            } else if !over && was_over {
                self.hovered_layers.retain(|l| l != &layer);
                events.push(MapEvent::MouseLeave { layer });
            }
        }
    }

    fn handle_clicks(&self, response: &egui::Response, events: &mut Vec<MapEvent>) {
        let Some(pos) = response.interact_pointer_pos().or_else(|| response.hover_pos()) else {
            return;
        };
        let pixel = Self::local_pixel(response, pos);

        if response.secondary_clicked() {
            events.push(MapEvent::ContextMenu(self.click_point(pixel)));
        } else if response.clicked() {
            events.push(MapEvent::Click(self.click_point(pixel)));
        }
    }

    fn paint(&mut self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.paint_graticule(&painter, rect);

        for layer in &self.layers {
            let Some(source) = self.sources.get(&layer.source) else {
                continue;
            };
            let texture = self.textures.get(&layer.icon_image);
            let icon_size = self
                .images
                .get(&layer.icon_image)
                .map(|icon| egui::vec2(icon.width as f32, icon.height as f32))
                .unwrap_or(egui::Vec2::ZERO);

            for feature in source.features() {
                let pos = self.to_screen(rect, feature.lng_lat());
                if !rect.expand(icon_size.max_elem()).contains(pos) {
                    continue;
                }
                if let Some(texture) = texture {
                    let icon_rect = match layer.icon_anchor {
                        IconAnchor::Bottom => egui::Rect::from_min_size(
                            pos - egui::vec2(icon_size.x * 0.5, icon_size.y),
                            icon_size,
                        ),
                        IconAnchor::Center => egui::Rect::from_center_size(pos, icon_size),
                    };
                    painter.image(
                        texture.id(),
                        icon_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                if let Some(text) = label_text(feature, &layer.text_field) {
                    paint_label(&painter, layer, pos, &text);
                }
            }
        }

        painter.text(
            rect.right_bottom() + egui::vec2(-6.0, -4.0),
            egui::Align2::RIGHT_BOTTOM,
            &self.attribution,
            egui::FontId::proportional(10.0),
            egui::Color32::from_gray(90),
        );
        self.upload_pending_textures(ui.ctx());
    }

    fn paint_graticule(&self, painter: &egui::Painter, rect: egui::Rect) {
        let step = graticule_step(self.camera.zoom);
        let stroke = egui::Stroke::new(1.0, GRID);
        let top_left = self.camera.screen_to_lnglat(Vec2::ZERO, self.container);
        let bottom_right = self.camera.screen_to_lnglat(
            Vec2::new(self.container.width, self.container.height),
            self.container,
        );

        let mut lng = (top_left.lng / step).floor() * step;
        while lng <= bottom_right.lng {
            let x = self.to_screen(rect, LngLat::new(lng, top_left.lat)).x;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
            lng += step;
        }
        let mut lat = (bottom_right.lat / step).floor() * step;
        while lat <= top_left.lat {
            let y = self.to_screen(rect, LngLat::new(top_left.lng, lat)).y;
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
            lat += step;
        }
    }

    fn upload_pending_textures(&mut self, ctx: &egui::Context) {
        for (name, icon) in &self.images {
            if self.textures.contains_key(name) {
                continue;
            }
            let image = egui::ColorImage::from_rgba_unmultiplied(icon.size(), &icon.rgba);
            let handle = ctx.load_texture(name.clone(), image, egui::TextureOptions::LINEAR);
            self.textures.insert(name.clone(), handle);
            ctx.request_repaint();
        }
    }

    fn icon_height(&self, layer: &SymbolLayer) -> f32 {
        self.images
            .get(&layer.icon_image)
            .map(|icon| icon.height as f32)
            .unwrap_or(0.0)
    }
}

/// Rasterabstand in Grad passend zum Zoom.
fn graticule_step(zoom: f64) -> f64 {
    match zoom {
        z if z < 3.0 => 30.0,
        z if z < 6.0 => 5.0,
        z if z < 9.0 => 1.0,
        z if z < 12.0 => 0.1,
        z if z < 15.0 => 0.01,
        _ => 0.001,
    }
}

fn label_text(feature: &Feature, field: &str) -> Option<String> {
    match field {
        "title" => feature.title().map(str::to_string),
        other => feature
            .properties
            .extra
            .get(other)
            .and_then(|v| v.as_str())
            .map(str::to_string),
    }
}

fn paint_label(painter: &egui::Painter, layer: &SymbolLayer, anchor: egui::Pos2, text: &str) {
    let font = egui::FontId::proportional(layer.text_size);
    let pos = anchor
        + egui::vec2(
            layer.text_offset[0] * layer.text_size,
            layer.text_offset[1] * layer.text_size,
        );
    let [r, g, b, a] = layer.text_halo_color;
    let halo = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
    let w = layer.text_halo_width;
    for offset in [
        egui::vec2(-w, 0.0),
        egui::vec2(w, 0.0),
        egui::vec2(0.0, -w),
        egui::vec2(0.0, w),
    ] {
        painter.text(pos + offset, egui::Align2::CENTER_TOP, text, font.clone(), halo);
    }
    let [r, g, b, a] = layer.text_color;
    painter.text(
        pos,
        egui::Align2::CENTER_TOP,
        text,
        font,
        egui::Color32::from_rgba_unmultiplied(r, g, b, a),
    );
}

impl MapEngine for CanvasMap {
    fn container_box(&self) -> ViewportBox {
        self.container
    }

    fn center(&self) -> LngLat {
        self.camera.center
    }

    fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    fn add_image(&mut self, name: &str, icon: MarkerIcon) -> Result<()> {
        if self.images.contains_key(name) {
            bail!("Bild '{}' ist bereits registriert", name);
        }
        self.images.insert(name.to_string(), icon);
        Ok(())
    }

    fn add_source(&mut self, id: &str, data: FeatureCollection) -> Result<()> {
        if self.sources.contains_key(id) {
            bail!("Quelle '{}' ist bereits registriert", id);
        }
        self.sources.insert(id.to_string(), PointSource::new(data));
        Ok(())
    }

    fn upsert_feature(&mut self, source: &str, feature: Feature) -> Result<()> {
        let Some(points) = self.sources.get_mut(source) else {
            bail!("Quelle '{}' nicht gefunden", source);
        };
        points.upsert(feature);
        Ok(())
    }

    fn add_layer(&mut self, layer: SymbolLayer) -> Result<()> {
        if !self.sources.contains_key(&layer.source) {
            bail!(
                "Layer '{}' verweist auf unbekannte Quelle '{}'",
                layer.id,
                layer.source
            );
        }
        if !self.images.contains_key(&layer.icon_image) {
            bail!(
                "Layer '{}' verweist auf unbekanntes Bild '{}'",
                layer.id,
                layer.icon_image
            );
        }
        self.layers.retain(|l| l.id != layer.id);
        self.layers.push(layer);
        Ok(())
    }

    fn query_rendered_features(&self, pixel: Vec2, layer: &str) -> Vec<Feature> {
        let Some(layer) = self.layers.iter().find(|l| l.id == layer) else {
            return Vec::new();
        };
        let Some(source) = self.sources.get(&layer.source) else {
            return Vec::new();
        };

        // Bodenverankerte Icons liegen oberhalb der Koordinate.
        let target = match layer.icon_anchor {
            IconAnchor::Bottom => pixel + Vec2::new(0.0, self.icon_height(layer) * 0.5),
            IconAnchor::Center => pixel,
        };
        let query = self
            .camera
            .screen_to_lnglat(target, self.container)
            .to_mercator();
        let radius = f64::from(self.pick_radius_px) / self.camera.world_size();

        source
            .within_radius(query, radius)
            .into_iter()
            .cloned()
            .collect()
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }

    fn remove(&mut self) {
        self.removed = true;
        self.layers.clear();
        self.sources.clear();
        self.images.clear();
        self.textures.clear();
        self.hovered_layers.clear();
        self.cursor = CursorStyle::Default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NewPoint;
    use crate::map::{MARKER_IMAGE, POINTS_LAYER, POINTS_SOURCE};

    fn icon() -> MarkerIcon {
        MarkerIcon {
            width: 2,
            height: 20,
            rgba: vec![255; 2 * 20 * 4],
        }
    }

    fn feature(id: &str, lng: f64, lat: f64) -> Feature {
        Feature::from_new_point(
            id,
            &NewPoint {
                title: format!("P{id}"),
                category: String::new(),
                point_type: String::new(),
                group_id: String::new(),
                lng,
                lat,
            },
        )
    }

    fn mounted_canvas() -> CanvasMap {
        let mut map = CanvasMap::new(&AppOptions::default());
        map.container = ViewportBox::new(800.0, 600.0);
        map.add_image(MARKER_IMAGE, icon()).expect("Bild registriert");
        map.add_source(POINTS_SOURCE, FeatureCollection::empty())
            .expect("Quelle registriert");
        map.add_layer(SymbolLayer::points()).expect("Layer registriert");
        map
    }

    #[test]
    fn layer_requires_source_and_image() {
        let mut map = CanvasMap::new(&AppOptions::default());

        assert!(map.add_layer(SymbolLayer::points()).is_err());
        map.add_source(POINTS_SOURCE, FeatureCollection::empty())
            .expect("Quelle registriert");
        assert!(map.add_layer(SymbolLayer::points()).is_err());
    }

    #[test]
    fn query_hits_icon_above_the_coordinate() {
        let mut map = mounted_canvas();
        let center = map.center();
        map.upsert_feature(POINTS_SOURCE, feature("1", center.lng, center.lat))
            .expect("Quelle vorhanden");

        let coordinate_px = map.container.center();
        let icon_center = coordinate_px - Vec2::new(0.0, 10.0);

        let hits = map.query_rendered_features(icon_center, POINTS_LAYER);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert!(map
            .query_rendered_features(icon_center + Vec2::new(100.0, 0.0), POINTS_LAYER)
            .is_empty());
        assert!(map.query_rendered_features(icon_center, "other").is_empty());
    }

    #[test]
    fn remove_releases_everything() {
        let mut map = mounted_canvas();
        map.set_cursor(CursorStyle::Pointer);

        map.remove();

        assert!(map.layers.is_empty());
        assert!(map.sources.is_empty());
        assert_eq!(map.cursor, CursorStyle::Default);
        assert!(map
            .query_rendered_features(map.container.center(), POINTS_LAYER)
            .is_empty());
    }
}
