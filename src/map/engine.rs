//! Schnittstelle zur Karten-Engine und Layer-Beschreibung.

use glam::Vec2;

use crate::core::{Feature, FeatureCollection, LngLat, MarkerIcon, ViewportBox};

/// Name der Punktquelle.
pub const POINTS_SOURCE: &str = "points";
/// Name des Symbol-Layers der Punkte.
pub const POINTS_LAYER: &str = "points";
/// Name des registrierten Marker-Bilds.
pub const MARKER_IMAGE: &str = "custom-marker";

/// Mauszeiger über der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

/// Welcher Punkt des Icons auf der Koordinate liegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAnchor {
    Center,
    Bottom,
}

/// Symbol-Layer: Icon plus Textbeschriftung pro Feature.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolLayer {
    pub id: String,
    pub source: String,
    pub icon_image: String,
    pub icon_anchor: IconAnchor,
    /// Property, deren Wert als Beschriftung dient
    pub text_field: String,
    /// Versatz der Beschriftung in `em` relativ zur Koordinate
    pub text_offset: [f32; 2],
    pub text_size: f32,
    pub text_color: [u8; 4],
    pub text_halo_color: [u8; 4],
    pub text_halo_width: f32,
}

impl SymbolLayer {
    /// Layer `points`: Marker unten verankert, Titel weiß mit schwarzem Rand darunter.
    pub fn points() -> Self {
        Self {
            id: POINTS_LAYER.to_string(),
            source: POINTS_SOURCE.to_string(),
            icon_image: MARKER_IMAGE.to_string(),
            icon_anchor: IconAnchor::Bottom,
            text_field: "title".to_string(),
            text_offset: [0.0, 1.25],
            text_size: 12.0,
            text_color: [255, 255, 255, 255],
            text_halo_color: [0, 0, 0, 255],
            text_halo_width: 1.0,
        }
    }
}

/// Primitive einer Karten-Engine, wie sie der Koordinator benötigt.
pub trait MapEngine {
    /// Größe des Karten-Containers in Pixel.
    fn container_box(&self) -> ViewportBox;
    /// Aktueller Kartenmittelpunkt.
    fn center(&self) -> LngLat;
    /// Aktueller Zoom.
    fn zoom(&self) -> f64;

    /// Registriert ein Bild unter einem Namen.
    fn add_image(&mut self, name: &str, icon: MarkerIcon) -> anyhow::Result<()>;
    /// Registriert eine GeoJSON-Quelle.
    fn add_source(&mut self, id: &str, data: FeatureCollection) -> anyhow::Result<()>;
    /// Fügt ein Feature in eine bestehende Quelle ein.
    fn upsert_feature(&mut self, source: &str, feature: Feature) -> anyhow::Result<()>;
    /// Registriert einen Layer über einer Quelle.
    fn add_layer(&mut self, layer: SymbolLayer) -> anyhow::Result<()>;

    /// Gerenderte Features eines Layers unter einem Container-Pixel, nächstes zuerst.
    fn query_rendered_features(&self, pixel: Vec2, layer: &str) -> Vec<Feature>;
    /// Setzt den Mauszeiger.
    fn set_cursor(&mut self, cursor: CursorStyle);
    /// Gibt alle Engine-Ressourcen frei.
    fn remove(&mut self);
}
