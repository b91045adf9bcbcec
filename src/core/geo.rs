//! Geokoordinaten, Viewport und Web-Mercator-Kamera.

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Kachelgröße der Web-Mercator-Projektion in Pixel (Mapbox-Konvention).
pub const TILE_SIZE: f64 = 512.0;
/// Maximale Breite, die Web-Mercator darstellen kann.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Geographische Position in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LngLat {
    /// Längengrad (-180..180)
    pub lng: f64,
    /// Breitengrad (-90..90)
    pub lat: f64,
}

impl LngLat {
    /// Erstellt eine neue Position.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Projiziert in normalisierte Mercator-Koordinaten (0..1, y nach unten).
    pub fn to_mercator(self) -> DVec2 {
        let lat = self.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (self.lng + 180.0) / 360.0;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
        DVec2::new(x, y)
    }

    /// Rückprojektion aus normalisierten Mercator-Koordinaten.
    pub fn from_mercator(m: DVec2) -> Self {
        let n = std::f64::consts::PI * (1.0 - 2.0 * m.y);
        Self {
            lng: m.x * 360.0 - 180.0,
            lat: n.sinh().atan().to_degrees(),
        }
    }
}

/// Rundet auf eine feste Anzahl Nachkommastellen.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Sichtbarer Kartenausschnitt: Mittelpunkt und Zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center_longitude: f64,
    pub center_latitude: f64,
    pub zoom: f64,
}

impl Viewport {
    /// Startansicht: Helsinki-Zentrum.
    pub const DEFAULT: Viewport = Viewport {
        center_longitude: 24.9454,
        center_latitude: 60.1655,
        zoom: 13.76,
    };

    /// Gerundete Kopie für die Anzeige (Länge/Breite 4, Zoom 2 Stellen).
    pub fn rounded(&self) -> Self {
        Self {
            center_longitude: round_to(self.center_longitude, 4),
            center_latitude: round_to(self.center_latitude, 4),
            zoom: round_to(self.zoom, 2),
        }
    }

    /// Mittelpunkt als `LngLat`.
    pub fn center(&self) -> LngLat {
        LngLat::new(self.center_longitude, self.center_latitude)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Breite und Höhe des Karten-Containers in Pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportBox {
    pub width: f32,
    pub height: f32,
}

impl ViewportBox {
    /// Erstellt eine Box aus Breite und Höhe.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Mittelpunkt der Box in Pixel.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Ereignis-Position eines Klicks: Pixel im Container plus Geokoordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickPoint {
    pub pixel: Vec2,
    pub lng_lat: LngLat,
}

/// Web-Mercator-Kamera mit Mittelpunkt und fraktionalem Zoom.
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Kartenmittelpunkt
    pub center: LngLat,
    /// Zoom-Level (Mapbox-Skala, 0 = ganze Welt in 512 px)
    pub zoom: f64,
}

impl MapCamera {
    /// Minimaler Zoom-Level.
    pub const ZOOM_MIN: f64 = 0.0;
    /// Maximaler Zoom-Level.
    pub const ZOOM_MAX: f64 = 22.0;

    /// Erstellt eine Kamera aus einem Viewport.
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            center: viewport.center(),
            zoom: viewport.zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Aktueller (ungerundeter) Viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            center_longitude: self.center.lng,
            center_latitude: self.center.lat,
            zoom: self.zoom,
        }
    }

    /// Weltgröße in Pixel beim aktuellen Zoom.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Konvertiert eine Geokoordinate in Container-Pixel.
    pub fn lnglat_to_screen(&self, lng_lat: LngLat, container: ViewportBox) -> Vec2 {
        let ws = self.world_size();
        let delta = (lng_lat.to_mercator() - self.center.to_mercator()) * ws;
        container.center() + Vec2::new(delta.x as f32, delta.y as f32)
    }

    /// Konvertiert Container-Pixel in eine Geokoordinate.
    pub fn screen_to_lnglat(&self, pixel: Vec2, container: ViewportBox) -> LngLat {
        let offset = pixel - container.center();
        let m = self.center.to_mercator() + offset.as_dvec2() / self.world_size();
        LngLat::from_mercator(m)
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Drag-Richtung).
    pub fn pan_pixels(&mut self, delta: Vec2) {
        let m = self.center.to_mercator() - delta.as_dvec2() / self.world_size();
        let mut center = LngLat::from_mercator(DVec2::new(m.x, m.y.clamp(0.0, 1.0)));
        center.lng = wrap_longitude(center.lng);
        self.center = center;
    }

    /// Ändert den Zoom um `delta` Stufen; die Position unter `focus` bleibt stabil.
    pub fn zoom_around(&mut self, delta: f64, focus: Vec2, container: ViewportBox) {
        let anchor = self.screen_to_lnglat(focus, container);
        self.zoom = (self.zoom + delta).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);

        let offset = (focus - container.center()).as_dvec2() / self.world_size();
        self.center = LngLat::from_mercator(anchor.to_mercator() - offset);
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::from_viewport(&Viewport::DEFAULT)
    }
}

fn wrap_longitude(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}
