//! Zentrale Konfiguration der Fahrradparkplatz-Karte.
//!
//! `AppOptions` enthält alle von außen setzbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::anchor::POPUP_WIDTH_ESTIMATE;
use crate::core::Viewport;

// ── Remote-API ──────────────────────────────────────────────────────

/// Standard-GraphQL-Endpunkt (lokales Backend).
pub const DEFAULT_API_URL: &str = "http://localhost:7071/graphql";

// ── Karte ───────────────────────────────────────────────────────────

/// Standard-Marker-Icon.
pub const DEFAULT_MARKER_ICON: &str =
    "https://docs.mapbox.com/mapbox-gl-js/assets/custom_marker.png";
/// Standard-Kartenstil.
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v11";
/// Umgebungsvariable für den Karten-Access-Token.
pub const ENV_ACCESS_TOKEN: &str = "BIKE_MAP_ACCESS_TOKEN";
/// Umgebungsvariable für die Kartenstil-Referenz.
pub const ENV_MAP_STYLE: &str = "BIKE_MAP_STYLE";
/// Zoom-Stufen pro Scroll-Pixel.
pub const SCROLL_ZOOM_PER_PIXEL: f64 = 0.005;
/// Trefferradius für Feature-Abfragen in Pixel.
pub const PICK_RADIUS_PX: f32 = 14.0;

// ── UI ──────────────────────────────────────────────────────────────

/// Anzeigedauer von Benachrichtigungen in Sekunden.
pub const NOTIFICATION_SECONDS: f32 = 4.0;

/// Alle von außen konfigurierbaren Optionen.
/// Wird als `bicycle_parking_map.toml` neben der Binary gelesen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    /// GraphQL-Endpunkt für `addPoint`
    pub api_url: String,
    /// Access-Token des Kartenanbieters (wird nur durchgereicht)
    pub map_access_token: String,
    /// Stil-Referenz der Karte (wird nur durchgereicht)
    pub map_style: String,
    /// Marker-Icon: Dateipfad oder http(s)-URL
    pub marker_icon: String,
    /// Optionale GeoJSON-Datei mit vorhandenen Punkten
    pub points_file: Option<String>,
    /// Startansicht der Karte
    pub initial_viewport: Viewport,
    /// Geschätzte Popup-Breite für die Anker-Auswahl (Pixel)
    pub popup_width_estimate: f32,
    /// Zoom-Stufen pro Scroll-Pixel
    pub scroll_zoom_per_pixel: f64,
    /// Trefferradius für Klicks und Hover auf Marker (Pixel)
    pub pick_radius_px: f32,
    /// Anzeigedauer von Benachrichtigungen (Sekunden)
    pub notification_seconds: f32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            map_access_token: String::new(),
            map_style: DEFAULT_MAP_STYLE.to_string(),
            marker_icon: DEFAULT_MARKER_ICON.to_string(),
            points_file: None,
            initial_viewport: Viewport::DEFAULT,
            popup_width_estimate: POPUP_WIDTH_ESTIMATE,
            scroll_zoom_per_pixel: SCROLL_ZOOM_PER_PIXEL,
            pick_radius_px: PICK_RADIUS_PX,
            notification_seconds: NOTIFICATION_SECONDS,
        }
    }
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bicycle_parking_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bicycle_parking_map.toml")
    }

    /// Übernimmt Token und Stil aus der Umgebung, falls gesetzt.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_ACCESS_TOKEN).ok(),
            std::env::var(ENV_MAP_STYLE).ok(),
        );
    }

    /// Überschreibt Token/Stil mit nicht-leeren Werten.
    pub fn apply_overrides(&mut self, access_token: Option<String>, style: Option<String>) {
        if let Some(token) = access_token.filter(|t| !t.is_empty()) {
            self.map_access_token = token;
        }
        if let Some(style) = style.filter(|s| !s.is_empty()) {
            self.map_style = style;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: AppOptions = toml::from_str(
            r#"
            api_url = "https://example.org/graphql"
            popup_width_estimate = 320.0
            "#,
        )
        .expect("gültiges TOML");

        assert_eq!(opts.api_url, "https://example.org/graphql");
        assert_eq!(opts.popup_width_estimate, 320.0);
        assert_eq!(opts.marker_icon, DEFAULT_MARKER_ICON);
        assert_eq!(opts.initial_viewport, Viewport::DEFAULT);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut opts = AppOptions::default();
        opts.points_file = Some("points.geojson".to_string());

        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: AppOptions = toml::from_str(&text).expect("parsebar");

        assert_eq!(back, opts);
    }

    #[test]
    fn overrides_ignore_empty_values() {
        let mut opts = AppOptions::default();

        opts.apply_overrides(Some("pk.test".to_string()), Some(String::new()));

        assert_eq!(opts.map_access_token, "pk.test");
        assert_eq!(opts.map_style, DEFAULT_MAP_STYLE);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let opts = AppOptions::load_from_file(std::path::Path::new("/nonexistent/opts.toml"));

        assert_eq!(opts, AppOptions::default());
    }
}
