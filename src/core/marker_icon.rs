//! Marker-Icon-Loader (Datei oder HTTP-URL) für den Punkt-Layer.

use anyhow::{Context, Result};
use image::GenericImageView;

/// Dekodiertes Marker-Bild als RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub width: u32,
    pub height: u32,
    /// Pixel in Zeilenreihenfolge, 4 Byte pro Pixel
    pub rgba: Vec<u8>,
}

impl MarkerIcon {
    /// Lädt ein Icon von einer `http(s)://`-URL oder aus einer lokalen Datei.
    pub fn load(source: &str) -> Result<Self> {
        let bytes = if source.starts_with("http://") || source.starts_with("https://") {
            fetch(source)?
        } else {
            std::fs::read(source)
                .with_context(|| format!("Marker-Icon nicht gefunden: {}", source))?
        };

        let icon = Self::decode(&bytes)
            .with_context(|| format!("Fehler beim Dekodieren des Marker-Icons: {}", source))?;
        log::info!(
            "Marker-Icon geladen: {} ({}x{})",
            source,
            icon.width,
            icon.height
        );
        Ok(icon)
    }

    /// Dekodiert PNG/JPEG-Bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            rgba: image.to_rgba8().into_raw(),
        })
    }

    /// Größe in Pixel als `[w, h]`.
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    log::debug!("Lade Marker-Icon von {}", url);
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("Marker-Icon-Download fehlgeschlagen: {}", url))?
        .error_for_status()
        .with_context(|| format!("Marker-Icon-Server meldet Fehler: {}", url))?;
    Ok(response.bytes()?.to_vec())
}
