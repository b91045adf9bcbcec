use crate::core::{Feature, FieldErrors, LngLat, PointFormFields, PopupAnchor};

/// Transientes "Punkt hinzufügen"-Popup mit eigenem Formularzustand.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPointPopup {
    /// Eindeutige Popup-ID (neue ID pro Öffnung)
    pub id: u64,
    /// Referenzpunkt auf der Karte
    pub lng_lat: LngLat,
    /// Anker relativ zum Referenzpunkt
    pub anchor: PopupAnchor,
    /// Formularfelder
    pub fields: PointFormFields,
    /// Inline-Fehler der letzten Validierung
    pub errors: FieldErrors,
    /// Laufende `addPoint`-Anfrage (blockiert weitere Submits)
    pub pending_request: Option<u64>,
}

impl AddPointPopup {
    /// Öffnet ein Popup mit vorbelegten Koordinaten.
    pub fn new(id: u64, lng_lat: LngLat, anchor: PopupAnchor) -> Self {
        Self {
            id,
            lng_lat,
            anchor,
            fields: PointFormFields::seeded(lng_lat),
            errors: FieldErrors::default(),
            pending_request: None,
        }
    }

    /// Gibt `true` zurück, solange eine Anfrage läuft.
    pub fn is_submitting(&self) -> bool {
        self.pending_request.is_some()
    }
}

/// Detail-Popup für ein angeklicktes Feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePopup {
    pub id: u64,
    pub feature: Feature,
}

impl FeaturePopup {
    /// Referenzpunkt des Popups (Feature-Koordinate).
    pub fn lng_lat(&self) -> LngLat {
        self.feature.lng_lat()
    }
}

/// Offene Popups: höchstens eines pro Art.
#[derive(Debug, Clone, Default)]
pub struct PopupState {
    pub add_point: Option<AddPointPopup>,
    pub feature: Option<FeaturePopup>,
    next_id: u64,
}

impl PopupState {
    /// Vergibt die nächste Popup-ID.
    pub fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
