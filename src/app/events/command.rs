use crate::api::AddPointOutcome;
use crate::app::state::Tab;
use crate::core::{Feature, LngLat, PopupAnchor, Viewport};

/// Mutierende App-Commands, ausgeführt vom Controller.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Karte als bereit markieren
    MarkMapReady,
    /// Viewport-Anzeige aktualisieren
    SetViewport { viewport: Viewport },
    /// Aktiven Tab wechseln
    SetActiveTab { tab: Tab },

    /// "Punkt hinzufügen"-Popup öffnen (ersetzt ein offenes)
    OpenAddPointPopup { lng_lat: LngLat, anchor: PopupAnchor },
    /// "Punkt hinzufügen"-Popup schließen
    CloseAddPointPopup,
    /// Formular validieren und bei Erfolg `addPoint` einreihen
    SubmitAddPoint,
    /// Antwort von `addPoint` verarbeiten
    FinishAddPoint {
        request_id: u64,
        outcome: AddPointOutcome,
    },

    /// Detail-Popup für ein Feature öffnen (ersetzt ein offenes)
    OpenFeaturePopup { feature: Feature },
    /// Detail-Popup schließen
    CloseFeaturePopup,
    /// Auswahl ersetzen
    SelectFeatures { features: Vec<Feature> },

    /// Benachrichtigung entfernen
    DismissNotification { id: u64 },
}
