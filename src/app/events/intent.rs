use crate::api::AddPointOutcome;
use crate::app::state::Tab;
use crate::core::{Feature, LngLat, PopupAnchor, Viewport};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/Karte/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Karte fertig aufgebaut (`load` abgeschlossen)
    MapReady,
    /// Karte wurde bewegt (gerundeter Viewport)
    ViewportMoved { viewport: Viewport },
    /// Tab im Header gewählt
    TabSelected { tab: Tab },

    /// Rechtsklick: "Punkt hinzufügen"-Popup öffnen
    AddPointPopupRequested { lng_lat: LngLat, anchor: PopupAnchor },
    /// Formular im "Punkt hinzufügen"-Popup abgeschickt
    AddPointSubmitted,
    /// "Punkt hinzufügen"-Popup ohne Speichern geschlossen
    AddPointPopupClosed,
    /// Antwort der `addPoint`-Mutation eingetroffen
    AddPointCompleted {
        request_id: u64,
        outcome: AddPointOutcome,
    },

    /// Linksklick auf ein Feature: Detail-Popup öffnen
    FeaturePopupRequested { feature: Feature },
    /// "more" im Detail-Popup: Feature auswählen und Detail-Tab zeigen
    FeatureDetailsRequested,
    /// Detail-Popup geschlossen
    FeaturePopupClosed,
    /// Linksklick auf leere Kartenfläche: offene Popups schließen
    EmptyMapClicked,

    /// Benachrichtigung vom Nutzer weggeklickt
    NotificationDismissed { id: u64 },
    /// Anzeigedauer einer Benachrichtigung abgelaufen
    NotificationExpired { id: u64 },
}
