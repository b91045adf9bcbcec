use crate::core::Viewport;

/// Aktiver Tab der Anwendung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Kartenansicht (Index 0)
    #[default]
    Map,
    /// Detailansicht des gewählten Punkts (Index 1)
    Point,
}

impl Tab {
    /// Beschriftung im Header.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::Point => "Point",
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Gerundeter Viewport für die Sidebar-Anzeige
    pub viewport: Viewport,
    /// Aktiver Tab
    pub active_tab: Tab,
    /// Karte fertig aufgebaut (Icon, Quelle und Layer registriert)
    pub map_ready: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand mit der Startansicht.
    pub fn new(initial_viewport: Viewport) -> Self {
        Self {
            viewport: initial_viewport.rounded(),
            active_tab: Tab::Map,
            map_ready: false,
        }
    }
}
