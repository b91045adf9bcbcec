//! Karten-Events und Binding-Tabelle (Event → Handler).

use crate::app::AppIntent;
use crate::core::ClickPoint;
use crate::shared::AppOptions;

use super::MapEngine;

/// Art eines Karten-Events, Schlüssel der Binding-Tabelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapEventKind {
    Load,
    MouseEnter,
    MouseLeave,
    ContextMenu,
    Click,
    Move,
}

impl MapEventKind {
    /// Event-Name wie in Mapbox (`load`, `mouseenter`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            MapEventKind::Load => "load",
            MapEventKind::MouseEnter => "mouseenter",
            MapEventKind::MouseLeave => "mouseleave",
            MapEventKind::ContextMenu => "contextmenu",
            MapEventKind::Click => "click",
            MapEventKind::Move => "move",
        }
    }
}

/// Von der Engine gemeldetes Ereignis.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Load,
    /// Zeiger betritt Features eines Layers
    MouseEnter { layer: String },
    /// Zeiger verlässt Features eines Layers
    MouseLeave { layer: String },
    ContextMenu(ClickPoint),
    Click(ClickPoint),
    Move,
}

impl MapEvent {
    pub fn kind(&self) -> MapEventKind {
        match self {
            MapEvent::Load => MapEventKind::Load,
            MapEvent::MouseEnter { .. } => MapEventKind::MouseEnter,
            MapEvent::MouseLeave { .. } => MapEventKind::MouseLeave,
            MapEvent::ContextMenu(_) => MapEventKind::ContextMenu,
            MapEvent::Click(_) => MapEventKind::Click,
            MapEvent::Move => MapEventKind::Move,
        }
    }

    /// Layer, auf den sich das Event bezieht (nur Hover-Events).
    pub fn layer(&self) -> Option<&str> {
        match self {
            MapEvent::MouseEnter { layer } | MapEvent::MouseLeave { layer } => Some(layer),
            _ => None,
        }
    }
}

/// Laufzeitkontext eines Handlers: Engine, Optionen und Intent-Ausgabe.
pub struct HandlerContext<'a> {
    pub engine: &'a mut dyn MapEngine,
    pub options: &'a AppOptions,
    pub intents: &'a mut Vec<AppIntent>,
}

/// Handler-Signatur der Binding-Tabelle.
pub type MapHandler = fn(&mut HandlerContext<'_>, &MapEvent) -> anyhow::Result<()>;

struct Binding {
    kind: MapEventKind,
    layer: Option<String>,
    handler: MapHandler,
}

/// Explizite Tabelle aller registrierten Event-Handler.
#[derive(Default)]
pub struct EventBindings {
    bindings: Vec<Binding>,
}

impl EventBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindet einen Handler an alle Events einer Art.
    pub fn on(&mut self, kind: MapEventKind, handler: MapHandler) {
        self.bindings.push(Binding {
            kind,
            layer: None,
            handler,
        });
    }

    /// Bindet einen Handler an Events einer Art auf einem bestimmten Layer.
    pub fn on_layer(&mut self, kind: MapEventKind, layer: &str, handler: MapHandler) {
        self.bindings.push(Binding {
            kind,
            layer: Some(layer.to_string()),
            handler,
        });
    }

    /// Alle Handler, die auf ein Event passen, in Registrierungsreihenfolge.
    pub fn handlers_for(&self, event: &MapEvent) -> Vec<MapHandler> {
        let kind = event.kind();
        self.bindings
            .iter()
            .filter(|b| b.kind == kind)
            .filter(|b| match b.layer.as_deref() {
                Some(layer) => event.layer() == Some(layer),
                None => true,
            })
            .map(|b| b.handler)
            .collect()
    }

    /// Gibt `true` zurück, wenn für die Art ein Handler registriert ist.
    pub fn is_bound(&self, kind: MapEventKind) -> bool {
        self.bindings.iter().any(|b| b.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Entfernt alle Bindings.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut HandlerContext<'_>, _: &MapEvent) -> anyhow::Result<()> {
        Ok(())
    }

    #[test]
    fn layer_bindings_only_match_their_layer() {
        let mut bindings = EventBindings::new();
        bindings.on_layer(MapEventKind::MouseEnter, "points", noop);
        bindings.on(MapEventKind::Move, noop);

        let on_points = MapEvent::MouseEnter {
            layer: "points".to_string(),
        };
        let on_other = MapEvent::MouseEnter {
            layer: "roads".to_string(),
        };

        assert_eq!(bindings.handlers_for(&on_points).len(), 1);
        assert!(bindings.handlers_for(&on_other).is_empty());
        assert_eq!(bindings.handlers_for(&MapEvent::Move).len(), 1);
        assert!(bindings.handlers_for(&MapEvent::Load).is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut bindings = EventBindings::new();
        bindings.on(MapEventKind::Load, noop);
        assert!(bindings.is_bound(MapEventKind::Load));

        bindings.clear();

        assert!(bindings.is_empty());
        assert!(!bindings.is_bound(MapEventKind::Load));
    }
}
