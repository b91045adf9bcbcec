//! Karten-Schicht: Engine-Abstraktion, Event-Bindings, Koordinator und egui-Canvas.

pub mod canvas;
pub mod coordinator;
pub mod engine;
pub mod events;

pub use canvas::CanvasMap;
pub use coordinator::MapCoordinator;
pub use engine::{
    CursorStyle, IconAnchor, MapEngine, SymbolLayer, MARKER_IMAGE, POINTS_LAYER, POINTS_SOURCE,
};
pub use events::{EventBindings, HandlerContext, MapEvent, MapEventKind, MapHandler};
