//! Bicycle Parking Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod api;
pub mod app;
pub mod core;
pub mod map;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Tab, ViewState};
pub use core::{
    select_anchor, Feature, FeatureCollection, LngLat, PopupAnchor, Viewport, ViewportBox,
};
pub use map::{CanvasMap, MapCoordinator, MapEngine};
pub use shared::AppOptions;
