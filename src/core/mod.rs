//! Core-Domänentypen: Geokoordinaten, Popup-Anker, Features, Formular, Punktquelle.

pub mod anchor;
pub mod feature;
pub mod form;
/// Geokoordinaten und Web-Mercator-Projektion
///
/// Dieses Modul definiert Viewport, Klickpunkt und die Kamera,
/// mit der Pixel und Geokoordinaten ineinander umgerechnet werden.
pub mod geo;
pub mod marker_icon;
pub mod point_source;

pub use anchor::{select_anchor, select_anchor_with_width, PopupAnchor};
pub use feature::{Feature, FeatureCollection, FeatureProperties, PointGeometry};
pub use form::{FieldErrors, NewPoint, PointFormFields};
pub use geo::{ClickPoint, LngLat, MapCamera, Viewport, ViewportBox};
pub use marker_icon::MarkerIcon;
pub use point_source::PointSource;
