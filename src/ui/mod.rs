//! UI-Komponenten: Header, Sidebar, Popups, Punkt-Tab, Benachrichtigungen.

mod header;
mod notifications;
mod point_tab;
/// Karten-Popups
///
/// Formular "Punkt hinzufügen" und Detail-Popup, positioniert über ihren Anker.
pub mod popups;
pub mod status;

pub use header::{render_header, APP_TITLE};
pub use notifications::render_notifications;
pub use point_tab::render_point_tab;
pub use popups::{show_add_point_popup, show_feature_popup};
pub use status::{render_status_bar, render_viewport_sidebar};
