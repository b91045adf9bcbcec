//! Application State: zentrale Datenhaltung.
//!
//! Geteilter UI-Zustand (Viewport, Tab, Selektion, Popups, Benachrichtigungen)
//! liegt explizit im `AppState` und wird nur über Command-Handler verändert.

mod app_state;
mod notifications;
mod popups;
mod selection;
mod submissions;
mod view;

pub use app_state::AppState;
pub use notifications::{Notification, NotificationState, Severity};
pub use popups::{AddPointPopup, FeaturePopup, PopupState};
pub use selection::SelectionState;
pub use submissions::SubmissionState;
pub use view::{Tab, ViewState};
