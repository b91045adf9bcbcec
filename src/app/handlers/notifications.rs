//! Handler für Snackbar-Benachrichtigungen.

use crate::app::use_cases;
use crate::app::AppState;

pub fn dismiss(state: &mut AppState, id: u64) {
    use_cases::notifications::dismiss(state, id);
}
