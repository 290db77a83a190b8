//! Handler für Kamera und View.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf die Startansicht des Tomogramms zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}
