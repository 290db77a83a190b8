//! Handler für Öffnen und Schließen von Tomogrammen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Volume;
use std::sync::Arc;

/// Lädt ein Tomogramm aus dem übergebenen Pfad.
pub fn open(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::open_tomogram(state, path)
}

/// Zeigt ein bereits geladenes Volumen an.
pub fn add_volume(state: &mut AppState, name: String, volume: Arc<Volume>) {
    use_cases::file_io::add_volume_layer(state, name, volume);
}

/// Schließt das aktuelle Tomogramm.
pub fn close(state: &mut AppState) {
    use_cases::file_io::close_tomogram(state);
}
