//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Setzt die Kamera auf die Startansicht des geladenen Tomogramms.
///
/// Die Kamera blickt auf die Volumenmitte; Winkel und Zoom kommen aus den
/// Optionen. Der Viewer wird auf 3D-Darstellung geschaltet.
pub fn reset_view(state: &mut AppState) {
    state.view.ndisplay = 3;
    let Some(layer) = state.layer.as_ref() else {
        state.view.camera = Default::default();
        return;
    };

    let bounding_box = layer.extent();
    state.view.camera.reset_to(
        &bounding_box,
        state.options.camera_angles_vec(),
        state.options.camera_zoom,
    );
    log::debug!(
        "Kamera zurückgesetzt: Zentrum {:?}, Zoom {}",
        state.view.camera.center,
        state.view.camera.zoom
    );
}
