//! Handler für Schnittebene: Modus, Dicke, Drag-Geste und Achsen-Ausrichtung.

use crate::app::events::ViewerCursor;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PlaneAxis;
use crate::shared::RenderingMode;

/// Setzt den Rendering-Modus.
pub fn set_rendering_mode(state: &mut AppState, mode: RenderingMode) {
    use_cases::plane_state::set_rendering_mode(state, mode);
}

/// Setzt die Schichtdicke und propagiert Validierungsfehler.
pub fn set_thickness(state: &mut AppState, thickness: f32) -> anyhow::Result<()> {
    use_cases::plane_state::set_plane_thickness(state, thickness)
}

/// Setzt die Sichtbarkeit des Volumen-Layers.
pub fn set_layer_visibility(state: &mut AppState, visible: bool) {
    use_cases::plane_state::set_layer_visibility(state, visible);
}

/// Startet die Drag-Geste.
pub fn begin_drag(state: &mut AppState, cursor: &ViewerCursor) {
    use_cases::plane_drag::begin_plane_drag(state, cursor);
}

/// Führt die Ebene während der Geste nach.
pub fn update_drag(state: &mut AppState, cursor: &ViewerCursor) {
    use_cases::plane_drag::update_plane_drag(state, cursor);
}

/// Beendet die Drag-Geste.
pub fn end_drag(state: &mut AppState) {
    use_cases::plane_drag::end_plane_drag(state);
}

/// Richtet die Ebene auf eine Achse aus.
pub fn align_to_axis(state: &mut AppState, axis: PlaneAxis, cursor: &ViewerCursor) {
    use_cases::axis_snap::align_plane_to_axis(state, axis, cursor);
}
