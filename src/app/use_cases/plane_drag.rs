//! Use-Case-Funktionen für das Verschieben der Schnittebene per Maus.
//!
//! Ablauf: Klick auf die Ebene startet die Geste (Kamera-Interaktion aus),
//! jede Mausbewegung verschiebt die Ebene entlang ihrer Normalen, jedes
//! andere Ereignis beendet die Geste (Kamera-Interaktion wieder an).

use super::plane_state::enabled_plane_layer;
use crate::app::events::ViewerCursor;
use crate::app::state::{DragGesture, PlaneDragState};
use crate::app::AppState;
use crate::core::geometry;

/// Startet eine Drag-Geste, wenn der Klick die Schnittebene innerhalb des Volumens trifft.
///
/// Gibt `true` zurück, wenn die Geste gestartet wurde.
pub fn begin_plane_drag(state: &mut AppState, cursor: &ViewerCursor) -> bool {
    if state.interaction.is_dragging() {
        log::debug!("Drag-Start ignoriert: Geste läuft bereits");
        return false;
    }
    let epsilon = state.options.bounding_box_epsilon;

    let Some(layer) = enabled_plane_layer(state.layer.as_mut()) else {
        return false;
    };
    if !layer.visible {
        return false;
    }

    let Some((near_point, _far_point)) =
        layer.ray_intersections(cursor.position, cursor.view_direction, &cursor.dims_displayed)
    else {
        return false;
    };

    // Schnittpunkt des Klick-Strahls mit der Ebene muss im Volumen liegen
    let Some(hit) = layer.plane.intersect_with_line(near_point, cursor.view_direction) else {
        return false;
    };
    if !geometry::point_in_bounding_box(hit, &layer.extent(), epsilon) {
        return false;
    }

    let gesture = DragGesture {
        original_plane_position: layer.plane.position(),
        start_pointer_position: cursor.position,
    };
    layer.interactive = false;
    state.interaction.drag = PlaneDragState::Dragging(gesture);

    log::debug!("Ebenen-Drag gestartet bei {:?}", hit);
    true
}

/// Führt die Ebene während einer laufenden Geste nach.
///
/// Die Mausbewegung wird auf die Ebenen-Normale projiziert und die neue
/// Position auf die Anzeige-Box des Volumens begrenzt. Wurde die Ebene
/// inzwischen deaktiviert, endet die Geste.
pub fn update_plane_drag(state: &mut AppState, cursor: &ViewerCursor) {
    let Some(gesture) = state.interaction.gesture() else {
        return;
    };

    let plane_enabled = state
        .layer
        .as_ref()
        .is_some_and(|layer| layer.plane.enabled());
    if !plane_enabled {
        end_plane_drag(state);
        return;
    }

    let Some(layer) = enabled_plane_layer(state.layer.as_mut()) else {
        return;
    };
    let Some(display_box) = layer.display_bounding_box(&cursor.dims_displayed) else {
        return;
    };

    let normal = layer.plane.normal();
    let distance = geometry::project_drag_onto_axis(
        gesture.start_pointer_position,
        cursor.position,
        cursor.view_direction,
        normal,
    );
    let updated = gesture.original_plane_position + normal * distance;
    let clamped = geometry::clamp_point_to_bounding_box(updated, &display_box);

    layer.plane.set_position(clamped);
}

/// Beendet die Geste und gibt die Kamera-Interaktion wieder frei.
///
/// Stellt `interactive` auch ohne laufende Geste wieder her.
pub fn end_plane_drag(state: &mut AppState) {
    let was_dragging = state.interaction.is_dragging();
    state.interaction.drag = PlaneDragState::Idle;

    if let Some(layer) = state.layer.as_mut() {
        layer.interactive = true;
        if was_dragging {
            log::debug!("Ebenen-Drag beendet bei {:?}", layer.plane.position());
        }
    }
}
