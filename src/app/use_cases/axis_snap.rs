//! Use-Case: Schnittebene per Taste auf eine Volumen-Achse ausrichten.

use super::plane_state::enabled_plane_layer;
use crate::app::events::ViewerCursor;
use crate::app::AppState;
use crate::core::{geometry, PlaneAxis};
use glam::Vec3;

/// Richtet die Schnittebene senkrecht zur gewählten Achse aus.
///
/// Die Ebene geht durch den Punkt unter dem Cursor, sofern der Klick-Strahl
/// die Ebene innerhalb des Volumens trifft; sonst durch die Volumenmitte
/// (`shape / 2`). Ohne aktive Schnittebene passiert nichts.
///
/// Gibt die neue Position zurück, falls die Ebene ausgerichtet wurde.
pub fn align_plane_to_axis(
    state: &mut AppState,
    axis: PlaneAxis,
    cursor: &ViewerCursor,
) -> Option<Vec3> {
    let epsilon = state.options.bounding_box_epsilon;
    let layer = enabled_plane_layer(state.layer.as_mut())?;

    let cursor_point = layer
        .ray_intersections(cursor.position, cursor.view_direction, &cursor.dims_displayed)
        .and_then(|(near_point, _far_point)| {
            layer
                .plane
                .intersect_with_line(near_point, cursor.view_direction)
        })
        .filter(|point| geometry::point_in_bounding_box(*point, &layer.extent(), epsilon));

    let position = cursor_point.unwrap_or_else(|| layer.center_index());
    layer.plane.set_position(position);
    layer.plane.set_normal(axis.normal());

    log::debug!(
        "Ebene auf Achse '{}' ausgerichtet: Position {:?}, Normale {:?}",
        axis.key(),
        position,
        layer.plane.normal()
    );
    Some(position)
}
