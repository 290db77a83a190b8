//! Ray/Plane-Geometrie für die Schnittebenen-Interaktion.
//!
//! Reine Funktionen ohne Seiteneffekte: Strahl gegen Bounding Box,
//! Gerade gegen Ebene, Punkt-in-Box-Test, Projektion einer Maus-Bewegung
//! auf eine Achse und Clamping auf die Box. Alle Koordinaten sind
//! Daten-Koordinaten in Array-Reihenfolge `(depth, height, width)`.

use super::BoundingBox;
use glam::Vec3;

/// Schwellwert, unter dem Richtungen als parallel bzw. Null-Vektoren gelten.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Standard-Toleranz für Punkt-in-Box-Tests an den Box-Flächen.
pub const BOUNDING_BOX_EPSILON: f32 = 1e-3;

/// Schneidet einen Strahl mit einer achsenparallelen Box (Slab-Test).
///
/// Liefert `(near, far)` entlang der Strahlrichtung oder `None`, wenn der
/// Strahl die Box verfehlt. Ein Strahl parallel zu einer Slab-Achse, dessen
/// Ursprung außerhalb dieses Slabs liegt, verfehlt die Box. Liegt die Box
/// vollständig hinter dem Ursprung, gilt das ebenfalls als Verfehlung.
///
/// Liegt der Ursprung innerhalb der Box, ist `near` die Eintrittsfläche in
/// Blickrichtung (also hinter dem Ursprung). Das entspricht der Vorderseite
/// des Volumens aus Sicht der Kamera.
pub fn intersect_ray_with_bounding_box(
    origin: Vec3,
    direction: Vec3,
    bounding_box: &BoundingBox,
) -> Option<(Vec3, Vec3)> {
    if direction.length_squared() < PARALLEL_EPSILON * PARALLEL_EPSILON {
        return None;
    }

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        let lo = bounding_box.min[axis];
        let hi = bounding_box.max[axis];

        if d.abs() < PARALLEL_EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let recip = d.recip();
        let t1 = (lo - o) * recip;
        let t2 = (hi - o) * recip;
        let (t_entry, t_exit) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        t_near = t_near.max(t_entry);
        t_far = t_far.min(t_exit);

        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }

    Some((origin + direction * t_near, origin + direction * t_far))
}

/// Schneidet eine unendliche Gerade mit einer unendlichen Ebene.
///
/// Löst `dot(p + t*d - plane_position, plane_normal) = 0` nach `t`.
/// `None`, wenn die Gerade parallel zur Ebene verläuft (Nenner ≈ 0).
pub fn intersect_line_with_plane(
    line_position: Vec3,
    line_direction: Vec3,
    plane_position: Vec3,
    plane_normal: Vec3,
) -> Option<Vec3> {
    let denominator = line_direction.dot(plane_normal);
    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (plane_position - line_position).dot(plane_normal) / denominator;
    Some(line_position + line_direction * t)
}

/// Inklusiver Punkt-in-Box-Test mit Toleranz `epsilon` an allen Flächen.
///
/// Ohne Toleranz würden legitime Treffer auf den Box-Flächen durch
/// Rundungsfehler verworfen.
pub fn point_in_bounding_box(point: Vec3, bounding_box: &BoundingBox, epsilon: f32) -> bool {
    let tolerance = Vec3::splat(epsilon.max(0.0));
    point.cmpge(bounding_box.min - tolerance).all() && point.cmple(bounding_box.max + tolerance).all()
}

/// Projiziert eine Maus-Bewegung auf eine Achse (z.B. die Ebenen-Normale).
///
/// Start- und Endposition sowie die Achse werden zuerst auf die Bildebene
/// (senkrecht zur Blickrichtung) projiziert. Der Rückgabewert ist die
/// vorzeichenbehaftete Länge der projizierten Bewegung entlang der
/// normierten, projizierten Achse.
///
/// Steht die Achse parallel zur Blickrichtung, ist ihre Projektion ein
/// Null-Vektor; dann wird `0.0` zurückgegeben und die Ebene bleibt stehen.
pub fn project_drag_onto_axis(
    start_position: Vec3,
    end_position: Vec3,
    view_direction: Vec3,
    axis: Vec3,
) -> f32 {
    let view = view_direction.normalize_or_zero();
    let drag = end_position - start_position;

    let drag_on_canvas = drag - view * drag.dot(view);
    let axis_on_canvas = axis - view * axis.dot(view);

    let axis_length = axis_on_canvas.length();
    if axis_length < PARALLEL_EPSILON {
        return 0.0;
    }

    drag_on_canvas.dot(axis_on_canvas / axis_length)
}

/// Clampt einen Punkt je Achse auf `[min, max]` der Box.
pub fn clamp_point_to_bounding_box(point: Vec3, bounding_box: &BoundingBox) -> Vec3 {
    point.max(bounding_box.min).min(bounding_box.max)
}
