//! Angezeigter Volumen-Layer mit Schnittebene.
//!
//! Bündelt das geladene Volumen, die Sichtbarkeit, die Maus-Interaktivität
//! (Kamera-Rotation) und die Schnittebene. Stellt die Strahl-Abfragen
//! bereit, die der Viewer für Klicks im 3D-Modus braucht.

use super::geometry;
use super::{BoundingBox, ClippingPlane, Volume};
use glam::Vec3;
use std::sync::Arc;

/// Parameter für die Schnittebene eines neu geöffneten Volumens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneParameters {
    pub position: Vec3,
    pub normal: Vec3,
    pub thickness: f32,
    pub enabled: bool,
}

/// Volumen-Layer im 3D-Viewer.
#[derive(Debug)]
pub struct VolumeLayer {
    /// Anzeigename
    pub name: String,
    volume: Arc<Volume>,
    /// Layer wird gerendert
    pub visible: bool,
    /// Layer reagiert auf Maus-Gesten (Kamera-Rotation)
    pub interactive: bool,
    /// Schnittebene durch das Volumen
    pub plane: ClippingPlane,
}

impl VolumeLayer {
    /// Erstellt einen sichtbaren, interaktiven Layer.
    pub fn new(name: impl Into<String>, volume: Arc<Volume>, plane: PlaneParameters) -> Self {
        Self {
            name: name.into(),
            volume,
            visible: true,
            interactive: true,
            plane: ClippingPlane::new(plane.position, plane.normal, plane.thickness, plane.enabled),
        }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn shape(&self) -> [usize; 3] {
        self.volume.shape()
    }

    /// Daten-Extent (Voxel-Mittelpunkte), Basis für Punkt-in-Box-Prüfungen.
    pub fn extent(&self) -> BoundingBox {
        self.volume.extent()
    }

    /// Anzeige-Box (Voxel-Kanten) der dargestellten Dimensionen.
    ///
    /// `None`, wenn nicht alle drei Volumen-Achsen dargestellt werden.
    pub fn display_bounding_box(&self, dims_displayed: &[usize]) -> Option<BoundingBox> {
        if !displays_all_axes(dims_displayed) {
            return None;
        }
        Some(BoundingBox::display_extent(self.volume.shape()))
    }

    /// Schnittpunkte eines Klick-Strahls mit der Anzeige-Box.
    pub fn ray_intersections(
        &self,
        position: Vec3,
        view_direction: Vec3,
        dims_displayed: &[usize],
    ) -> Option<(Vec3, Vec3)> {
        let bounding_box = self.display_bounding_box(dims_displayed)?;
        geometry::intersect_ray_with_bounding_box(position, view_direction, &bounding_box)
    }

    /// Volumenmitte mit Ganzzahl-Division (`shape / 2`).
    pub fn center_index(&self) -> Vec3 {
        self.volume.center_index()
    }
}

/// Prüft, ob genau die drei Volumen-Achsen (in beliebiger Reihenfolge) dargestellt werden.
fn displays_all_axes(dims_displayed: &[usize]) -> bool {
    let mut seen = [false; 3];
    for &dim in dims_displayed {
        match seen.get_mut(dim) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    seen.iter().all(|s| *s)
}
