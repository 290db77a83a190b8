//! Achsenparallele Bounding Box in Daten-Koordinaten.
//!
//! Die Achsenreihenfolge folgt dem Array-Layout des Volumens
//! `(depth, height, width)`, nicht der Bildschirm-Konvention.

use glam::Vec3;

/// Achsenparallele Box mit inklusiven Grenzen `min..=max` je Achse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Untere Ecke
    pub min: Vec3,
    /// Obere Ecke
    pub max: Vec3,
}

impl BoundingBox {
    /// Erstellt eine Box aus zwei Ecken (Reihenfolge egal, wird je Achse sortiert).
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Daten-Extent eines Volumens: Voxel-Mittelpunkte `0..=shape-1` je Achse.
    pub fn data_extent(shape: [usize; 3]) -> Self {
        let upper = Vec3::new(
            shape[0].saturating_sub(1) as f32,
            shape[1].saturating_sub(1) as f32,
            shape[2].saturating_sub(1) as f32,
        );
        Self::new(Vec3::ZERO, upper)
    }

    /// Anzeige-Box eines Volumens: Voxel-Kanten `-0.5..=shape-0.5` je Achse.
    pub fn display_extent(shape: [usize; 3]) -> Self {
        let size = Vec3::new(shape[0] as f32, shape[1] as f32, shape[2] as f32);
        Self::new(Vec3::splat(-0.5), size - Vec3::splat(0.5))
    }

    /// Geometrischer Mittelpunkt der Box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Kantenlängen je Achse.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Alle acht Eckpunkte.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}
