//! 3D-Kamera-Zustand des Viewers (Zentrum, Euler-Winkel, Zoom).
//!
//! Die eigentliche Projektion übernimmt der Host-Viewer; hier wird nur der
//! Sollzustand gehalten, den der Viewer nach dem Öffnen eines Volumens übernimmt.

use super::BoundingBox;
use glam::Vec3;

/// 3D-Kamera mit Orbit-Zentrum, Euler-Winkeln (Grad) und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Orbit-Zentrum in Daten-Koordinaten
    pub center: Vec3,
    /// Euler-Winkel in Grad
    pub angles: Vec3,
    /// Zoom-Level (1.0 = Volumen füllt den Viewport)
    pub zoom: f32,
}

impl Camera3D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.01;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 100.0;

    /// Erstellt eine Kamera im Ursprung ohne Rotation
    pub fn new() -> Self {
        Self {
            center: Vec3::ZERO,
            angles: Vec3::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec3) {
        self.center = target;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Setzt die Ansicht auf eine Bounding Box zurück.
    ///
    /// Zentrum = Box-Mitte, Winkel und Zoom aus der Voreinstellung.
    pub fn reset_to(&mut self, bounding_box: &BoundingBox, angles: Vec3, zoom: f32) {
        self.look_at(bounding_box.center());
        self.angles = angles;
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}
