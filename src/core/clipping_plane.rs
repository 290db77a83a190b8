//! Schnittebene (Clipping Plane) eines Volumen-Layers.
//!
//! Die Ebene besitzt Position, Normale, Schichtdicke und einen
//! Enabled-Schalter. Jede Eigenschaft hat ein eigenes Änderungs-Signal,
//! das nur bei tatsächlicher Wertänderung feuert.

use super::geometry;
use super::signal::Signal;
use glam::Vec3;

/// Benannte Koordinatenachse für das Ausrichten der Ebenen-Normale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneAxis {
    X,
    Y,
    Z,
}

impl PlaneAxis {
    /// Alle Achsen in Tastenreihenfolge.
    pub const ALL: [PlaneAxis; 3] = [PlaneAxis::X, PlaneAxis::Y, PlaneAxis::Z];

    /// Achsenparallele Einheitsnormale in Array-Reihenfolge `(depth, height, width)`.
    ///
    /// `z` ist die erste Array-Achse, `x` die letzte:
    /// x → (0,0,1), y → (0,1,0), z → (1,0,0).
    pub fn normal(self) -> Vec3 {
        match self {
            PlaneAxis::Z => Vec3::new(1.0, 0.0, 0.0),
            PlaneAxis::Y => Vec3::new(0.0, 1.0, 0.0),
            PlaneAxis::X => Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Zeichen der Tastenbelegung (`'x'`, `'y'`, `'z'`).
    pub fn key(self) -> char {
        match self {
            PlaneAxis::X => 'x',
            PlaneAxis::Y => 'y',
            PlaneAxis::Z => 'z',
        }
    }

    /// Ermittelt die Achse aus einem Tastenzeichen (Groß-/Kleinschreibung egal).
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'x' => Some(PlaneAxis::X),
            'y' => Some(PlaneAxis::Y),
            'z' => Some(PlaneAxis::Z),
            _ => None,
        }
    }
}

/// Änderungs-Signale der Schnittebene.
#[derive(Debug, Default)]
pub struct PlaneEvents {
    pub position: Signal<Vec3>,
    pub normal: Signal<Vec3>,
    pub thickness: Signal<f32>,
    pub enabled: Signal<bool>,
}

impl PlaneEvents {
    /// Meldet sämtliche Abonnenten aller Signale ab.
    pub fn disconnect_all(&self) {
        self.position.disconnect_all();
        self.normal.disconnect_all();
        self.thickness.disconnect_all();
        self.enabled.disconnect_all();
    }

    /// Gesamtzahl aller registrierten Abonnenten.
    pub fn subscriber_count(&self) -> usize {
        self.position.subscriber_count()
            + self.normal.subscriber_count()
            + self.thickness.subscriber_count()
            + self.enabled.subscriber_count()
    }
}

/// Renderbare Schnittebene durch ein Volumen.
#[derive(Debug)]
pub struct ClippingPlane {
    position: Vec3,
    normal: Vec3,
    thickness: f32,
    enabled: bool,
    /// Änderungs-Benachrichtigungen für externe Beobachter
    pub events: PlaneEvents,
}

impl ClippingPlane {
    /// Erstellt eine Ebene; die Normale wird normiert (Null-Vektor → X-Achse der Daten).
    pub fn new(position: Vec3, normal: Vec3, thickness: f32, enabled: bool) -> Self {
        Self {
            position,
            normal: normal.try_normalize().unwrap_or(Vec3::X),
            thickness,
            enabled,
            events: PlaneEvents::default(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Setzt die Position. Gibt `true` zurück, wenn sich der Wert geändert hat.
    pub fn set_position(&mut self, position: Vec3) -> bool {
        if self.position == position {
            return false;
        }
        self.position = position;
        self.events.position.emit(&position);
        true
    }

    /// Setzt die Normale (wird normiert). Null-Vektoren werden ignoriert.
    pub fn set_normal(&mut self, normal: Vec3) -> bool {
        let Some(normal) = normal.try_normalize() else {
            log::warn!("Ebenen-Normale {normal} ist kein gültiger Richtungsvektor");
            return false;
        };
        if self.normal == normal {
            return false;
        }
        self.normal = normal;
        self.events.normal.emit(&normal);
        true
    }

    /// Setzt die Schichtdicke.
    pub fn set_thickness(&mut self, thickness: f32) -> bool {
        if self.thickness == thickness {
            return false;
        }
        self.thickness = thickness;
        self.events.thickness.emit(&thickness);
        true
    }

    /// Schaltet das Slab-Rendering um die Ebene ein oder aus.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        self.events.enabled.emit(&enabled);
        true
    }

    /// Schnittpunkt einer Geraden mit der (unendlichen) Ebene.
    pub fn intersect_with_line(&self, line_position: Vec3, line_direction: Vec3) -> Option<Vec3> {
        geometry::intersect_line_with_plane(line_position, line_direction, self.position, self.normal)
    }
}
