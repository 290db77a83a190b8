//! Maus-Ereignisse des Host-Viewers in Daten-Koordinaten.

use glam::Vec3;

/// Cursor-Zustand des Viewers zum Zeitpunkt eines Ereignisses.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerCursor {
    /// Cursor-Position in Daten-Koordinaten (z, y, x)
    pub position: Vec3,
    /// Blickrichtung der Kamera in Daten-Koordinaten
    pub view_direction: Vec3,
    /// Indizes der dargestellten Dimensionen
    pub dims_displayed: Vec<usize>,
}

impl ViewerCursor {
    /// Cursor in einer vollständigen 3D-Ansicht (Dimensionen 0, 1, 2).
    pub fn in_3d(position: Vec3, view_direction: Vec3) -> Self {
        Self {
            position,
            view_direction,
            dims_displayed: vec![0, 1, 2],
        }
    }
}

/// Art eines Maus-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
    /// Alles andere (Doppelklick, Wheel, ...)
    Other,
}

/// Maus-Ereignis aus dem Viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub cursor: ViewerCursor,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, cursor: ViewerCursor) -> Self {
        Self { kind, cursor }
    }
}
