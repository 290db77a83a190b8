use glam::Vec3;

/// Daten einer laufenden Drag-Geste, beim Mausklick festgehalten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Ebenen-Position beim Start der Geste
    pub original_plane_position: Vec3,
    /// Cursor-Position beim Start der Geste
    pub start_pointer_position: Vec3,
}

/// Zustandsmaschine der Ebenen-Verschiebung (Idle -> Dragging -> Idle).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlaneDragState {
    #[default]
    Idle,
    Dragging(DragGesture),
}

/// Interaktionsbezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct InteractionState {
    /// Zustand der Ebenen-Verschiebung
    pub drag: PlaneDragState,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange eine Drag-Geste läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, PlaneDragState::Dragging(_))
    }

    /// Aktive Geste, falls vorhanden.
    pub fn gesture(&self) -> Option<DragGesture> {
        match self.drag {
            PlaneDragState::Dragging(gesture) => Some(gesture),
            PlaneDragState::Idle => None,
        }
    }
}
