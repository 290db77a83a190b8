use super::ViewerCursor;
use crate::core::{PlaneAxis, Volume};
use crate::shared::RenderingMode;
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// MRC-Datei laden und als Tomogramm anzeigen
    OpenTomogram { path: String },
    /// Volumen als Tomogramm-Layer hinzufügen
    AddVolumeLayer { name: String, volume: Arc<Volume> },
    /// Tomogramm entfernen und Signale lösen
    CloseTomogram,
    /// Rendering-Modus setzen (Volumen oder Schnittebene)
    SetRenderingMode { mode: RenderingMode },
    /// Schichtdicke der Schnittebene setzen
    SetPlaneThickness { thickness: f32 },
    /// Drag-Geste auf der Schnittebene starten
    BeginPlaneDrag { cursor: ViewerCursor },
    /// Schnittebene entlang ihrer Normalen nachführen
    UpdatePlaneDrag { cursor: ViewerCursor },
    /// Laufende Drag-Geste beenden
    EndPlaneDrag,
    /// Schnittebene auf eine Achse ausrichten
    AlignPlaneToAxis { axis: PlaneAxis, cursor: ViewerCursor },
    /// Sichtbarkeit des Volumen-Layers setzen
    SetLayerVisibility { visible: bool },
    /// Kamera auf die Startansicht zurücksetzen
    ResetView,
}
