use super::{PointerEvent, ViewerCursor};
use crate::core::Volume;
use crate::shared::RenderingMode;
use std::sync::Arc;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host-Viewer/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Tomogramm aus Datei öffnen
    OpenTomogramRequested { path: String },
    /// Bereits geladenes Volumen als Tomogramm anzeigen
    VolumeProvided { name: String, volume: Arc<Volume> },
    /// Aktuelles Tomogramm schließen
    CloseTomogramRequested,
    /// Rendering-Modus im Widget gewählt
    RenderingModeChangeRequested { mode: RenderingMode },
    /// Schichtdicke im Widget geändert
    PlaneThicknessChangeRequested { thickness: f32 },
    /// Maus-Ereignis im Viewer (Press, Move, Release, ...)
    Pointer { event: PointerEvent },
    /// Taste im Viewer gedrückt
    KeyPressed { key: char, cursor: ViewerCursor },
    /// Viewer hat den Fokus verloren
    FocusLost,
    /// Sichtbarkeit des Volumen-Layers umgeschaltet
    LayerVisibilityChanged { visible: bool },
    /// Kamera auf die Startansicht des Tomogramms zurücksetzen
    ResetViewRequested,
}
