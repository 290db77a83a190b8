use crate::app::CommandLog;
use crate::core::{SubscriptionId, VolumeLayer};
use crate::shared::{RenderingMode, TomoSliceOptions};
use std::cell::Cell;
use std::rc::Rc;

use super::{InteractionState, KeyBindings, TomoSliceSignals, ViewState};

/// Weiterleitungen der Ebenen-Events auf die Widget-Signale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneSubscriptions {
    /// `plane.enabled` -> `rendering_mode_changed`
    pub enabled: SubscriptionId,
    /// `plane.thickness` -> `plane_thickness_changed`
    pub thickness: SubscriptionId,
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Aktuell geladenes Tomogramm (None = kein Volumen geöffnet)
    pub layer: Option<VolumeLayer>,
    /// Pfad der aktuell geöffneten Datei
    pub current_file_path: Option<String>,
    /// Aktueller Rendering-Modus; die Ebenen-Weiterleitung schreibt mit
    pub(crate) rendering_mode: Rc<Cell<RenderingMode>>,
    /// Interaktions-State (Drag-Geste)
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Tastenbelegung des Viewers
    pub key_bindings: KeyBindings,
    /// Signale an das Steuer-Widget
    pub signals: TomoSliceSignals,
    /// Aktive Weiterleitungen der Ebenen-Events
    pub plane_subscriptions: Option<PlaneSubscriptions>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: TomoSliceOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(TomoSliceOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: TomoSliceOptions) -> Self {
        Self {
            layer: None,
            current_file_path: None,
            rendering_mode: Rc::new(Cell::new(options.default_rendering_mode)),
            interaction: InteractionState::new(),
            view: ViewState::new(),
            key_bindings: KeyBindings::new(),
            signals: TomoSliceSignals::new(),
            plane_subscriptions: None,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktueller Rendering-Modus, auch nach direktem Umschalten der Ebene.
    pub fn rendering_mode(&self) -> RenderingMode {
        self.rendering_mode.get()
    }

    /// Form des geladenen Volumens (für Statusanzeige)
    pub fn volume_shape(&self) -> Option<[usize; 3]> {
        self.layer.as_ref().map(|layer| layer.shape())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
