use crate::core::Signal;
use crate::shared::RenderingMode;
use std::rc::Rc;

/// Ausgehende Benachrichtigungen an das Steuer-Widget.
///
/// Die Signale liegen in `Rc`, damit die Weiterleitungen der Ebenen-Events
/// sie über die Lebensdauer einer Subscription halten können.
#[derive(Debug, Default)]
pub struct TomoSliceSignals {
    /// Rendering-Modus hat sich geändert
    pub rendering_mode_changed: Rc<Signal<RenderingMode>>,
    /// Schichtdicke der Schnittebene hat sich geändert
    pub plane_thickness_changed: Rc<Signal<f32>>,
}

impl TomoSliceSignals {
    pub fn new() -> Self {
        Self::default()
    }
}
