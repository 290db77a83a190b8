use crate::core::Camera3D;

/// View-bezogener Anwendungszustand
#[derive(Debug)]
pub struct ViewState {
    /// 3D-Kamera des Viewers
    pub camera: Camera3D,
    /// Anzahl dargestellter Dimensionen (2 oder 3)
    pub ndisplay: usize,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (3D-Darstellung).
    pub fn new() -> Self {
        Self {
            camera: Camera3D::new(),
            ndisplay: 3,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
