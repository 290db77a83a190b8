//! Zentrale Konfiguration für TomoSlice.
//!
//! `TomoSliceOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::RenderingMode;
use serde::{Deserialize, Serialize};

// ── Schnittebene ────────────────────────────────────────────────────

/// Standard-Schichtdicke der Schnittebene (Voxel).
pub const DEFAULT_PLANE_THICKNESS: f32 = 5.0;

// ── Geometrie ───────────────────────────────────────────────────────

/// Toleranz für Punkt-in-Box-Tests an den Volumen-Flächen.
pub const BOUNDING_BOX_EPSILON: f32 = crate::core::geometry::BOUNDING_BOX_EPSILON;

// ── Kamera ──────────────────────────────────────────────────────────

/// Kamera-Winkel nach dem Öffnen eines Tomogramms (Grad).
pub const CAMERA_ANGLES: [f32; 3] = [140.0, -55.0, -140.0];
/// Kamera-Zoom nach dem Öffnen eines Tomogramms.
pub const CAMERA_ZOOM: f32 = 0.8;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `tomoslice.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TomoSliceOptions {
    /// Schichtdicke neu erzeugter Schnittebenen
    pub default_plane_thickness: f32,
    /// Rendering-Modus beim Programmstart
    #[serde(default)]
    pub default_rendering_mode: RenderingMode,
    /// Toleranz für Punkt-in-Box-Prüfungen (Daten-Einheiten)
    #[serde(default = "default_bounding_box_epsilon")]
    pub bounding_box_epsilon: f32,
    /// Kamera-Winkel nach dem Öffnen (Grad)
    pub camera_angles: [f32; 3],
    /// Kamera-Zoom nach dem Öffnen
    pub camera_zoom: f32,
}

impl Default for TomoSliceOptions {
    fn default() -> Self {
        Self {
            default_plane_thickness: DEFAULT_PLANE_THICKNESS,
            default_rendering_mode: RenderingMode::default(),
            bounding_box_epsilon: BOUNDING_BOX_EPSILON,
            camera_angles: CAMERA_ANGLES,
            camera_zoom: CAMERA_ZOOM,
        }
    }
}

/// Serde-Default für `bounding_box_epsilon` (Abwärtskompatibilität).
fn default_bounding_box_epsilon() -> f32 {
    BOUNDING_BOX_EPSILON
}

impl TomoSliceOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("tomoslice"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("tomoslice.toml")
    }

    /// Ersetzt ungültige Werte (nicht-positive Dicke, negatives Epsilon) durch Defaults.
    pub fn sanitized(mut self) -> Self {
        if !(self.default_plane_thickness.is_finite() && self.default_plane_thickness > 0.0) {
            log::warn!(
                "Ungültige Standard-Schichtdicke {}, verwende {}",
                self.default_plane_thickness,
                DEFAULT_PLANE_THICKNESS
            );
            self.default_plane_thickness = DEFAULT_PLANE_THICKNESS;
        }
        if !(self.bounding_box_epsilon.is_finite() && self.bounding_box_epsilon >= 0.0) {
            self.bounding_box_epsilon = BOUNDING_BOX_EPSILON;
        }
        if !(self.camera_zoom.is_finite() && self.camera_zoom > 0.0) {
            self.camera_zoom = CAMERA_ZOOM;
        }
        self
    }

    /// Kamera-Winkel als Vektor.
    pub fn camera_angles_vec(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.camera_angles)
    }
}
