//! Volumetrisches Skalarfeld (Tomogramm) mit Form `(depth, height, width)`.

use super::mrc;
use super::BoundingBox;
use glam::Vec3;
use std::path::{Path, PathBuf};

/// Fehler beim Laden eines Volumens.
#[derive(Debug, thiserror::Error)]
pub enum VolumeLoadError {
    /// Datei konnte nicht geöffnet oder gelesen werden
    #[error("Volumen-Datei konnte nicht gelesen werden: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Vom `mrc`-Crate abgelehnt (Header, Modus oder Datenblock)
    #[error("Ungültige MRC-Datei: {0}")]
    Format(#[from] ::mrc::Error),
    /// Datenblock endet vor dem erwarteten Ende
    #[error("Datenblock unvollständig: {expected} Voxel erwartet, {actual} vorhanden")]
    TruncatedData { expected: usize, actual: usize },
    /// Anzahl der Werte passt nicht zur Form
    #[error("{actual} Werte passen nicht zur Form {shape:?}")]
    ShapeMismatch { shape: [usize; 3], actual: usize },
}

/// Dichtes 3D-Volumen; nach dem Laden unveränderlich.
#[derive(Debug, Clone)]
pub struct Volume {
    shape: [usize; 3],
    /// Werte zeilenweise, letzte Achse (width) läuft am schnellsten
    data: Vec<f32>,
}

impl Volume {
    /// Erstellt ein Volumen aus Form und flachen Daten.
    pub fn from_data(shape: [usize; 3], data: Vec<f32>) -> Result<Self, VolumeLoadError> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .filter(|&n| n > 0);
        if expected != Some(data.len()) {
            return Err(VolumeLoadError::ShapeMismatch {
                shape,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Lädt ein Volumen aus einer MRC-Datei.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VolumeLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| VolumeLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let volume = mrc::read_volume(&bytes)?;

        log::info!(
            "Volumen geladen: {} (Form {:?}, {} Voxel)",
            path.display(),
            volume.shape,
            volume.voxel_count()
        );
        Ok(volume)
    }

    /// Form `(depth, height, width)`.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Flache Voxel-Daten.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn voxel_count(&self) -> usize {
        self.data.len()
    }

    /// Voxelwert an `(z, y, x)` oder `None` außerhalb der Form.
    pub fn value_at(&self, index: [usize; 3]) -> Option<f32> {
        let [d, h, w] = self.shape;
        let [z, y, x] = index;
        if z >= d || y >= h || x >= w {
            return None;
        }
        self.data.get((z * h + y) * w + x).copied()
    }

    /// Mittelpunkt mit Ganzzahl-Division `shape / 2` je Achse.
    pub fn center_index(&self) -> Vec3 {
        let [d, h, w] = self.shape;
        Vec3::new((d / 2) as f32, (h / 2) as f32, (w / 2) as f32)
    }

    /// Geometrische Mitte `shape / 2` ohne Abrundung.
    pub fn center(&self) -> Vec3 {
        let [d, h, w] = self.shape;
        Vec3::new(d as f32, h as f32, w as f32) * 0.5
    }

    /// Daten-Extent (Voxel-Mittelpunkte).
    pub fn extent(&self) -> BoundingBox {
        BoundingBox::data_extent(self.shape)
    }

    /// Minimaler und maximaler Voxelwert (NaN-Werte werden übersprungen).
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_checks_shape() {
        assert!(Volume::from_data([2, 3, 4], vec![0.0; 24]).is_ok());
        assert!(matches!(
            Volume::from_data([2, 3, 4], vec![0.0; 23]),
            Err(VolumeLoadError::ShapeMismatch { actual: 23, .. })
        ));
        assert!(Volume::from_data([0, 3, 4], Vec::new()).is_err());
    }

    #[test]
    fn test_value_at_uses_row_major_layout() {
        let data: Vec<f32> = (0..24).map(|v| v as f32).collect();
        let volume = Volume::from_data([2, 3, 4], data).expect("gültige Form");
        assert_eq!(volume.value_at([0, 0, 1]), Some(1.0));
        assert_eq!(volume.value_at([0, 1, 0]), Some(4.0));
        assert_eq!(volume.value_at([1, 0, 0]), Some(12.0));
        assert_eq!(volume.value_at([2, 0, 0]), None);
    }

    #[test]
    fn test_centers() {
        let volume = Volume::from_data([5, 4, 3], vec![0.0; 60]).expect("gültige Form");
        assert_eq!(volume.center_index(), Vec3::new(2.0, 2.0, 1.0));
        assert_eq!(volume.center(), Vec3::new(2.5, 2.0, 1.5));
    }

    #[test]
    fn test_value_range_skips_nan() {
        let volume =
            Volume::from_data([1, 1, 4], vec![3.0, f32::NAN, -1.0, 2.0]).expect("gültige Form");
        assert_eq!(volume.value_range(), Some((-1.0, 3.0)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Volume::load("/nonexistent/tomogram.mrc").expect_err("Datei fehlt");
        assert!(matches!(err, VolumeLoadError::Io { .. }));
    }
}
