//! MRC-Anbindung für Tomogramme.
//!
//! Lesen läuft über den `mrc`-Crate (`MrcView`): Header, Extended Header und
//! Datenmodus prüft der Crate, hier wird nur nach `f32` konvertiert.
//! Spalten (`nx`) laufen am schnellsten, daraus ergibt sich die Form
//! `(nz, ny, nx)` = `(depth, height, width)`.

use super::volume::{Volume, VolumeLoadError};
use ::mrc::MrcView;

/// Länge des festen MRC-Headers in Bytes.
pub const HEADER_LEN: usize = 1024;

/// MRC2014-Modus für 16-Bit-Ganzzahlen.
pub const MODE_INT16: i32 = 1;
/// MRC2014-Modus für 32-Bit-Fließkommazahlen.
pub const MODE_FLOAT32: i32 = 2;

const OFFSET_MODE: usize = 12;
const OFFSET_MAPC: usize = 64;
const OFFSET_MAP: usize = 208;
const OFFSET_MACHST: usize = 212;
const OFFSET_NVERSION: usize = 108;
const NVERSION: i32 = 20140;

/// Datenblock als `f32`, unabhängig vom gespeicherten Modus.
fn voxels_as_f32(view: &MrcView<'_>) -> Result<Vec<f32>, ::mrc::Error> {
    if let Ok(values) = view.data.as_f32_slice() {
        return Ok(values.to_vec());
    }
    if let Ok(values) = view.data.as_i16_slice() {
        return Ok(values.iter().map(|&v| f32::from(v)).collect());
    }
    let values = view.data.as_u16_slice()?;
    Ok(values.iter().map(|&v| f32::from(v)).collect())
}

/// Parst eine vollständige MRC-Datei aus dem Speicher.
pub fn read_volume(bytes: &[u8]) -> Result<Volume, VolumeLoadError> {
    let view = MrcView::new(bytes)?;
    let (nx, ny, nz) = view.dimensions();
    let shape = [nz, ny, nx];

    let expected = nx
        .checked_mul(ny)
        .and_then(|n| n.checked_mul(nz))
        .filter(|&n| n > 0)
        .ok_or(VolumeLoadError::ShapeMismatch { shape, actual: 0 })?;

    let mut data = voxels_as_f32(&view)?;
    if data.len() < expected {
        return Err(VolumeLoadError::TruncatedData {
            expected,
            actual: data.len(),
        });
    }
    // Überhang hinter dem Volumen gehört nicht zu den Voxeln
    data.truncate(expected);

    log::debug!("MRC-Datei: {nx}x{ny}x{nz} (nx, ny, nz), {expected} Voxel");

    Volume::from_data(shape, data)
}

/// Little-Endian-MRC2014-Header für Form `(depth, height, width)` und Modus.
pub fn encode_header(shape: [usize; 3], mode: i32) -> Vec<u8> {
    let [d, h, w] = shape;
    let mut bytes = vec![0u8; HEADER_LEN];
    let mut put = |offset: usize, word: [u8; 4]| {
        bytes[offset..offset + 4].copy_from_slice(&word);
    };

    let dims = [w as i32, h as i32, d as i32];
    for (i, n) in dims.iter().enumerate() {
        // nx/ny/nz, Gittergröße mx/my/mz und Zellmaße in Voxeln
        put(i * 4, n.to_le_bytes());
        put(28 + i * 4, n.to_le_bytes());
        put(40 + i * 4, (*n as f32).to_le_bytes());
        put(52 + i * 4, 90.0f32.to_le_bytes());
        put(OFFSET_MAPC + i * 4, (i as i32 + 1).to_le_bytes());
    }
    put(OFFSET_MODE, mode.to_le_bytes());
    put(OFFSET_NVERSION, NVERSION.to_le_bytes());
    put(OFFSET_MAP, *b"MAP ");
    put(OFFSET_MACHST, [0x44, 0x44, 0x00, 0x00]);
    bytes
}

/// Serialisiert ein Volumen als Little-Endian-MRC mit `f32`-Daten (Modus 2).
pub fn write_volume(volume: &Volume) -> Vec<u8> {
    let mut bytes = encode_header(volume.shape(), MODE_FLOAT32);
    bytes.reserve(volume.voxel_count() * 4);
    for value in volume.data() {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}
