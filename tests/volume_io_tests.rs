use glam::Vec3;
use std::path::PathBuf;
use tomoslice::core::mrc;
use tomoslice::{AppController, AppIntent, AppState, Volume, VolumeLoadError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tomoslice_{}_{name}", std::process::id()))
}

/// MRC-Datei im Modus 1 (int16, little-endian).
fn int16_file(shape_zyx: [usize; 3], values: &[i16]) -> Vec<u8> {
    let mut bytes = mrc::encode_header(shape_zyx, mrc::MODE_INT16);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

#[test]
fn test_open_int16_tomogram_through_controller() {
    let values: Vec<i16> = (0..2 * 3 * 4).map(|v| v as i16 - 10).collect();
    let path = temp_path("int16.mrc");
    std::fs::write(&path, int16_file([2, 3, 4], &values)).expect("Testdatei schreibbar");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    let result = controller.handle_intent(
        &mut state,
        AppIntent::OpenTomogramRequested {
            path: path.to_string_lossy().into_owned(),
        },
    );
    let _ = std::fs::remove_file(&path);
    result.expect("int16-Tomogramm sollte laden");

    let layer = state.layer.as_ref().expect("Layer vorhanden");
    assert_eq!(layer.shape(), [2, 3, 4]);
    assert_eq!(layer.volume().value_at([1, 2, 3]), Some(13.0));
    assert_eq!(layer.volume().value_range(), Some((-10.0, 13.0)));
    assert_eq!(layer.plane.position(), Vec3::new(1.0, 1.5, 2.0));
    assert_eq!(layer.name, format!("tomoslice_{}_int16", std::process::id()));
}

#[test]
fn test_written_volume_loads_back() {
    let data: Vec<f32> = (0..5 * 6 * 7).map(|v| v as f32 * 0.25).collect();
    let volume = Volume::from_data([5, 6, 7], data.clone()).expect("gültige Form");
    let path = temp_path("float.mrc");
    std::fs::write(&path, mrc::write_volume(&volume)).expect("Testdatei schreibbar");

    let loaded = Volume::load(&path);
    let _ = std::fs::remove_file(&path);
    let loaded = loaded.expect("geschriebene Datei sollte laden");

    assert_eq!(loaded.shape(), [5, 6, 7]);
    assert_eq!(loaded.data(), data.as_slice());
}

#[test]
fn test_truncated_file_is_rejected() {
    let mut bytes = int16_file([2, 2, 2], &[1, 2, 3, 4, 5, 6, 7, 8]);
    bytes.truncate(bytes.len() - 4);
    let path = temp_path("truncated.mrc");
    std::fs::write(&path, bytes).expect("Testdatei schreibbar");

    let result = Volume::load(&path);
    let _ = std::fs::remove_file(&path);

    match result {
        Err(VolumeLoadError::Format(_)) => {}
        Err(VolumeLoadError::TruncatedData { expected, actual }) => {
            assert_eq!(expected, 8);
            assert_eq!(actual, 6);
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
}

#[test]
fn test_garbage_file_is_format_error() {
    let path = temp_path("garbage.mrc");
    std::fs::write(&path, b"kein MRC").expect("Testdatei schreibbar");

    let result = Volume::load(&path);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(VolumeLoadError::Format(_))));
}
