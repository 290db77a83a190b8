//! Use-Case-Funktionen für Öffnen und Schließen von Tomogrammen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::{PlaneParameters, Volume, VolumeLayer};
use anyhow::Context;
use glam::Vec3;
use std::path::Path;
use std::sync::Arc;

/// Lädt eine MRC-Datei und zeigt sie als Tomogramm an.
///
/// Der Layer-Name ist der Dateiname ohne Endung. Ein Fehler beim Laden
/// lässt ein bereits geöffnetes Tomogramm unverändert.
pub fn open_tomogram(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let volume = Volume::load(&path)
        .with_context(|| format!("Tomogramm konnte nicht geöffnet werden: {path}"))?;

    let name = Path::new(&path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tomogram".to_string());

    add_volume_layer(state, name, Arc::new(volume));
    state.current_file_path = Some(path);
    Ok(())
}

/// Fügt ein Volumen als Tomogramm-Layer hinzu.
///
/// Ein vorher geöffnetes Tomogramm wird zuerst geschlossen. Die Schnittebene
/// startet in der Volumenmitte mit Normale (1, 0, 0); `enabled` folgt dem
/// aktuellen Rendering-Modus.
pub fn add_volume_layer(state: &mut AppState, name: String, volume: Arc<Volume>) {
    if state.layer.is_some() {
        close_tomogram(state);
    }

    let plane = PlaneParameters {
        position: volume.center(),
        normal: Vec3::X,
        thickness: state.options.default_plane_thickness,
        enabled: state.rendering_mode().renders_plane(),
    };

    log::info!(
        "Tomogramm '{}' geöffnet: Form {:?}, Ebene bei {:?}",
        name,
        volume.shape(),
        plane.position
    );

    state.layer = Some(VolumeLayer::new(name, volume, plane));
    state.current_file_path = None;

    super::plane_state::connect_plane_signals(state);
    state.key_bindings.bind_axis_keys();
    super::camera::reset_view(state);
}

/// Entfernt das Tomogramm und löst alle Ebenen-Weiterleitungen.
///
/// Eine laufende Drag-Geste wird beendet. Gibt den entfernten Layer zurück.
pub fn close_tomogram(state: &mut AppState) -> Option<VolumeLayer> {
    if state.layer.is_none() {
        log::debug!("Schließen ignoriert: kein Tomogramm geöffnet");
        return None;
    }

    super::plane_drag::end_plane_drag(state);
    super::plane_state::disconnect_plane_signals(state);
    state.key_bindings.unbind_axis_keys();
    state.current_file_path = None;

    let layer = state.layer.take();
    if let Some(layer) = layer.as_ref() {
        log::info!("Tomogramm '{}' geschlossen", layer.name);
    }
    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mrc;
    use crate::shared::RenderingMode;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn cube(size: usize) -> Arc<Volume> {
        let data = vec![0.0; size * size * size];
        Arc::new(Volume::from_data([size, size, size], data).expect("gültige Form"))
    }

    #[test]
    fn test_add_volume_layer_places_plane_in_center() {
        let mut state = AppState::new();
        add_volume_layer(&mut state, "t".into(), cube(64));

        let layer = state.layer.as_ref().expect("Layer vorhanden");
        assert_eq!(layer.plane.position(), Vec3::splat(32.0));
        assert_eq!(layer.plane.normal(), Vec3::X);
        assert_relative_eq!(layer.plane.thickness(), 5.0);
        assert!(!layer.plane.enabled());
        assert!(state.plane_subscriptions.is_some());
        assert_eq!(state.key_bindings.len(), 3);
    }

    #[test]
    fn test_plane_enabled_follows_rendering_mode() {
        let mut state = AppState::new();
        state.rendering_mode.set(RenderingMode::Plane);
        add_volume_layer(&mut state, "t".into(), cube(8));
        assert!(state.layer.as_ref().is_some_and(|l| l.plane.enabled()));
    }

    #[test]
    fn test_close_detaches_plane_subscriptions() {
        let mut state = AppState::new();
        add_volume_layer(&mut state, "t".into(), cube(8));

        let notified = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notified);
        state
            .signals
            .rendering_mode_changed
            .connect(move |_| counter.set(counter.get() + 1));
        let thickness_counter = Rc::clone(&notified);
        state
            .signals
            .plane_thickness_changed
            .connect(move |_| thickness_counter.set(thickness_counter.get() + 1));

        let mut layer = close_tomogram(&mut state).expect("Layer war geöffnet");
        assert!(state.layer.is_none());
        assert!(state.plane_subscriptions.is_none());
        assert!(state.key_bindings.is_empty());
        assert_eq!(layer.plane.events.subscriber_count(), 0);

        layer.plane.set_enabled(true);
        layer.plane.set_thickness(9.0);
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn test_reopen_closes_previous_volume() {
        let mut state = AppState::new();
        add_volume_layer(&mut state, "a".into(), cube(8));
        add_volume_layer(&mut state, "b".into(), cube(16));

        let layer = state.layer.as_ref().expect("Layer vorhanden");
        assert_eq!(layer.name, "b");
        assert_eq!(layer.plane.events.subscriber_count(), 2);
        assert_eq!(state.key_bindings.len(), 3);
    }

    #[test]
    fn test_open_tomogram_reads_mrc_file() {
        let volume = Volume::from_data([4, 6, 8], vec![1.5; 4 * 6 * 8]).expect("gültige Form");
        let path = std::env::temp_dir().join(format!(
            "tomoslice_open_{}.mrc",
            std::process::id()
        ));
        std::fs::write(&path, mrc::write_volume(&volume)).expect("Testdatei schreibbar");

        let mut state = AppState::new();
        let path_string = path.to_string_lossy().into_owned();
        open_tomogram(&mut state, path_string.clone()).expect("MRC-Datei sollte laden");
        let _ = std::fs::remove_file(&path);

        assert_eq!(state.volume_shape(), Some([4, 6, 8]));
        assert_eq!(state.current_file_path.as_deref(), Some(path_string.as_str()));
        let layer = state.layer.as_ref().expect("Layer vorhanden");
        assert_eq!(layer.plane.position(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_open_missing_file_keeps_current_volume() {
        let mut state = AppState::new();
        add_volume_layer(&mut state, "a".into(), cube(8));

        let result = open_tomogram(&mut state, "/nonexistent/tomogram.mrc".into());
        assert!(result.is_err());
        assert_eq!(state.volume_shape(), Some([8, 8, 8]));
    }
}
