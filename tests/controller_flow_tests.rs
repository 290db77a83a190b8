use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tomoslice::{
    AppCommand, AppController, AppIntent, AppState, LoggedCommand, RenderingMode, Volume,
};

fn cube(size: usize) -> Arc<Volume> {
    let data = (0..size * size * size).map(|i| i as f32).collect();
    Arc::new(Volume::from_data([size, size, size], data).expect("gültige Form"))
}

fn open_volume(controller: &mut AppController, state: &mut AppState, volume: Arc<Volume>) {
    controller
        .handle_intent(
            state,
            AppIntent::VolumeProvided {
                name: "tomogram".into(),
                volume,
            },
        )
        .expect("VolumeProvided sollte ohne Fehler durchlaufen");
}

#[test]
fn test_open_volume_sets_up_plane_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    open_volume(&mut controller, &mut state, cube(64));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        LoggedCommand::VolumeLayerAdded { name, shape } => {
            assert_eq!(name, "tomogram");
            assert_eq!(*shape, [64, 64, 64]);
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }

    let layer = state.layer.as_ref().expect("Layer sollte existieren");
    assert_eq!(layer.plane.position(), Vec3::splat(32.0));
    assert_eq!(layer.plane.normal(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(layer.plane.thickness(), 5.0);
    assert!(!layer.plane.enabled());
    assert!(layer.visible);
    assert!(layer.interactive);

    assert_eq!(state.view.ndisplay, 3);
    assert_eq!(state.view.camera.center, Vec3::splat(31.5));
    assert_eq!(state.view.camera.angles, Vec3::new(140.0, -55.0, -140.0));
    assert_eq!(state.view.camera.zoom, 0.8);
}

#[test]
fn test_mode_chosen_before_open_enables_plane() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RenderingModeChangeRequested {
                mode: RenderingMode::Plane,
            },
        )
        .expect("Moduswechsel ohne Volumen sollte funktionieren");
    open_volume(&mut controller, &mut state, cube(16));

    assert!(state.layer.as_ref().is_some_and(|l| l.plane.enabled()));
}

#[test]
fn test_widget_signals_follow_plane_until_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    open_volume(&mut controller, &mut state, cube(32));

    let modes = Rc::new(RefCell::new(Vec::new()));
    let mode_sink = Rc::clone(&modes);
    state
        .signals
        .rendering_mode_changed
        .connect(move |mode| mode_sink.borrow_mut().push(*mode));

    let thicknesses = Rc::new(RefCell::new(Vec::new()));
    let thickness_sink = Rc::clone(&thicknesses);
    state
        .signals
        .plane_thickness_changed
        .connect(move |t| thickness_sink.borrow_mut().push(*t));

    for intent in [
        AppIntent::RenderingModeChangeRequested {
            mode: RenderingMode::Plane,
        },
        AppIntent::PlaneThicknessChangeRequested { thickness: 10.0 },
        AppIntent::RenderingModeChangeRequested {
            mode: RenderingMode::Volume,
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    assert_eq!(
        *modes.borrow(),
        vec![RenderingMode::Plane, RenderingMode::Volume]
    );
    assert_eq!(*thicknesses.borrow(), vec![10.0]);

    controller
        .handle_intent(&mut state, AppIntent::CloseTomogramRequested)
        .expect("Schließen sollte ohne Fehler durchlaufen");
    assert!(state.layer.is_none());
    assert!(state.plane_subscriptions.is_none());
    assert!(state.key_bindings.is_empty());

    // Ohne Volumen wird die Dicke verworfen, keine weitere Benachrichtigung
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaneThicknessChangeRequested { thickness: 20.0 },
        )
        .expect("Dicke ohne Volumen ist kein Fehler");
    assert_eq!(*thicknesses.borrow(), vec![10.0]);
}

#[test]
fn test_invalid_thickness_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    open_volume(&mut controller, &mut state, cube(8));

    let result = controller.handle_intent(
        &mut state,
        AppIntent::PlaneThicknessChangeRequested { thickness: -1.0 },
    );

    assert!(result.is_err());
    assert_eq!(state.layer.as_ref().map(|l| l.plane.thickness()), Some(5.0));
}

#[test]
fn test_reopen_replaces_volume_and_keeps_single_forwarding() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    open_volume(&mut controller, &mut state, cube(8));
    open_volume(&mut controller, &mut state, cube(20));

    let modes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&modes);
    state
        .signals
        .rendering_mode_changed
        .connect(move |mode| sink.borrow_mut().push(*mode));

    controller
        .handle_intent(
            &mut state,
            AppIntent::RenderingModeChangeRequested {
                mode: RenderingMode::Plane,
            },
        )
        .expect("Moduswechsel sollte funktionieren");

    assert_eq!(state.volume_shape(), Some([20, 20, 20]));
    assert_eq!(*modes.borrow(), vec![RenderingMode::Plane]);
    let layer = state.layer.as_ref().expect("Layer vorhanden");
    assert_eq!(layer.plane.position(), Vec3::splat(10.0));
    assert_eq!(layer.plane.events.subscriber_count(), 2);
}

#[test]
fn test_open_missing_file_returns_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::OpenTomogramRequested {
            path: "/nonexistent/tomogram.mrc".into(),
        },
    );

    assert!(result.is_err());
    assert!(state.layer.is_none());
    assert!(matches!(
        state
            .command_log
            .entries()
            .last()
            .and_then(LoggedCommand::command),
        Some(AppCommand::OpenTomogram { .. })
    ));
}

#[test]
fn test_close_without_volume_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::CloseTomogramRequested)
        .expect("Schließen ohne Volumen sollte kein Fehler sein");

    assert!(state.layer.is_none());
    assert_eq!(state.command_log.len(), 1);
}

#[test]
fn test_close_releases_volume_data() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let volume = cube(8);

    open_volume(&mut controller, &mut state, Arc::clone(&volume));
    assert_eq!(Arc::strong_count(&volume), 2);

    controller
        .handle_intent(&mut state, AppIntent::CloseTomogramRequested)
        .expect("Schließen sollte ohne Fehler durchlaufen");

    assert!(state.layer.is_none());
    assert!(!state.command_log.is_empty());
    assert_eq!(Arc::strong_count(&volume), 1);
}
