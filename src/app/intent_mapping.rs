//! Mapping von Viewer-Intents auf mutierende App-Commands.

use super::events::{PointerEvent, PointerEventKind};
use super::state::KeyAction;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenTomogramRequested { path } => vec![AppCommand::OpenTomogram { path }],
        AppIntent::VolumeProvided { name, volume } => {
            vec![AppCommand::AddVolumeLayer { name, volume }]
        }
        AppIntent::CloseTomogramRequested => vec![AppCommand::CloseTomogram],
        AppIntent::RenderingModeChangeRequested { mode } => {
            vec![AppCommand::SetRenderingMode { mode }]
        }
        AppIntent::PlaneThicknessChangeRequested { thickness } => {
            vec![AppCommand::SetPlaneThickness { thickness }]
        }
        AppIntent::Pointer { event } => map_pointer_event(state, event),
        AppIntent::KeyPressed { key, cursor } => match state.key_bindings.lookup(key) {
            Some(KeyAction::AlignPlane(axis)) => vec![AppCommand::AlignPlaneToAxis { axis, cursor }],
            None => vec![],
        },
        AppIntent::FocusLost => end_drag_if_active(state),
        AppIntent::LayerVisibilityChanged { visible } => {
            vec![AppCommand::SetLayerVisibility { visible }]
        }
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
    }
}

/// Drag-Zustandsmaschine: Press startet, Move führt nach, alles andere beendet.
fn map_pointer_event(state: &AppState, event: PointerEvent) -> Vec<AppCommand> {
    let dragging = state.interaction.is_dragging();
    match event.kind {
        PointerEventKind::Press if dragging => vec![
            AppCommand::EndPlaneDrag,
            AppCommand::BeginPlaneDrag {
                cursor: event.cursor,
            },
        ],
        PointerEventKind::Press => vec![AppCommand::BeginPlaneDrag {
            cursor: event.cursor,
        }],
        PointerEventKind::Move if dragging => vec![AppCommand::UpdatePlaneDrag {
            cursor: event.cursor,
        }],
        PointerEventKind::Move => vec![],
        PointerEventKind::Release | PointerEventKind::Other => end_drag_if_active(state),
    }
}

fn end_drag_if_active(state: &AppState) -> Vec<AppCommand> {
    if state.interaction.is_dragging() {
        vec![AppCommand::EndPlaneDrag]
    } else {
        vec![]
    }
}
