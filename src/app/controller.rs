//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Viewer-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::OpenTomogram { path } => handlers::file_io::open(state, path)?,
            AppCommand::AddVolumeLayer { name, volume } => {
                handlers::file_io::add_volume(state, name, volume)
            }
            AppCommand::CloseTomogram => handlers::file_io::close(state),

            // === Schnittebene ===
            AppCommand::SetRenderingMode { mode } => {
                handlers::plane::set_rendering_mode(state, mode)
            }
            AppCommand::SetPlaneThickness { thickness } => {
                handlers::plane::set_thickness(state, thickness)?
            }
            AppCommand::SetLayerVisibility { visible } => {
                handlers::plane::set_layer_visibility(state, visible)
            }
            AppCommand::BeginPlaneDrag { cursor } => handlers::plane::begin_drag(state, &cursor),
            AppCommand::UpdatePlaneDrag { cursor } => handlers::plane::update_drag(state, &cursor),
            AppCommand::EndPlaneDrag => handlers::plane::end_drag(state),
            AppCommand::AlignPlaneToAxis { axis, cursor } => {
                handlers::plane::align_to_axis(state, axis, &cursor)
            }

            // === Kamera ===
            AppCommand::ResetView => handlers::view::reset_view(state),
        }

        Ok(())
    }
}
