//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
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
            // === Dialoge ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::RequestReferenceDialog => handlers::dialog::request_reference_dialog(state),
            AppCommand::RequestNewPathDialog => handlers::dialog::request_new_path_dialog(state),
            AppCommand::RequestExportDialog => handlers::dialog::request_export_dialog(state),
            AppCommand::DismissDialogs => handlers::dialog::dismiss(state),

            // === Datei-I/O ===
            AppCommand::LoadPath { path } => handlers::file_io::load(state, path)?,
            AppCommand::SavePath { path } => handlers::file_io::save(state, path)?,
            AppCommand::LoadReferences { paths } => {
                handlers::file_io::load_references(state, paths)?
            }
            AppCommand::ExportTrajectory { path, ttl_id } => {
                handlers::file_io::export(state, path, ttl_id)
            }

            // === Bearbeitung ===
            AppCommand::CreateRegularPolygon { node_count } => {
                handlers::editing::create_regular_polygon(state, node_count)?
            }
            AppCommand::BeginVertexDrag {
                screen_pos,
                max_pixel_distance,
            } => handlers::editing::begin_drag(state, screen_pos, max_pixel_distance),
            AppCommand::DragActiveVertex { world_pos } => {
                handlers::editing::drag(state, world_pos)
            }
            AppCommand::EndVertexDrag => handlers::editing::end_drag(state),
            AppCommand::ToggleVertexVisibility => {
                handlers::editing::toggle_vertex_visibility(state)
            }
            AppCommand::ToggleContinuityMode => handlers::editing::toggle_continuity_mode(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Ansicht ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetViewWindow { min, max } => {
                handlers::view::set_view_window(state, min, max)
            }
            AppCommand::FitView => handlers::view::fit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
