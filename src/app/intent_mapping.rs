//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenPathRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::PathFileSelected { path } => vec![
            AppCommand::DismissDialogs,
            AppCommand::LoadPath { path },
        ],
        AppIntent::OpenReferenceRequested => vec![AppCommand::RequestReferenceDialog],
        AppIntent::ReferenceFilesSelected { paths } => vec![
            AppCommand::DismissDialogs,
            AppCommand::LoadReferences { paths },
        ],
        AppIntent::NewPathRequested => vec![AppCommand::RequestNewPathDialog],
        AppIntent::NewPathConfirmed { node_count } => vec![
            AppCommand::DismissDialogs,
            AppCommand::CreateRegularPolygon { node_count },
        ],
        AppIntent::SaveRequested => vec![AppCommand::SavePath { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::SaveFileSelected { path } => vec![
            AppCommand::DismissDialogs,
            AppCommand::SavePath { path: Some(path) },
        ],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportConfirmed { path, ttl_id } => vec![
            AppCommand::DismissDialogs,
            AppCommand::ExportTrajectory {
                path,
                ttl_id: ttl_id.unwrap_or(state.options.default_ttl_id),
            },
        ],
        AppIntent::DialogCancelled => vec![AppCommand::DismissDialogs],
        AppIntent::ToggleVertexVisibilityRequested => vec![AppCommand::ToggleVertexVisibility],
        AppIntent::ToggleHeadingLockRequested => vec![AppCommand::ToggleContinuityMode],
        AppIntent::VertexPressed { screen_pos } => {
            // Ausgeblendete Kontrollpunkte sind nicht greifbar
            if state.editor.show_vertices {
                vec![AppCommand::BeginVertexDrag {
                    screen_pos,
                    max_pixel_distance: state.options.pick_radius_px,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::VertexDragged { screen_pos } => {
            if state.editor.active_vertex.is_some() {
                vec![AppCommand::DragActiveVertex {
                    world_pos: state.view.screen_to_world(screen_pos),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::VertexReleased => vec![AppCommand::EndVertexDrag],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ViewWindowChanged { min, max } => vec![AppCommand::SetViewWindow { min, max }],
        AppIntent::FitViewRequested => vec![AppCommand::FitView],
    }
}
