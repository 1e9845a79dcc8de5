//! Use-Case: neuen Pfad als regelmäßiges N-Eck anlegen.

use crate::app::AppState;
use crate::core::regular_polygon_path;
use anyhow::Context;
use std::sync::Arc;

/// Ersetzt den Pfad durch ein N-Eck im aktuellen Sichtfenster.
///
/// Bei ungültiger Knotenanzahl bleibt der Zustand unverändert.
pub fn create_regular_polygon(state: &mut AppState, node_count: usize) -> anyhow::Result<()> {
    let path = regular_polygon_path(&state.view, node_count)
        .with_context(|| format!("Neuer Pfad mit {node_count} Knoten nicht möglich"))?;

    state.record_undo_snapshot();
    state.path = Arc::new(path);
    state.editor.clear_drag();
    state.ui.current_file_path = None;
    state.ui.status_message = Some(format!("Neuer Pfad mit {node_count} Knoten"));
    Ok(())
}
