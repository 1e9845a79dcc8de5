//! Use-Case: Kontrollpunkt-Drag mit Zwangsbedingungen.

use crate::app::AppState;
use crate::core::{apply_drag, DragResolution};
use glam::DVec2;

/// Greift den nächstgelegenen Kontrollpunkt innerhalb des Pick-Radius.
///
/// Gibt den getroffenen Index zurück; ein Fehlgriff lässt den Zustand unverändert.
pub fn begin_vertex_drag(
    state: &mut AppState,
    screen_pos: DVec2,
    max_pixel_distance: f64,
) -> Option<usize> {
    if !state.editor.show_vertices {
        return None;
    }

    let hit = state
        .path
        .nearest_vertex(screen_pos, &state.view, max_pixel_distance);
    match hit {
        Some(index) => {
            state.editor.active_vertex = Some(index);
            state.editor.drag_recorded = false;
            log::debug!("Kontrollpunkt #{} gegriffen", index);
        }
        None => {
            state.editor.clear_drag();
            log::debug!(
                "Kein Kontrollpunkt innerhalb {:.1}px bei ({:.1}, {:.1})",
                max_pixel_distance,
                screen_pos.x,
                screen_pos.y
            );
        }
    }
    hit
}

/// Zieht den gegriffenen Kontrollpunkt auf `world_pos` und löst die Zwangsbedingung.
///
/// Der erste Schritt eines Drags legt einen Undo-Snapshot an.
pub fn drag_active_vertex(state: &mut AppState, world_pos: DVec2) -> Option<DragResolution> {
    let index = state.editor.active_vertex?;

    if !state.editor.drag_recorded {
        state.record_undo_snapshot();
        state.editor.drag_recorded = true;
    }

    let mode = state.editor.mode;
    apply_drag(state.path_mut(), index, world_pos, mode)
}

/// Beendet den Drag.
pub fn end_vertex_drag(state: &mut AppState) {
    state.editor.clear_drag();
}
