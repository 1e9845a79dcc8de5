//! Use-Case: Umschalter für Sichtbarkeit und Kontinuitätsmodus.

use crate::app::AppState;
use crate::core::ContinuityMode;

/// Blendet Kontrollpunkte ein oder aus. Ein laufender Drag wird immer beendet.
pub fn toggle_vertex_visibility(state: &mut AppState) {
    state.editor.show_vertices = !state.editor.show_vertices;
    state.editor.clear_drag();
    log::info!(
        "Kontrollpunkte {}",
        if state.editor.show_vertices {
            "eingeblendet"
        } else {
            "ausgeblendet"
        }
    );
}

/// Schaltet zwischen Free und HeadingLocked um, ohne Geometrie zu verändern.
pub fn toggle_continuity_mode(state: &mut AppState) {
    state.editor.mode = state.editor.mode.toggled();
    match state.editor.mode {
        ContinuityMode::HeadingLocked => log::info!("Lock heading"),
        ContinuityMode::Free => log::info!("Unlock heading"),
    }
}
