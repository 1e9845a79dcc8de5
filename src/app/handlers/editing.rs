//! Handler für Pfad-Bearbeitung (Drag, Umschalter, neuer Pfad).

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Greift einen Kontrollpunkt per Hit-Test.
pub fn begin_drag(state: &mut AppState, screen_pos: DVec2, max_pixel_distance: f64) {
    use_cases::editing::begin_vertex_drag(state, screen_pos, max_pixel_distance);
}

/// Zieht den gegriffenen Kontrollpunkt.
pub fn drag(state: &mut AppState, world_pos: DVec2) {
    use_cases::editing::drag_active_vertex(state, world_pos);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_vertex_drag(state);
}

/// Kontrollpunkte ein-/ausblenden.
pub fn toggle_vertex_visibility(state: &mut AppState) {
    use_cases::editing::toggle_vertex_visibility(state);
}

/// Kontinuitätsmodus umschalten.
pub fn toggle_continuity_mode(state: &mut AppState) {
    use_cases::editing::toggle_continuity_mode(state);
}

/// Neuen N-Eck-Pfad anlegen.
pub fn create_regular_polygon(state: &mut AppState, node_count: usize) -> anyhow::Result<()> {
    use_cases::editing::create_regular_polygon(state, node_count)
}
