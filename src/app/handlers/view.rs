//! Handler für Sichtfenster und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Setzt die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f64; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Setzt den sichtbaren Datenbereich.
pub fn set_view_window(state: &mut AppState, min: DVec2, max: DVec2) {
    use_cases::viewport::set_view_window(state, min, max);
}

/// Passt das Sichtfenster an den Inhalt an.
pub fn fit(state: &mut AppState) {
    use_cases::viewport::fit_to_content(state);
}
