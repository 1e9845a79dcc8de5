//! Use-Case-Funktionen für das Sichtfenster.

use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die Viewport-Größe in Pixeln.
pub fn resize(state: &mut AppState, size: [f64; 2]) {
    state.view.set_viewport_size(DVec2::from_array(size));
}

/// Setzt den sichtbaren Datenbereich (z.B. nach Zoom/Pan im Host).
pub fn set_view_window(state: &mut AppState, min: DVec2, max: DVec2) {
    let viewport = state.view.viewport_px;
    state.view = crate::core::ViewWindow::new(min, max, viewport);
}

/// Passt das Sichtfenster an Pfad und Referenzlinien an. Ohne Inhalt keine Änderung.
pub fn fit_to_content(state: &mut AppState) {
    let bounds = state
        .path
        .bounds()
        .into_iter()
        .chain(state.references.iter().filter_map(|r| r.bounds()))
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)));

    if let Some((min, max)) = bounds {
        state.view.fit_to_bounds(min, max);
    }
}
