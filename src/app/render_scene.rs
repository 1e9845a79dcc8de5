//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::PathModel;
use crate::shared::RenderScene;
use glam::DVec2;
use std::sync::Arc;

/// Auswertungspunkte je Segment für die Kurven-Polylinie.
const CURVE_STEPS_PER_SEGMENT: usize = 50;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let path = state.path.as_ref();
    RenderScene {
        curve: curve_polyline(path),
        handles: handle_lines(path),
        vertices: path.points().to_vec(),
        show_vertices: state.editor.show_vertices,
        active_vertex: state.editor.active_vertex,
        heading_locked: state.editor.heading_locked(),
        references: Arc::new(state.references.clone()),
        view: state.view,
    }
}

fn curve_polyline(path: &PathModel) -> Vec<DVec2> {
    let segments = path.segments();
    let Some(first) = segments.first() else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(segments.len() * CURVE_STEPS_PER_SEGMENT + 1);
    points.push(first.start);
    for segment in &segments {
        for i in 1..=CURVE_STEPS_PER_SEGMENT {
            points.push(segment.point_at(i as f64 / CURVE_STEPS_PER_SEGMENT as f64));
        }
    }
    points
}

fn handle_lines(path: &PathModel) -> Vec<Vec<DVec2>> {
    (0..path.knot_count())
        .filter_map(|boundary| path.knot_window(boundary))
        .map(|window| {
            let mut line: Vec<DVec2> = path.read_window(&window).into_iter().flatten().collect();
            // Beide Kopien des Knotens liegen aufeinander
            line.dedup();
            line
        })
        .collect()
}
