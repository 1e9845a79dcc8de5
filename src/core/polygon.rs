//! Startpfad als regelmäßiges N-Eck aus tangentenstetigen Bezier-Bögen.

use super::bezier::Segment;
use super::path_model::PathModel;
use super::view::ViewWindow;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};
use thiserror::Error;

/// Fehler beim Erzeugen des Startpfads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("Anzahl der Knoten muss mindestens 1 sein")]
    NoNodes,
}

fn direction(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Geschlossener Pfad mit `node_count` Knoten auf dem Inkreis des Sichtfensters.
///
/// Radius = halbe kleinere Ausdehnung, Kontrollpunkte liegen tangential im
/// Abstand `radius / 2`. Das letzte Segment endet bei Winkel 0 und damit exakt
/// auf dem ersten Startpunkt.
pub fn regular_polygon_path(view: &ViewWindow, node_count: usize) -> Result<PathModel, PolygonError> {
    if node_count == 0 {
        return Err(PolygonError::NoNodes);
    }

    let center = view.center();
    let radius = view.extent().min_element() * 0.5;
    let handle = radius * 0.5;
    let angle_of = |i: usize| {
        if i == node_count {
            0.0
        } else {
            TAU * i as f64 / node_count as f64
        }
    };

    let segments: Vec<Segment> = (0..node_count)
        .map(|i| {
            let a = angle_of(i);
            let b = angle_of(i + 1);
            let start = center + direction(a) * radius;
            let end = center + direction(b) * radius;
            Segment::new(
                start,
                start + direction(a + FRAC_PI_2) * handle,
                end + direction(b - FRAC_PI_2) * handle,
                end,
            )
        })
        .collect();

    log::info!(
        "Neuer Pfad: {} Knoten, Radius {:.3} um ({:.3}, {:.3})",
        node_count,
        radius,
        center.x,
        center.y
    );
    Ok(PathModel::from_segments(&segments))
}
