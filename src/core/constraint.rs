//! Zwangsbedingungen beim Ziehen von Kontrollpunkten.
//!
//! Jeder Drag wird auf dem normalisierten [`KnotWindow`] des gezogenen Punkts
//! gelöst und danach über die Umkehrabbildung ins Modell geschrieben. Der Solver
//! hält keinen Zustand zwischen zwei Aufrufen.

use super::path_model::{KnotWindow, PathModel, PointKind};
use glam::DVec2;

/// Kontinuitätsmodus für Tangenten-Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuityMode {
    /// Gegenüberliegender Kontrollpunkt wird gespiegelt (Richtung folgt, Länge bleibt)
    #[default]
    Free,
    /// Richtung durch den Knoten bleibt fest, nur die Tangentenlänge ändert sich
    HeadingLocked,
}

impl ContinuityMode {
    /// Gibt den jeweils anderen Modus zurück.
    pub fn toggled(self) -> Self {
        match self {
            Self::Free => Self::HeadingLocked,
            Self::HeadingLocked => Self::Free,
        }
    }
}

/// Welcher Zweig der Lotfußpunkt-Berechnung gegriffen hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionBranch {
    /// Endliche Steigung ungleich 0: Schnitt zweier Geraden in Steigungsform
    Sloped,
    /// Referenzgerade senkrecht (unendliche Steigung)
    Vertical,
    /// Referenzgerade waagerecht (Lot mit unendlicher Steigung)
    Horizontal,
}

/// Ergebnis eines aufgelösten Drag-Schritts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragResolution {
    /// Knoten samt anhängender Kontrollpunkte um `offset` verschoben
    Translated { offset: DVec2 },
    /// Gegenüberliegender Kontrollpunkt gespiegelt (Free)
    Mirrored,
    /// Gezogener Punkt auf die fixierte Richtung projiziert (HeadingLocked)
    Projected(ProjectionBranch),
    /// Keine Zwangsbedingung anwendbar (offenes Pfadende oder entartete Geometrie)
    Unconstrained,
}

/// Löst einen Drag von Kontrollpunkt `index` auf die Position `target`.
///
/// Gibt `None` zurück, wenn der Index nicht im Modell liegt.
pub fn apply_drag(
    path: &mut PathModel,
    index: usize,
    target: DVec2,
    mode: ContinuityMode,
) -> Option<DragResolution> {
    let window = path.window_for_vertex(index)?;
    let dragged = window.position_of(index)?;
    let mut points = path.read_window(&window);
    let resolution = solve_window(&mut points, dragged, target, mode);
    path.write_window(&window, &points);

    log::debug!(
        "Drag {:?} #{} → ({:.3}, {:.3}): {:?}",
        PointKind::of_index(index),
        index,
        target.x,
        target.y,
        resolution
    );
    Some(resolution)
}

/// Löst einen Drag auf einem normalisierten Fenster.
///
/// `dragged` ist die Slot-Position im Fenster (siehe [`KnotWindow`]-Konstanten).
pub fn solve_window(
    points: &mut [Option<DVec2>; 4],
    dragged: usize,
    target: DVec2,
    mode: ContinuityMode,
) -> DragResolution {
    match dragged {
        KnotWindow::INCOMING_END | KnotWindow::OUTGOING_START => {
            translate_knot(points, dragged, target)
        }
        _ => match mode {
            ContinuityMode::Free => mirror_sibling(points, dragged, target),
            ContinuityMode::HeadingLocked => project_onto_heading(points, dragged, target),
        },
    }
}

/// Slots (eigener Knoten, gegenüberliegender Kontrollpunkt, dessen Knoten) zu einem Tangenten-Slot.
fn tangent_layout(dragged: usize) -> (usize, usize, usize) {
    if dragged == KnotWindow::OUTGOING_CONTROL {
        (
            KnotWindow::OUTGOING_START,
            KnotWindow::INCOMING_CONTROL,
            KnotWindow::INCOMING_END,
        )
    } else {
        (
            KnotWindow::INCOMING_END,
            KnotWindow::OUTGOING_CONTROL,
            KnotWindow::OUTGOING_START,
        )
    }
}

/// Verschiebt Knoten und beide anhängenden Kontrollpunkte starr.
fn translate_knot(points: &mut [Option<DVec2>; 4], dragged: usize, target: DVec2) -> DragResolution {
    let Some(current) = points[dragged] else {
        return DragResolution::Unconstrained;
    };
    let offset = target - current;
    for point in points.iter_mut().flatten() {
        *point += offset;
    }
    DragResolution::Translated { offset }
}

/// Free: gezogener Punkt folgt dem Zeiger, der Gegenpunkt wird durch den Knoten gespiegelt.
///
/// Richtung = Winkel vom gezogenen Punkt zum Knoten, Länge = bisheriger
/// Abstand des Gegenpunkts zu seinem Knoten.
fn mirror_sibling(points: &mut [Option<DVec2>; 4], dragged: usize, target: DVec2) -> DragResolution {
    let (knot_slot, sibling_slot, sibling_knot_slot) = tangent_layout(dragged);
    points[dragged] = Some(target);

    let (Some(knot), Some(sibling), Some(sibling_knot)) =
        (points[knot_slot], points[sibling_slot], points[sibling_knot_slot])
    else {
        return DragResolution::Unconstrained;
    };

    // Zeiger auf dem Knoten: Richtung undefiniert, Gegenpunkt bleibt
    if target == knot {
        return DragResolution::Unconstrained;
    }

    let direction = (knot.y - target.y).atan2(knot.x - target.x);
    let distance = sibling.distance(sibling_knot);
    points[sibling_slot] = Some(knot + DVec2::new(direction.cos(), direction.sin()) * distance);
    DragResolution::Mirrored
}

/// HeadingLocked: gezogener Punkt wird auf die Gerade Gegenpunkt–Knoten gelotet.
fn project_onto_heading(
    points: &mut [Option<DVec2>; 4],
    dragged: usize,
    target: DVec2,
) -> DragResolution {
    let (_, sibling_slot, sibling_knot_slot) = tangent_layout(dragged);

    let projected = match (points[sibling_slot], points[sibling_knot_slot]) {
        (Some(sibling), Some(knot)) => perpendicular_foot(sibling, knot, target),
        _ => None,
    };

    match projected {
        Some((foot, branch)) => {
            points[dragged] = Some(foot);
            DragResolution::Projected(branch)
        }
        None => {
            points[dragged] = Some(target);
            DragResolution::Unconstrained
        }
    }
}

/// Achsen-Toleranz: Anteil der Gegenkomponente, ab dem eine Gerade als
/// senkrecht bzw. waagerecht gilt.
const AXIS_TOLERANCE: f64 = 1e-12;

/// Lotfußpunkt von `pointer` auf die Gerade durch `p` und `q`.
///
/// Schneidet die Gerade (Steigung `m`) mit ihrer Senkrechten durch den Zeiger
/// (Steigung `-1/m`), gerechnet in Koordinaten relativ zu `q`. Senkrechte und
/// waagerechte Geraden werden vor jeder Division über direkte
/// Koordinaten-Einsetzung behandelt. Fallen `p` und `q` zusammen, ist keine
/// Richtung definiert (`None`).
pub fn perpendicular_foot(p: DVec2, q: DVec2, pointer: DVec2) -> Option<(DVec2, ProjectionBranch)> {
    let dx = p.x - q.x;
    let dy = p.y - q.y;

    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    if dx.abs() <= AXIS_TOLERANCE * dy.abs() {
        return Some((DVec2::new(q.x, pointer.y), ProjectionBranch::Vertical));
    }
    if dy.abs() <= AXIS_TOLERANCE * dx.abs() {
        return Some((DVec2::new(pointer.x, q.y), ProjectionBranch::Horizontal));
    }

    let local = pointer - q;
    let slope = dy / dx;
    let slope_ortho = -1.0 / slope;
    let intercept_ortho = local.y - local.x * slope_ortho;

    // Gerade läuft durch den Ursprung (q), Achsenabschnitt 0
    let x = intercept_ortho / (slope - slope_ortho);
    let y = slope * x;
    Some((q + DVec2::new(x, y), ProjectionBranch::Sloped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Segment;
    use approx::assert_abs_diff_eq;

    /// Geschlossener Pfad aus zwei Segmenten mit tangentenstetigem Knoten bei (4,0).
    fn closed_path() -> PathModel {
        PathModel::from_segments(&[
            Segment::new(
                DVec2::new(0.0, 0.0),
                DVec2::new(0.0, -2.0),
                DVec2::new(4.0, -2.0),
                DVec2::new(4.0, 0.0),
            ),
            Segment::new(
                DVec2::new(4.0, 0.0),
                DVec2::new(4.0, 2.0),
                DVec2::new(0.0, 2.0),
                DVec2::new(0.0, 0.0),
            ),
        ])
    }

    fn unit_dot(a: DVec2, b: DVec2, knot: DVec2) -> f64 {
        (a - knot).normalize().dot((b - knot).normalize())
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ContinuityMode::default(), ContinuityMode::Free);
        assert_eq!(ContinuityMode::Free.toggled(), ContinuityMode::HeadingLocked);
        assert_eq!(ContinuityMode::HeadingLocked.toggled(), ContinuityMode::Free);
    }

    #[test]
    fn test_endpoint_drag_translates_knot_and_attached_handles() {
        let mut path = closed_path();
        let far_before = path.vertex_at(6).unwrap();
        let resolution = apply_drag(&mut path, 3, DVec2::new(5.0, 1.0), ContinuityMode::Free);

        assert_eq!(
            resolution,
            Some(DragResolution::Translated {
                offset: DVec2::new(1.0, 1.0)
            })
        );
        assert_eq!(path.vertex_at(3), Some(DVec2::new(5.0, 1.0)));
        assert_eq!(path.vertex_at(4), Some(DVec2::new(5.0, 1.0)));
        assert_eq!(path.vertex_at(2), Some(DVec2::new(5.0, -1.0)));
        assert_eq!(path.vertex_at(5), Some(DVec2::new(5.0, 3.0)));
        // Ferne Kontrollpunkte bleiben unberührt
        assert_eq!(path.vertex_at(1), Some(DVec2::new(0.0, -2.0)));
        assert_eq!(path.vertex_at(6), Some(far_before));
    }

    #[test]
    fn test_free_drag_mirrors_sibling_with_previous_length() {
        let mut path = closed_path();
        // ctrl1 von Segment 1 (Index 5) ziehen, Gegenpunkt ist ctrl2 von Segment 0 (Index 2)
        let resolution = apply_drag(&mut path, 5, DVec2::new(6.0, 1.5), ContinuityMode::Free);
        assert_eq!(resolution, Some(DragResolution::Mirrored));

        let knot = path.vertex_at(4).unwrap();
        let sibling = path.vertex_at(2).unwrap();
        assert_abs_diff_eq!(sibling.distance(knot), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            unit_dot(path.vertex_at(5).unwrap(), sibling, knot),
            -1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_free_drag_across_wrap_boundary() {
        let mut path = closed_path();
        // ctrl2 des letzten Segments (Index 6) → Gegenpunkt ist ctrl1 von Segment 0 (Index 1)
        apply_drag(&mut path, 6, DVec2::new(-1.0, 3.0), ContinuityMode::Free);
        let knot = path.vertex_at(0).unwrap();
        assert_abs_diff_eq!(
            unit_dot(path.vertex_at(6).unwrap(), path.vertex_at(1).unwrap(), knot),
            -1.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(path.vertex_at(1).unwrap().distance(knot), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_free_drag_onto_knot_keeps_sibling() {
        let mut path = closed_path();
        let before = path.vertex_at(2);
        let resolution = apply_drag(&mut path, 5, DVec2::new(4.0, 0.0), ContinuityMode::Free);
        assert_eq!(resolution, Some(DragResolution::Unconstrained));
        assert_eq!(path.vertex_at(2), before);
    }

    #[test]
    fn test_free_drag_at_open_end_is_unconstrained() {
        let mut path = PathModel::from_segments(&[Segment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(3.0, 0.0),
        )]);
        let resolution = apply_drag(&mut path, 1, DVec2::new(0.5, 2.0), ContinuityMode::Free);
        assert_eq!(resolution, Some(DragResolution::Unconstrained));
        assert_eq!(path.vertex_at(1), Some(DVec2::new(0.5, 2.0)));
        assert_eq!(path.vertex_at(2), Some(DVec2::new(2.0, 1.0)));
    }

    #[test]
    fn test_heading_locked_vertical_reference() {
        let mut path = closed_path();
        // Referenzgerade durch (4,-2) und (4,0) ist senkrecht
        let resolution = apply_drag(
            &mut path,
            5,
            DVec2::new(7.0, 3.5),
            ContinuityMode::HeadingLocked,
        );
        assert_eq!(
            resolution,
            Some(DragResolution::Projected(ProjectionBranch::Vertical))
        );
        assert_eq!(path.vertex_at(5), Some(DVec2::new(4.0, 3.5)));
        // Gegenpunkt bleibt
        assert_eq!(path.vertex_at(2), Some(DVec2::new(4.0, -2.0)));
    }

    #[test]
    fn test_heading_locked_horizontal_reference() {
        let mut path = PathModel::from_segments(&[
            Segment::new(
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 0.0),
                DVec2::new(2.0, 0.0),
                DVec2::new(3.0, 0.0),
            ),
            Segment::new(
                DVec2::new(3.0, 0.0),
                DVec2::new(4.0, 0.0),
                DVec2::new(5.0, 1.0),
                DVec2::new(6.0, 1.0),
            ),
        ]);
        let resolution = apply_drag(
            &mut path,
            5,
            DVec2::new(4.5, 2.0),
            ContinuityMode::HeadingLocked,
        );
        assert_eq!(
            resolution,
            Some(DragResolution::Projected(ProjectionBranch::Horizontal))
        );
        assert_eq!(path.vertex_at(5), Some(DVec2::new(4.5, 0.0)));
    }

    #[test]
    fn test_heading_locked_sloped_reference_lies_on_line() {
        let sibling = DVec2::new(1.0, 1.0);
        let knot = DVec2::new(3.0, 2.0);
        let pointer = DVec2::new(6.0, 1.0);
        let (foot, branch) = perpendicular_foot(sibling, knot, pointer).unwrap();
        assert_eq!(branch, ProjectionBranch::Sloped);

        let line = (knot - sibling).normalize();
        // Fußpunkt liegt auf der Geraden durch den Knoten ...
        assert_abs_diff_eq!(line.perp_dot(foot - knot), 0.0, epsilon = 1e-9);
        // ... und das Lot vom Zeiger steht senkrecht darauf
        assert_abs_diff_eq!(line.dot(pointer - foot), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coincident_reference_points_have_no_heading() {
        let p = DVec2::new(2.0, 2.0);
        assert!(perpendicular_foot(p, p, DVec2::new(5.0, 5.0)).is_none());
    }

    #[test]
    fn test_apply_drag_out_of_range() {
        let mut path = closed_path();
        assert!(apply_drag(&mut path, 99, DVec2::ZERO, ContinuityMode::Free).is_none());
    }
}
