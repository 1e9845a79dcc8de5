//! Das Pfad-Modell: geordnete Bezier-Segmente als flache Kontrollpunkt-Folge.
//!
//! Jedes Segment belegt genau 4 Slots (start, ctrl1, ctrl2, end). Der Endpunkt
//! eines Segments und der Startpunkt des Folgesegments bilden einen logischen
//! Punkt: `set_vertex` schreibt immer beide Slots.

use super::bezier::Segment;
use super::view::ViewWindow;
use glam::DVec2;
use thiserror::Error;

/// Anzahl der Kontrollpunkte je Segment.
pub const POINTS_PER_SEGMENT: usize = 4;

/// Toleranz, ab der letzter Endpunkt und erster Startpunkt als geschlossen gelten.
pub const CLOSURE_EPSILON: f64 = 1e-9;

/// Toleranz für aneinanderstoßende Segmente beim Aufbau aus Rohdaten.
pub const CONNECT_EPSILON: f64 = 1e-6;

/// Fehler beim Aufbau eines Pfad-Modells aus Rohpunkten.
#[derive(Debug, Error, PartialEq)]
pub enum PathModelError {
    /// Keine Punkte vorhanden
    #[error("Der Pfad enthaelt keine Kontrollpunkte")]
    Empty,
    /// Punktanzahl ist kein Vielfaches von 4
    #[error("{count} Kontrollpunkte sind kein Vielfaches von 4 (start, ctrl1, ctrl2, end je Segment)")]
    RowCountNotMultipleOfFour { count: usize },
    /// Segment beginnt nicht am Ende des Vorgängers
    #[error("Segment {segment} beginnt nicht am Endpunkt seines Vorgaengers (Abstand {gap})")]
    DisconnectedSegment { segment: usize, gap: f64 },
}

/// Rolle eines Kontrollpunkts innerhalb seines Segments (`index % 4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Startpunkt des Segments
    SegmentStart,
    /// Erster Tangenten-Kontrollpunkt
    Control1,
    /// Zweiter Tangenten-Kontrollpunkt
    Control2,
    /// Endpunkt des Segments
    SegmentEnd,
}

impl PointKind {
    /// Klassifiziert einen flachen Index.
    pub fn of_index(index: usize) -> Self {
        match index % POINTS_PER_SEGMENT {
            0 => Self::SegmentStart,
            1 => Self::Control1,
            2 => Self::Control2,
            _ => Self::SegmentEnd,
        }
    }

    /// `true` für Start- und Endpunkte (Knoten der Kurve).
    pub fn is_endpoint(self) -> bool {
        matches!(self, Self::SegmentStart | Self::SegmentEnd)
    }
}

/// Normalisierte 4-Punkt-Sicht auf eine Segmentgrenze (Knoten).
///
/// Slot-Reihenfolge: `[ctrl2 des eingehenden Segments, Ende des eingehenden
/// Segments, Start des ausgehenden Segments, ctrl1 des ausgehenden Segments]`.
/// Die Einträge sind flache Indizes ins Pfad-Modell; an den Enden eines offenen
/// Pfads fehlt eine Seite (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnotWindow {
    /// Index der Segmentgrenze (0 = vor dem ersten Segment)
    pub boundary: usize,
    /// Flache Indizes der vier Slots
    pub slots: [Option<usize>; 4],
}

impl KnotWindow {
    /// Slot des Kontrollpunkts vor dem Knoten
    pub const INCOMING_CONTROL: usize = 0;
    /// Slot des Knotens als Ende des eingehenden Segments
    pub const INCOMING_END: usize = 1;
    /// Slot des Knotens als Start des ausgehenden Segments
    pub const OUTGOING_START: usize = 2;
    /// Slot des Kontrollpunkts nach dem Knoten
    pub const OUTGOING_CONTROL: usize = 3;

    /// Position eines flachen Index innerhalb des Fensters.
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(index))
    }

    /// Gibt zurück, ob ein eingehendes Segment existiert.
    pub fn has_incoming(&self) -> bool {
        self.slots[Self::INCOMING_END].is_some()
    }

    /// Gibt zurück, ob ein ausgehendes Segment existiert.
    pub fn has_outgoing(&self) -> bool {
        self.slots[Self::OUTGOING_START].is_some()
    }
}

/// Geordnete Folge kubischer Bezier-Segmente mit geteilten Endpunkten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathModel {
    points: Vec<DVec2>,
}

impl PathModel {
    /// Erstellt ein leeres Pfad-Modell.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Baut ein Modell aus Segmenten. Jeder Segmentstart wird exakt auf das
    /// Ende des Vorgängers gesetzt.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut points = Vec::with_capacity(segments.len() * POINTS_PER_SEGMENT);
        for segment in segments {
            let start = points.last().copied().unwrap_or(segment.start);
            points.extend([start, segment.ctrl1, segment.ctrl2, segment.end]);
        }
        Self { points }
    }

    /// Baut ein Modell aus der flachen Punktfolge (4 Punkte je Segment).
    ///
    /// Startpunkte innerhalb von [`CONNECT_EPSILON`] zum Vorgänger-Ende werden
    /// exakt angeglichen; größere Abstände sind ein Fehler. Liegt das letzte Ende
    /// ebenso nah am ersten Start, wird es auf diesen gesetzt (geschlossener Pfad).
    pub fn from_flat_points(mut points: Vec<DVec2>) -> Result<Self, PathModelError> {
        if points.is_empty() {
            return Err(PathModelError::Empty);
        }
        if points.len() % POINTS_PER_SEGMENT != 0 {
            return Err(PathModelError::RowCountNotMultipleOfFour {
                count: points.len(),
            });
        }

        for segment in 1..points.len() / POINTS_PER_SEGMENT {
            let start = segment * POINTS_PER_SEGMENT;
            let gap = points[start - 1].distance(points[start]);
            if gap > CONNECT_EPSILON {
                return Err(PathModelError::DisconnectedSegment { segment, gap });
            }
            points[start] = points[start - 1];
        }

        // Naht eines geschlossenen Pfads mit derselben Toleranz angleichen
        let last = points.len() - 1;
        if points[last].distance(points[0]) <= CONNECT_EPSILON {
            points[last] = points[0];
        }

        Ok(Self { points })
    }

    /// Gibt die flache Punktfolge zurück (exakte Umkehrung von `from_flat_points`).
    pub fn to_flat_points(&self) -> Vec<DVec2> {
        self.points.clone()
    }

    /// Read-only Sicht auf alle Kontrollpunkte.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Gesamtzahl der Kontrollpunkte (= 4·N).
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.points.len() / POINTS_PER_SEGMENT
    }

    /// Gibt `true` zurück, wenn keine Segmente vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Segment `index` als Wertobjekt.
    pub fn segment(&self, index: usize) -> Option<Segment> {
        let base = index * POINTS_PER_SEGMENT;
        let chunk = self.points.get(base..base + POINTS_PER_SEGMENT)?;
        Some(Segment::new(chunk[0], chunk[1], chunk[2], chunk[3]))
    }

    /// Alle Segmente in Pfadreihenfolge.
    pub fn segments(&self) -> Vec<Segment> {
        self.points
            .chunks_exact(POINTS_PER_SEGMENT)
            .map(|c| Segment::new(c[0], c[1], c[2], c[3]))
            .collect()
    }

    /// Position des Kontrollpunkts `index`.
    pub fn vertex_at(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    /// Geschlossen, wenn das letzte Ende auf dem ersten Start liegt.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.abs_diff_eq(*last, CLOSURE_EPSILON),
            _ => false,
        }
    }

    /// Zweiter Slot desselben logischen Endpunkts (falls vorhanden).
    pub fn twin_of(&self, index: usize) -> Option<usize> {
        let n = self.segment_count();
        if index >= self.points.len() {
            return None;
        }
        let segment = index / POINTS_PER_SEGMENT;
        match PointKind::of_index(index) {
            PointKind::SegmentEnd if segment + 1 < n => Some(index + 1),
            PointKind::SegmentEnd if self.is_closed() => Some(0),
            PointKind::SegmentStart if segment > 0 => Some(index - 1),
            PointKind::SegmentStart if self.is_closed() => Some(self.points.len() - 1),
            _ => None,
        }
    }

    /// Setzt einen Kontrollpunkt. Geteilte Endpunkte werden in beiden Slots gesetzt.
    ///
    /// Gibt `false` zurück, wenn der Index außerhalb liegt.
    pub fn set_vertex(&mut self, index: usize, position: DVec2) -> bool {
        if index >= self.points.len() {
            return false;
        }
        // Zwilling vor dem Schreiben bestimmen, sonst geht die Geschlossenheit verloren
        let twin = self.twin_of(index);
        self.points[index] = position;
        if let Some(twin) = twin {
            self.points[twin] = position;
        }
        true
    }

    /// Anzahl der Knoten (Segmentgrenzen): N bei geschlossenem, N+1 bei offenem Pfad.
    pub fn knot_count(&self) -> usize {
        let n = self.segment_count();
        match n {
            0 => 0,
            _ if self.is_closed() => n,
            _ => n + 1,
        }
    }

    /// Normalisiertes Fenster um Segmentgrenze `boundary`.
    pub fn knot_window(&self, boundary: usize) -> Option<KnotWindow> {
        let n = self.segment_count();
        if boundary >= self.knot_count() {
            return None;
        }

        let (incoming, outgoing) = if self.is_closed() {
            (Some((boundary + n - 1) % n), Some(boundary))
        } else {
            (
                boundary.checked_sub(1),
                (boundary < n).then_some(boundary),
            )
        };

        let base_in = incoming.map(|s| s * POINTS_PER_SEGMENT);
        let base_out = outgoing.map(|s| s * POINTS_PER_SEGMENT);
        Some(KnotWindow {
            boundary,
            slots: [
                base_in.map(|b| b + 2),
                base_in.map(|b| b + 3),
                base_out,
                base_out.map(|b| b + 1),
            ],
        })
    }

    /// Fenster, in dem ein gezogener Kontrollpunkt aufgelöst wird.
    ///
    /// Start und ctrl1 von Segment k gehören zu Grenze k, ctrl2 und Ende zu Grenze k+1.
    pub fn window_for_vertex(&self, index: usize) -> Option<KnotWindow> {
        if index >= self.points.len() {
            return None;
        }
        let segment = index / POINTS_PER_SEGMENT;
        let boundary = match PointKind::of_index(index) {
            PointKind::SegmentStart | PointKind::Control1 => segment,
            PointKind::Control2 | PointKind::SegmentEnd => segment + 1,
        };
        let boundary = if self.is_closed() {
            boundary % self.segment_count()
        } else {
            boundary
        };
        self.knot_window(boundary)
    }

    /// Liest die vier Punkte eines Fensters.
    pub fn read_window(&self, window: &KnotWindow) -> [Option<DVec2>; 4] {
        window
            .slots
            .map(|slot| slot.and_then(|index| self.points.get(index).copied()))
    }

    /// Schreibt die vier Punkte eines Fensters zurück (Umkehrabbildung zu `read_window`).
    pub fn write_window(&mut self, window: &KnotWindow, values: &[Option<DVec2>; 4]) {
        for (slot, value) in window.slots.iter().zip(values.iter()) {
            if let (Some(index), Some(value)) = (slot, value) {
                if let Some(point) = self.points.get_mut(*index) {
                    *point = *value;
                }
            }
        }
    }

    /// Index des nächstgelegenen Kontrollpunkts innerhalb von `max_pixel_distance`.
    ///
    /// Abstände werden im Bildschirmraum gemessen; bei Gleichstand gewinnt der
    /// kleinste Index. `None` = kein Treffer.
    pub fn nearest_vertex(
        &self,
        screen_pos: DVec2,
        view: &ViewWindow,
        max_pixel_distance: f64,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let distance = view.world_to_screen(*point).distance(screen_pos);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.filter(|(_, d)| *d < max_pixel_distance)
            .map(|(index, _)| index)
    }

    /// Achsenparallele Bounding-Box aller Kontrollpunkte.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}
