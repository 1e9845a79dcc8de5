//! Trajektorien-Datensätze (TTL) und ihre Ableitung aus Knotenfenstern.

use super::bezier::Segment;
use super::path_model::{KnotWindow, PathModel};
use glam::DVec2;

/// Anzahl der numerischen Spalten je Datensatz.
pub const RECORD_COLUMNS: usize = 8;

/// Ein Datensatz der exportierten Trajektorie.
///
/// Spaltenreihenfolge beim Export: yaw, forward, backward, limit_a.x, limit_a.y,
/// limit_b.x, limit_b.y, blend_ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRecord {
    /// Fahrtrichtung in Radiant (-π..π)
    pub yaw: f64,
    /// Tangentenlänge in Fahrtrichtung (≥ 0)
    pub forward_tangent_length: f64,
    /// Tangentenlänge entgegen der Fahrtrichtung (≥ 0)
    pub backward_tangent_length: f64,
    /// Erste Korridorgrenze
    pub corridor_limit_a: DVec2,
    /// Zweite Korridorgrenze
    pub corridor_limit_b: DVec2,
    /// Mischverhältnis zwischen den Grenzen (reserviert, immer 0.0)
    pub blend_ratio: f64,
}

impl TrajectoryRecord {
    /// Knotenposition: lineare Mischung der Korridorgrenzen.
    pub fn knot_position(&self) -> DVec2 {
        self.corridor_limit_a
            .lerp(self.corridor_limit_b, self.blend_ratio)
    }

    /// Einheitsvektor der Fahrtrichtung.
    pub fn heading(&self) -> DVec2 {
        DVec2::new(self.yaw.cos(), self.yaw.sin())
    }

    /// Datensatz als Tabellenzeile.
    pub fn to_row(&self) -> [f64; RECORD_COLUMNS] {
        [
            self.yaw,
            self.forward_tangent_length,
            self.backward_tangent_length,
            self.corridor_limit_a.x,
            self.corridor_limit_a.y,
            self.corridor_limit_b.x,
            self.corridor_limit_b.y,
            self.blend_ratio,
        ]
    }

    /// Datensatz aus einer Tabellenzeile.
    pub fn from_row(row: [f64; RECORD_COLUMNS]) -> Self {
        Self {
            yaw: row[0],
            forward_tangent_length: row[1],
            backward_tangent_length: row[2],
            corridor_limit_a: DVec2::new(row[3], row[4]),
            corridor_limit_b: DVec2::new(row[5], row[6]),
            blend_ratio: row[7],
        }
    }
}

/// Kopfzeile der Export-Datei.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryHeader {
    pub ttl_id: u32,
    pub record_count: usize,
    pub initial_forward_distance: f64,
}

/// Abgetastete Trajektorie (unveränderlich nach Erzeugung).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Datensätze in Fahrreihenfolge
    pub records: Vec<TrajectoryRecord>,
    /// Gesamte abgetastete Bogenlänge
    pub total_length: f64,
    /// Ob der Pfad geschlossen ist
    pub closed: bool,
}

impl Trajectory {
    /// Kopfzeile für den Export unter `ttl_id`.
    pub fn header(&self, ttl_id: u32) -> TrajectoryHeader {
        TrajectoryHeader {
            ttl_id,
            record_count: self.records.len(),
            initial_forward_distance: self.total_length,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ein Knotendatensatz je Segmentgrenze.
///
/// Fehlt an einem offenen Pfadende eine Seite, steht dort der Knoten selbst
/// (Tangentenlänge 0, Richtung aus dem vorhandenen Kontrollpunkt).
pub fn extract_knot_records(path: &PathModel) -> Vec<TrajectoryRecord> {
    (0..path.knot_count())
        .filter_map(|boundary| path.knot_window(boundary))
        .filter_map(|window| knot_record(path.read_window(&window)))
        .collect()
}

fn knot_record(window: [Option<DVec2>; 4]) -> Option<TrajectoryRecord> {
    let knot_in = window[KnotWindow::INCOMING_END];
    let knot_out = window[KnotWindow::OUTGOING_START];
    let knot = knot_out.or(knot_in)?;

    let w1 = knot_in.unwrap_or(knot);
    let w2 = knot_out.unwrap_or(knot);
    let w0 = window[KnotWindow::INCOMING_CONTROL].unwrap_or(w1);
    let w3 = window[KnotWindow::OUTGOING_CONTROL].unwrap_or(w2);

    let span = w3 - w0;
    Some(TrajectoryRecord {
        yaw: span.y.atan2(span.x),
        forward_tangent_length: w3.distance(w2),
        backward_tangent_length: w0.distance(w1),
        corridor_limit_a: w1,
        corridor_limit_b: w2,
        blend_ratio: 0.0,
    })
}

/// Rekonstruiert Bezier-Segmente aus Knotendatensätzen.
///
/// Segment k läuft von Knoten k zu Knoten k+1; bei geschlossenem Pfad schließt
/// das letzte Segment zurück zum ersten Knoten.
pub fn curves_from_knot_records(records: &[TrajectoryRecord], closed: bool) -> Vec<Segment> {
    let count = records.len();
    let segment_count = match count {
        0 => 0,
        _ if closed => count,
        _ => count - 1,
    };

    (0..segment_count)
        .map(|k| {
            let from = &records[k];
            let to = &records[(k + 1) % count];
            let start = from.knot_position();
            let end = to.knot_position();
            Segment::new(
                start,
                start + from.heading() * from.forward_tangent_length,
                end - to.heading() * to.backward_tangent_length,
                end,
            )
        })
        .collect()
}
