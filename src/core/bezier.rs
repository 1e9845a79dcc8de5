//! Kubische Bezier-Segmente: Auswertung, Ableitung und Fahrtrichtung.

use glam::DVec2;

/// Ein Kontrollpunkt in Daten-Koordinaten (planar, x/y).
pub type ControlPoint = DVec2;

/// Unterhalb dieser Länge gilt die Ableitung als entartet (Kontrollpunkt liegt auf dem Endpunkt).
const DERIVATIVE_EPSILON: f64 = 1e-12;

/// Schrittweite im Parameterraum für die Ersatz-Richtung bei entarteter Ableitung.
const HEADING_FALLBACK_DT: f64 = 1e-4;

/// Kubisches Bezier-Segment aus vier Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt (P0)
    pub start: ControlPoint,
    /// Erster Kontrollpunkt (P1), bestimmt die Abfahrtsrichtung
    pub ctrl1: ControlPoint,
    /// Zweiter Kontrollpunkt (P2), bestimmt die Ankunftsrichtung
    pub ctrl2: ControlPoint,
    /// Endpunkt (P3)
    pub end: ControlPoint,
}

impl Segment {
    /// Erstellt ein Segment aus vier Punkten.
    pub fn new(start: DVec2, ctrl1: DVec2, ctrl2: DVec2, end: DVec2) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Gibt die Kontrollpunkte in Speicherreihenfolge zurück.
    pub fn points(&self) -> [DVec2; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Position auf der Kurve bei Parameter `t` ∈ [0, 1].
    pub fn point_at(&self, t: f64) -> DVec2 {
        cubic_bezier(self.start, self.ctrl1, self.ctrl2, self.end, t)
    }

    /// Erste Ableitung dB/dt bei Parameter `t`.
    pub fn derivative_at(&self, t: f64) -> DVec2 {
        cubic_bezier_derivative(self.start, self.ctrl1, self.ctrl2, self.end, t)
    }

    /// Fahrtrichtung (Radiant, -π..π) bei Parameter `t`.
    ///
    /// Liegt ein Kontrollpunkt auf seinem Endpunkt, verschwindet die Ableitung
    /// an dieser Stelle. Dann wird die Richtung aus einer kleinen Sehne um `t`
    /// bestimmt, zuletzt aus der Gesamtsehne des Segments.
    pub fn heading_at(&self, t: f64) -> f64 {
        let derivative = self.derivative_at(t);
        if derivative.length() > DERIVATIVE_EPSILON {
            return derivative.y.atan2(derivative.x);
        }

        let before = self.point_at((t - HEADING_FALLBACK_DT).max(0.0));
        let after = self.point_at((t + HEADING_FALLBACK_DT).min(1.0));
        let chord = after - before;
        if chord.length() > DERIVATIVE_EPSILON {
            return chord.y.atan2(chord.x);
        }

        let span = self.end - self.start;
        if span.length() > DERIVATIVE_EPSILON {
            span.y.atan2(span.x)
        } else {
            0.0
        }
    }

    /// Approximierte Bogenlänge über `subdivisions` gleichlange t-Intervalle.
    pub fn approx_length(&self, subdivisions: usize) -> f64 {
        let steps = subdivisions.max(1);
        let mut length = 0.0;
        let mut prev = self.start;
        for i in 1..=steps {
            let p = self.point_at(i as f64 / steps as f64);
            length += prev.distance(p);
            prev = p;
        }
        length
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
pub fn cubic_bezier_derivative(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn straight() -> Segment {
        Segment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, 0.0),
        )
    }

    #[test]
    fn test_endpoints_are_interpolated() {
        let seg = Segment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, -1.0),
            DVec2::new(4.0, 0.0),
        );
        assert_eq!(seg.point_at(0.0), seg.start);
        assert_eq!(seg.point_at(1.0), seg.end);
    }

    #[test]
    fn test_straight_segment_length_and_heading() {
        let seg = straight();
        assert_relative_eq!(seg.approx_length(64), 3.0, epsilon = 1e-12);
        assert_relative_eq!(seg.heading_at(0.5), 0.0);
        assert_relative_eq!(seg.point_at(0.5).x, 1.5);
    }

    #[test]
    fn test_heading_falls_back_when_control_point_sits_on_endpoint() {
        let seg = Segment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(0.0, 2.0),
        );
        assert!(seg.derivative_at(0.0).length() < 1e-15);
        assert_relative_eq!(seg.heading_at(0.0), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_fully_collapsed_segment_has_zero_heading() {
        let p = DVec2::new(5.0, 5.0);
        let seg = Segment::new(p, p, p, p);
        assert_eq!(seg.heading_at(0.3), 0.0);
        assert_eq!(seg.approx_length(10), 0.0);
    }
}
