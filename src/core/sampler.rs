//! Bogenlängen-Abtastung eines Bezier-Pfads zu einer Trajektorie.
//!
//! Zwei reine Durchläufe:
//! 1. [`sample_by_arc_length`]: Kurven über eine Längen-LUT ablaufen und alle
//!    `step` Einheiten eine Probe auf der parametrischen Kurve nehmen.
//! 2. [`even_out`]: die Proben auf `round(L / step)` gleich lange Intervalle
//!    umverteilen.
//!
//! [`sample_trajectory`] setzt beide zusammen und baut die Datensätze.

use super::bezier::Segment;
use super::path_model::PathModel;
use super::trajectory::{
    curves_from_knot_records, extract_knot_records, Trajectory, TrajectoryRecord,
};
use glam::DVec2;
use std::f64::consts::{PI, TAU};
use thiserror::Error;

/// Standard-Abstand zwischen zwei Proben (Daten-Einheiten).
pub const DEFAULT_SAMPLE_STEP: f64 = 0.02;

/// Standard-Anzahl gleich langer t-Intervalle je Segment für die Längen-LUT.
pub const DEFAULT_ARC_SUBDIVISIONS: usize = 1000;

/// Unterhalb dieser Gesamtlänge gilt ein Pfad als entartet.
const MIN_TOTAL_LENGTH: f64 = 1e-12;

/// Anteil von `step`, unterhalb dessen ein Rest als leer gilt.
const REMAINDER_FRACTION: f64 = 1e-6;

/// Obergrenze für die Probenanzahl eines Durchlaufs.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Fehler bei der Abtastung.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("Pfad ist leer, es gibt nichts abzutasten")]
    EmptyPath,
    #[error("Pfad hat die Gesamtlänge 0")]
    ZeroLength,
    #[error("Ungültige Schrittweite {0} (muss endlich und > 0 sein)")]
    InvalidStep(f64),
    #[error("Anzahl der Unterteilungen muss > 0 sein")]
    InvalidSubdivisions,
    #[error("Schrittweite ergibt {requested:.0} Proben, erlaubt sind höchstens {max}", max = MAX_SAMPLES)]
    TooManySamples { requested: f64 },
}

/// Parameter der Abtastung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Abstand zwischen zwei Proben
    pub step: f64,
    /// Zweiter Durchlauf (gleichmäßige Umverteilung) aktiv
    pub evenly_space: bool,
    /// t-Intervalle je Segment für die Bogenlängen-LUT
    pub subdivisions: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_SAMPLE_STEP,
            evenly_space: true,
            subdivisions: DEFAULT_ARC_SUBDIVISIONS,
        }
    }
}

impl SamplerConfig {
    fn validate(&self) -> Result<(), SampleError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SampleError::InvalidStep(self.step));
        }
        if self.subdivisions == 0 {
            return Err(SampleError::InvalidSubdivisions);
        }
        Ok(())
    }
}

/// Eine Probe auf dem Pfad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: DVec2,
    /// Fahrtrichtung in Radiant
    pub heading: f64,
    /// Bogenlänge vom Pfadanfang
    pub station: f64,
}

/// LUT-Eintrag: kumulierte Länge am Ende eines t-Intervalls.
#[derive(Debug, Clone, Copy)]
struct ArcEntry {
    segment: usize,
    t: f64,
    length: f64,
}

fn build_arc_table(curves: &[Segment], subdivisions: usize) -> Vec<ArcEntry> {
    let mut table = Vec::with_capacity(curves.len() * subdivisions + 1);
    let Some(first) = curves.first() else {
        return table;
    };
    table.push(ArcEntry {
        segment: 0,
        t: 0.0,
        length: 0.0,
    });

    let mut cumulative = 0.0;
    let mut prev = first.start;
    for (segment, curve) in curves.iter().enumerate() {
        for i in 1..=subdivisions {
            let t = i as f64 / subdivisions as f64;
            let p = curve.point_at(t);
            cumulative += prev.distance(p);
            table.push(ArcEntry {
                segment,
                t,
                length: cumulative,
            });
            prev = p;
        }
        prev = curve.end;
    }
    table
}

/// Segment und Parameter t bei Bogenlänge `station` (lineare Interpolation in der LUT).
fn locate(table: &[ArcEntry], station: f64) -> (usize, f64) {
    let idx = table
        .partition_point(|entry| entry.length < station)
        .clamp(1, table.len() - 1);
    let before = table[idx - 1];
    let after = table[idx];

    let span = after.length - before.length;
    let frac = if span > f64::EPSILON {
        ((station - before.length) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };

    // Intervallanfang eines neuen Segments liegt bei t = 0
    let t_before = if before.segment == after.segment {
        before.t
    } else {
        0.0
    };
    (after.segment, t_before + (after.t - t_before) * frac)
}

/// Durchlauf 1: Probe bei Bogenlänge 0, step, 2·step, … plus Restprobe am Pfadende.
pub fn sample_by_arc_length(
    curves: &[Segment],
    step: f64,
    subdivisions: usize,
) -> Result<Vec<PathSample>, SampleError> {
    SamplerConfig {
        step,
        evenly_space: false,
        subdivisions,
    }
    .validate()?;
    if curves.is_empty() {
        return Err(SampleError::EmptyPath);
    }

    let table = build_arc_table(curves, subdivisions);
    let total = table.last().map_or(0.0, |entry| entry.length);
    if total < MIN_TOTAL_LENGTH {
        return Err(SampleError::ZeroLength);
    }

    let sample_at = |station: f64| {
        let (segment, t) = locate(&table, station);
        let curve = &curves[segment];
        PathSample {
            position: curve.point_at(t),
            heading: curve.heading_at(t),
            station,
        }
    };

    let requested = (total / step).floor();
    if requested >= MAX_SAMPLES as f64 {
        return Err(SampleError::TooManySamples { requested });
    }
    let full_steps = requested as usize;
    let mut samples = Vec::with_capacity(full_steps + 2);
    for k in 0..=full_steps {
        samples.push(sample_at(k as f64 * step));
    }

    let last_station = full_steps as f64 * step;
    if total - last_station > step * REMAINDER_FRACTION {
        samples.push(sample_at(total));
    }
    Ok(samples)
}

/// Durchlauf 2: gleichmäßige Umverteilung auf `max(1, round(L / step))` Intervalle.
///
/// Offener Pfad: n+1 Proben inklusive beider Enden. Geschlossener Pfad: n
/// Proben, der Schlusspunkt fällt mit der ersten Probe zusammen.
pub fn even_out(samples: &[PathSample], step: f64, closed: bool) -> Vec<PathSample> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Vec::new();
    };
    let total = last.station - first.station;
    if samples.len() < 2 || total <= 0.0 || step <= 0.0 {
        return samples.to_vec();
    }

    let intervals = ((total / step).round() as usize).clamp(1, MAX_SAMPLES);
    let spacing = total / intervals as f64;
    let count = if closed { intervals } else { intervals + 1 };

    (0..count)
        .map(|i| {
            let station = first.station + i as f64 * spacing;
            let idx = samples
                .partition_point(|s| s.station < station)
                .clamp(1, samples.len() - 1);
            let a = &samples[idx - 1];
            let b = &samples[idx];
            let span = b.station - a.station;
            let frac = if span > f64::EPSILON {
                ((station - a.station) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            PathSample {
                position: a.position.lerp(b.position, frac),
                heading: lerp_angle(a.heading, b.heading, frac),
                station,
            }
        })
        .collect()
}

/// Winkel-Interpolation entlang des kürzeren Bogens, Ergebnis in (-π, π].
pub fn lerp_angle(from: f64, to: f64, frac: f64) -> f64 {
    let delta = (to - from + PI).rem_euclid(TAU) - PI;
    wrap_angle(from + delta * frac)
}

fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Baut Datensätze aus Proben: Tangentenlängen = Abstand zur Nachbarprobe.
pub fn assemble_records(samples: &[PathSample], closed: bool) -> Vec<TrajectoryRecord> {
    let count = samples.len();
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let next = if i + 1 < count {
                Some(&samples[i + 1])
            } else if closed && count > 1 {
                Some(&samples[0])
            } else {
                None
            };
            let prev = if i > 0 {
                Some(&samples[i - 1])
            } else if closed && count > 1 {
                Some(&samples[count - 1])
            } else {
                None
            };

            TrajectoryRecord {
                yaw: sample.heading,
                forward_tangent_length: next.map_or(0.0, |n| sample.position.distance(n.position)),
                backward_tangent_length: prev
                    .map_or(0.0, |p| sample.position.distance(p.position)),
                corridor_limit_a: sample.position,
                corridor_limit_b: sample.position,
                blend_ratio: 0.0,
            }
        })
        .collect()
}

/// Entfernt die Schlussprobe eines geschlossenen Pfads, wenn sie auf der ersten liegt.
///
/// Die Nahtlücke steckt dann in den umlaufenden Tangentenlängen.
fn drop_closing_duplicate(mut samples: Vec<PathSample>, step: f64) -> Vec<PathSample> {
    if samples.len() > 2 {
        let first = samples[0].position;
        if samples
            .last()
            .is_some_and(|last| last.position.distance(first) <= step * REMAINDER_FRACTION)
        {
            samples.pop();
        }
    }
    samples
}

/// Knotendatensätze → rekonstruierte Kurven → Durchlauf 1 → (Durchlauf 2) → Datensätze.
pub fn sample_trajectory(path: &PathModel, config: &SamplerConfig) -> Result<Trajectory, SampleError> {
    config.validate()?;
    if path.is_empty() {
        return Err(SampleError::EmptyPath);
    }

    let closed = path.is_closed();
    let knots = extract_knot_records(path);
    let curves = curves_from_knot_records(&knots, closed);

    let raw = sample_by_arc_length(&curves, config.step, config.subdivisions)?;
    let total_length = raw.last().map_or(0.0, |s| s.station);
    let samples = if config.evenly_space {
        even_out(&raw, config.step, closed)
    } else if closed {
        drop_closing_duplicate(raw, config.step)
    } else {
        raw
    };

    log::debug!(
        "Abtastung: {} Segmente, Länge {:.4}, {} Proben (gleichmäßig: {})",
        curves.len(),
        total_length,
        samples.len(),
        config.evenly_space
    );

    Ok(Trajectory {
        records: assemble_records(&samples, closed),
        total_length,
        closed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn straight(length: f64) -> PathModel {
        PathModel::from_segments(&[Segment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(length / 3.0, 0.0),
            DVec2::new(2.0 * length / 3.0, 0.0),
            DVec2::new(length, 0.0),
        )])
    }

    /// Zwei Segmente mit stark unterschiedlicher Krümmung, tangentenstetig verbunden.
    fn wiggly() -> PathModel {
        PathModel::from_segments(&[
            Segment::new(
                DVec2::new(0.0, 0.0),
                DVec2::new(0.2, 1.5),
                DVec2::new(1.0, 1.0),
                DVec2::new(1.5, 0.5),
            ),
            Segment::new(
                DVec2::new(1.5, 0.5),
                DVec2::new(2.0, 0.0),
                DVec2::new(4.0, 0.2),
                DVec2::new(5.0, 0.1),
            ),
        ])
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let result = sample_trajectory(&PathModel::new(), &SamplerConfig::default());
        assert_eq!(result, Err(SampleError::EmptyPath));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let path = straight(1.0);
        let bad_step = SamplerConfig {
            step: 0.0,
            ..SamplerConfig::default()
        };
        assert_eq!(
            sample_trajectory(&path, &bad_step),
            Err(SampleError::InvalidStep(0.0))
        );
        let bad_subdivisions = SamplerConfig {
            subdivisions: 0,
            ..SamplerConfig::default()
        };
        assert_eq!(
            sample_trajectory(&path, &bad_subdivisions),
            Err(SampleError::InvalidSubdivisions)
        );
    }

    #[test]
    fn test_collapsed_path_has_zero_length() {
        let p = DVec2::new(1.0, 1.0);
        let path = PathModel::from_segments(&[Segment::new(p, p, p, DVec2::new(1.0, 1.0))]);
        assert_eq!(
            sample_trajectory(&path, &SamplerConfig::default()),
            Err(SampleError::ZeroLength)
        );
    }

    #[test]
    fn test_first_pass_emits_remainder_sample() {
        let curves = straight(1.05).segments();
        let samples = sample_by_arc_length(&curves, 0.1, 200).unwrap();
        // 0.0, 0.1, …, 1.0 plus Rest bei 1.05
        assert_eq!(samples.len(), 12);
        assert_relative_eq!(samples[10].station, 1.0, epsilon = 1e-12);
        assert_relative_eq!(samples[11].position.x, 1.05, epsilon = 1e-9);
    }

    #[test]
    fn test_straight_line_open_sample_count() {
        let trajectory = sample_trajectory(&straight(1.0), &SamplerConfig::default()).unwrap();
        assert_eq!(trajectory.len(), 51);
        assert!(!trajectory.closed);
        assert_relative_eq!(trajectory.total_length, 1.0, epsilon = 1e-9);

        let first = trajectory.records.first().unwrap();
        let last = trajectory.records.last().unwrap();
        assert_eq!(first.backward_tangent_length, 0.0);
        assert_eq!(last.forward_tangent_length, 0.0);
        assert_abs_diff_eq!(last.corridor_limit_a.x, 1.0, epsilon = 1e-9);
        assert!(trajectory.records.iter().all(|r| r.yaw.abs() < 1e-9));
    }

    #[test]
    fn test_even_spacing_on_varying_curvature() {
        let config = SamplerConfig::default();
        let trajectory = sample_trajectory(&wiggly(), &config).unwrap();
        let spacings: Vec<f64> = trajectory
            .records
            .windows(2)
            .map(|w| w[0].corridor_limit_a.distance(w[1].corridor_limit_a))
            .collect();
        let max = spacings.iter().cloned().fold(f64::MIN, f64::max);
        let min = spacings.iter().cloned().fold(f64::MAX, f64::min);
        assert!(
            max - min < 0.01 * config.step,
            "Abstände schwanken zu stark: {min} .. {max}"
        );
    }

    #[test]
    fn test_closed_path_wraps_tangent_lengths() {
        let path = crate::core::polygon::regular_polygon_path(
            &crate::core::ViewWindow::default(),
            4,
        )
        .unwrap();
        let trajectory = sample_trajectory(&path, &SamplerConfig::default()).unwrap();
        assert!(trajectory.closed);

        let first = trajectory.records.first().unwrap();
        let last = trajectory.records.last().unwrap();
        assert!(first.backward_tangent_length > 0.0);
        assert_abs_diff_eq!(
            first.backward_tangent_length,
            last.forward_tangent_length,
            epsilon = 1e-12
        );
        // Kein doppelter Schlusspunkt
        assert!(first.corridor_limit_a.distance(last.corridor_limit_a) > 1e-3);
    }

    #[test]
    fn test_closed_path_first_pass_only_wraps_past_seam() {
        let path = crate::core::polygon::regular_polygon_path(
            &crate::core::ViewWindow::default(),
            4,
        )
        .unwrap();
        let config = SamplerConfig {
            evenly_space: false,
            ..SamplerConfig::default()
        };
        let trajectory = sample_trajectory(&path, &config).unwrap();

        let first = trajectory.records.first().unwrap();
        let last = trajectory.records.last().unwrap();
        assert!(first.corridor_limit_a.distance(last.corridor_limit_a) > 1e-9);
        assert!(first.backward_tangent_length > 0.0);
        assert!(first.backward_tangent_length <= config.step + 1e-9);
        assert_abs_diff_eq!(
            first.backward_tangent_length,
            last.forward_tangent_length,
            epsilon = 1e-12
        );
        assert!(trajectory
            .records
            .iter()
            .all(|r| r.forward_tangent_length > 0.0 && r.backward_tangent_length > 0.0));
    }

    #[test]
    fn test_tiny_step_is_rejected_instead_of_overflowing() {
        let config = SamplerConfig {
            step: 1e-300,
            ..SamplerConfig::default()
        };
        assert!(matches!(
            sample_trajectory(&straight(1.0), &config),
            Err(SampleError::TooManySamples { .. })
        ));
    }

    #[test]
    fn test_lerp_angle_takes_short_way() {
        let mid = lerp_angle(PI - 0.1, -PI + 0.1, 0.5);
        assert_abs_diff_eq!(mid.abs(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_angle(0.2, 0.4, 0.5), 0.3, epsilon = 1e-12);
    }
}
