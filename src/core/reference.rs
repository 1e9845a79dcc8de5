//! Referenz-Polylinien zum Vergleich (nicht editierbar).

use glam::DVec2;

/// Eine geladene Vergleichslinie.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceOverlay {
    /// Anzeigename (Dateiname ohne Verzeichnis)
    pub name: String,
    pub points: Vec<DVec2>,
}

impl ReferenceOverlay {
    pub fn new(name: impl Into<String>, points: Vec<DVec2>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Achsenparallele Bounding-Box, `None` bei leerer Linie.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}
