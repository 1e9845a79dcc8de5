//! Sichtfenster: Abbildung zwischen Daten-Koordinaten und Bildschirm-Pixeln.

use glam::DVec2;

/// Sichtbarer Datenbereich plus Viewport-Größe in Pixeln.
///
/// Bildschirm-Koordinaten haben ihren Ursprung oben links, Y wächst nach unten.
/// Daten-Koordinaten haben Y nach oben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    /// Untere linke Ecke des Datenbereichs
    pub min: DVec2,
    /// Obere rechte Ecke des Datenbereichs
    pub max: DVec2,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_px: DVec2,
}

impl ViewWindow {
    /// Kleinste erlaubte Ausdehnung je Achse (Daten und Pixel).
    pub const MIN_EXTENT: f64 = 1e-9;
    /// Rand um die Bounding-Box beim Einpassen (Anteil der Ausdehnung).
    pub const FIT_MARGIN: f64 = 0.1;

    /// Erstellt ein Sichtfenster. Vertauschte oder entartete Grenzen werden korrigiert.
    pub fn new(min: DVec2, max: DVec2, viewport_px: DVec2) -> Self {
        let lo = min.min(max);
        let hi = min.max(max).max(lo + DVec2::splat(Self::MIN_EXTENT));
        Self {
            min: lo,
            max: hi,
            viewport_px: viewport_px.max(DVec2::ONE),
        }
    }

    /// Mittelpunkt des Datenbereichs.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Ausdehnung des Datenbereichs [Breite, Höhe].
    pub fn extent(&self) -> DVec2 {
        self.max - self.min
    }

    /// Konvertiert Daten-Koordinaten zu Bildschirm-Pixeln.
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        let extent = self.extent();
        DVec2::new(
            (world.x - self.min.x) / extent.x * self.viewport_px.x,
            (self.max.y - world.y) / extent.y * self.viewport_px.y,
        )
    }

    /// Konvertiert Bildschirm-Pixel zu Daten-Koordinaten.
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        let extent = self.extent();
        DVec2::new(
            self.min.x + screen.x / self.viewport_px.x * extent.x,
            self.max.y - screen.y / self.viewport_px.y * extent.y,
        )
    }

    /// Daten-Einheiten pro Pixel je Achse.
    pub fn world_per_pixel(&self) -> DVec2 {
        self.extent() / self.viewport_px
    }

    /// Setzt die Viewport-Größe (z.B. nach Fenster-Resize).
    pub fn set_viewport_size(&mut self, size: DVec2) {
        self.viewport_px = size.max(DVec2::ONE);
    }

    /// Passt den Datenbereich an eine Bounding-Box an (mit Rand).
    pub fn fit_to_bounds(&mut self, min: DVec2, max: DVec2) {
        let largest = (max - min).max_element();
        // Punktförmige Bounding-Box: eine Einheit Rand, sonst Anteil der größten Achse
        let margin = if largest <= Self::MIN_EXTENT {
            1.0
        } else {
            largest * Self::FIT_MARGIN
        };
        let margin = DVec2::splat(margin);
        *self = Self::new(min - margin, max + margin, self.viewport_px);
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(800.0, 800.0),
        )
    }
}
