//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use crate::core::{ReferenceOverlay, ViewWindow};
use glam::DVec2;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kurve als Polylinie in Daten-Koordinaten
    pub curve: Vec<DVec2>,
    /// Tangenten-Linien je Knoten (ctrl2 → Knoten → ctrl1, ohne fehlende Seiten)
    pub handles: Vec<Vec<DVec2>>,
    /// Alle Kontrollpunkte in Speicherreihenfolge
    pub vertices: Vec<DVec2>,
    /// Ob Kontrollpunkte und Tangenten gezeichnet werden
    pub show_vertices: bool,
    /// Aktuell gezogener Kontrollpunkt (für Hervorhebung)
    pub active_vertex: Option<usize>,
    /// Ob Heading-Lock aktiv ist (Statusanzeige)
    pub heading_locked: bool,
    /// Vergleichslinien
    pub references: Arc<Vec<ReferenceOverlay>>,
    /// Sichtfenster für diesen Frame
    pub view: ViewWindow,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve vorhanden ist.
    pub fn has_path(&self) -> bool {
        !self.curve.is_empty()
    }
}
