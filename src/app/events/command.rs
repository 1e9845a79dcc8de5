use glam::DVec2;

/// App-Commands: mutierende Schritte, die der Controller an Handler verteilt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pfad-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Referenz-Dialog anfordern
    RequestReferenceDialog,
    /// N-Eck-Dialog anfordern
    RequestNewPathDialog,
    /// Export-Dialog anfordern
    RequestExportDialog,
    /// Alle Dialog-Anforderungen zurücknehmen
    DismissDialogs,
    /// Pfad aus Datei laden
    LoadPath { path: String },
    /// Pfad speichern; `None` = unter aktuellem Dateipfad
    SavePath { path: Option<String> },
    /// Referenzlinien laden (alle oder keine)
    LoadReferences { paths: Vec<String> },
    /// Trajektorie abtasten und exportieren
    ExportTrajectory { path: String, ttl_id: u32 },
    /// Pfad durch regelmäßiges N-Eck ersetzen
    CreateRegularPolygon { node_count: usize },
    /// Kontrollpunkt per Hit-Test greifen
    BeginVertexDrag {
        screen_pos: DVec2,
        max_pixel_distance: f64,
    },
    /// Gegriffenen Kontrollpunkt auf Daten-Position ziehen
    DragActiveVertex { world_pos: DVec2 },
    /// Drag beenden
    EndVertexDrag,
    /// Sichtbarkeit der Kontrollpunkte umschalten
    ToggleVertexVisibility,
    /// Kontinuitätsmodus umschalten
    ToggleContinuityMode,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f64; 2] },
    /// Sichtbaren Datenbereich setzen
    SetViewWindow { min: DVec2, max: DVec2 },
    /// Sichtfenster einpassen
    FitView,
}
