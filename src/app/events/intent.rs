use glam::DVec2;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Gespeicherten Pfad öffnen (zeigt Dateidialog)
    OpenPathRequested,
    /// Pfad-Datei im Dialog gewählt
    PathFileSelected { path: String },
    /// Referenzlinien öffnen (zeigt Mehrfach-Dateidialog)
    OpenReferenceRequested,
    /// Eine oder mehrere Referenz-Dateien gewählt
    ReferenceFilesSelected { paths: Vec<String> },
    /// Neuen N-Eck-Pfad anlegen (fragt Knotenanzahl ab)
    NewPathRequested,
    /// Knotenanzahl für den neuen Pfad bestätigt
    NewPathConfirmed { node_count: usize },
    /// Pfad speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Pfad unter neuem Namen speichern
    SaveAsRequested,
    /// Speicherziel im Dialog gewählt
    SaveFileSelected { path: String },
    /// Trajektorie exportieren (fragt Datei und TTL-ID ab)
    ExportRequested,
    /// Exportziel bestätigt; ohne TTL-ID gilt der konfigurierte Standard
    ExportConfirmed { path: String, ttl_id: Option<u32> },
    /// Ein Dialog wurde abgebrochen
    DialogCancelled,
    /// Kontrollpunkte ein-/ausblenden (Taste `t`)
    ToggleVertexVisibilityRequested,
    /// Heading-Lock umschalten (Taste `e`)
    ToggleHeadingLockRequested,
    /// Maustaste gedrückt (Bildschirm-Koordinaten)
    VertexPressed { screen_pos: DVec2 },
    /// Maus bewegt bei gedrückter Taste
    VertexDragged { screen_pos: DVec2 },
    /// Maustaste losgelassen
    VertexReleased,
    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederherstellen
    RedoRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f64; 2] },
    /// Sichtbarer Datenbereich hat sich geändert (Zoom/Pan im Host)
    ViewWindowChanged { min: DVec2, max: DVec2 },
    /// Sichtfenster auf Pfad und Referenzen einpassen
    FitViewRequested,
}
