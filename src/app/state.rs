//! Application State — zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::use_cases::export::ExportReport;
use super::CommandLog;
use crate::core::{ContinuityMode, PathModel, ReferenceOverlay, ViewWindow};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Maximale Undo-Tiefe.
const HISTORY_DEPTH: usize = 200;

/// Zustand der Pfad-Bearbeitung (Modus, Drag, Sichtbarkeit).
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Kontinuitätsmodus für Tangenten-Drags
    pub mode: ContinuityMode,
    /// Index des aktuell gezogenen Kontrollpunkts
    pub active_vertex: Option<usize>,
    /// Ob für den laufenden Drag schon ein Undo-Snapshot existiert
    pub drag_recorded: bool,
    /// Ob Kontrollpunkte und Tangenten angezeigt (und greifbar) sind
    pub show_vertices: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Standard: Free-Modus, Kontrollpunkte sichtbar, kein Drag.
    pub fn new() -> Self {
        Self {
            mode: ContinuityMode::Free,
            active_vertex: None,
            drag_recorded: false,
            show_vertices: true,
        }
    }

    /// Beendet einen laufenden Drag.
    pub fn clear_drag(&mut self) {
        self.active_vertex = None;
        self.drag_recorded = false;
    }

    pub fn heading_locked(&self) -> bool {
        self.mode == ContinuityMode::HeadingLocked
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Pfad-Öffnen-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Speichern-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Ob der Referenz-Auswahl-Dialog geöffnet werden soll
    pub show_reference_dialog: bool,
    /// Ob der Export-Dialog (Datei + TTL-ID) geöffnet werden soll
    pub show_export_dialog: bool,
    /// Ob der Dialog für einen neuen N-Eck-Pfad geöffnet werden soll
    pub show_new_path_dialog: bool,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
    /// Ergebnis des letzten Exports
    pub last_export: Option<ExportReport>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Schließt alle Dialoge.
    pub fn close_dialogs(&mut self) {
        self.show_file_dialog = false;
        self.show_save_file_dialog = false;
        self.show_reference_dialog = false;
        self.show_export_dialog = false;
        self.show_new_path_dialog = false;
    }
}

/// Hauptzustand der Editor-Sitzung
pub struct AppState {
    /// Editierbarer Pfad (Arc für O(1)-Snapshots, Mutation über `Arc::make_mut`)
    pub path: Arc<PathModel>,
    /// Bearbeitungszustand
    pub editor: EditorState,
    /// Sichtfenster für Hit-Tests und N-Eck-Erzeugung
    pub view: ViewWindow,
    /// UI-State
    pub ui: UiState,
    /// Geladene Vergleichslinien
    pub references: Vec<ReferenceOverlay>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            path: Arc::new(PathModel::new()),
            editor: EditorState::new(),
            view: options.initial_view(),
            ui: UiState::new(),
            references: Vec::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options,
        }
    }

    /// Anzahl der Segmente (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.path.segment_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Pfads.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Mutable Zugriff auf den Pfad (klont nur, wenn ein Snapshot ihn teilt).
    pub fn path_mut(&mut self) -> &mut PathModel {
        Arc::make_mut(&mut self.path)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
