//! Handler für Datei-Operationen (Öffnen, Speichern, Referenzen, Export).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Pfad-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt einen Pfad aus dem übergebenen Dateipfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_path_file(state, path)
}

/// Speichert den Pfad.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_path_file(state, path)
}

/// Lädt Referenzlinien.
pub fn load_references(state: &mut AppState, paths: Vec<String>) -> anyhow::Result<()> {
    use_cases::file_io::load_reference_files(state, paths)
}

/// Exportiert die Trajektorie. Fehler landen im Export-Bericht, nicht im Result.
pub fn export(state: &mut AppState, path: String, ttl_id: u32) {
    use_cases::export::export_trajectory(state, path, ttl_id);
}
