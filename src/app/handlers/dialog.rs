//! Handler für Dialog-State.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Referenz-Dateidialog.
pub fn request_reference_dialog(state: &mut AppState) {
    use_cases::file_io::request_reference_files(state);
}

/// Öffnet den Dialog für die Knotenanzahl eines neuen Pfads.
pub fn request_new_path_dialog(state: &mut AppState) {
    state.ui.show_new_path_dialog = true;
}

/// Öffnet den Export-Dialog (Zieldatei und TTL-ID).
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Nimmt alle offenen Dialog-Anforderungen zurück. Abbruch ist kein Fehler.
pub fn dismiss(state: &mut AppState) {
    state.ui.close_dialogs();
}
