//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) außer dem Export sind hier zentralisiert.

use crate::app::AppState;
use crate::core::ReferenceOverlay;
use crate::table::{parse_path_table, parse_reference_table, write_path_table};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Öffnet den Pfad-Öffnen-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Speichern-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Öffnet den Referenz-Dialog über UI-State.
pub fn request_reference_files(state: &mut AppState) {
    state.ui.show_reference_dialog = true;
}

/// Lädt einen gespeicherten Pfad. Bei Fehlern bleibt der Zustand unverändert.
pub fn load_path_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Pfad-Datei '{}' nicht lesbar", path))?;
    let model = parse_path_table(&content)
        .with_context(|| format!("Pfad-Datei '{}' hat ein ungültiges Format", path))?;

    state.record_undo_snapshot();
    state.editor.clear_drag();
    if let Some((min, max)) = model.bounds() {
        state.view.fit_to_bounds(min, max);
    }

    log::info!(
        "Loaded path: {} segments from {}",
        model.segment_count(),
        path
    );
    state.ui.status_message = Some(format!(
        "{} geladen ({} Segmente)",
        path,
        model.segment_count()
    ));
    state.ui.current_file_path = Some(path);
    state.path = Arc::new(model);
    Ok(())
}

/// Speichert den Pfad.
///
/// `None` speichert unter dem aktuell bekannten Pfad oder öffnet den Dialog.
/// `Some(p)` speichert explizit unter `p` und merkt sich den Pfad.
pub fn save_path_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(target) = path.or_else(|| state.ui.current_file_path.clone()) else {
        request_save_file(state);
        return Ok(());
    };

    write_path_table(&state.path, Path::new(&target))
        .with_context(|| format!("Pfad konnte nicht nach '{}' gespeichert werden", target))?;
    state.ui.status_message = Some(format!("Gespeichert: {}", target));
    state.ui.current_file_path = Some(target);
    Ok(())
}

/// Lädt eine oder mehrere Referenzlinien. Erst wenn alle gelesen sind, werden sie übernommen.
pub fn load_reference_files(state: &mut AppState, paths: Vec<String>) -> anyhow::Result<()> {
    let overlays = paths
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Referenz-Datei '{}' nicht lesbar", path))?;
            let points = parse_reference_table(&content)
                .with_context(|| format!("Referenz-Datei '{}' hat ein ungültiges Format", path))?;
            let name = Path::new(path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            Ok(ReferenceOverlay::new(name, points))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for overlay in &overlays {
        log::info!(
            "Loaded reference '{}': {} points",
            overlay.name,
            overlay.points.len()
        );
    }
    state.references.extend(overlays);
    Ok(())
}
