//! Use-Case: Pfad abtasten und als Trajektorie exportieren.
//!
//! Fehler werden hier abgefangen und als [`ExportReport`] gemeldet; Pfad,
//! Drag- und UI-Zustand bleiben gültig.

use crate::app::AppState;
use crate::core::{sample_trajectory, PathModel, Trajectory, TrajectoryHeader};
use crate::shared::EditorOptions;
use crate::table::{CsvTrajectoryWriter, TrajectorySink};
use anyhow::Context;
use std::path::Path;

/// Ergebnis eines Export-Versuchs.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportReport {
    Exported {
        ttl_id: u32,
        path: String,
        sample_count: usize,
    },
    Failed {
        ttl_id: u32,
        path: String,
        detail: String,
    },
}

impl ExportReport {
    /// Statusmeldung für die Oberfläche.
    pub fn message(&self) -> String {
        match self {
            Self::Exported { ttl_id, path, .. } => {
                format!("TTL {ttl_id} successfully exported to {path}")
            }
            Self::Failed { ttl_id, detail, .. } => {
                format!("TTL {ttl_id} failed to export\nException details:\n{detail}")
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Exported { .. })
    }
}

/// Tastet den Pfad ab und baut die Kopfzeile für `ttl_id`.
fn sample_with_header(
    path: &PathModel,
    options: &EditorOptions,
    ttl_id: u32,
) -> anyhow::Result<(TrajectoryHeader, Trajectory)> {
    let trajectory =
        sample_trajectory(path, &options.sampler_config()).context("Abtastung fehlgeschlagen")?;
    Ok((trajectory.header(ttl_id), trajectory))
}

fn write_to_sink<S: TrajectorySink + ?Sized>(
    sink: &mut S,
    header: &TrajectoryHeader,
    trajectory: &Trajectory,
) -> anyhow::Result<()> {
    sink.consume(header, &trajectory.records)
        .context("Trajektorie konnte nicht geschrieben werden")
}

/// Tastet den Pfad ab und übergibt Kopfzeile und Datensätze an `sink`.
pub fn export_to_sink<S: TrajectorySink + ?Sized>(
    path: &PathModel,
    options: &EditorOptions,
    ttl_id: u32,
    sink: &mut S,
) -> anyhow::Result<TrajectoryHeader> {
    let (header, trajectory) = sample_with_header(path, options, ttl_id)?;
    write_to_sink(sink, &header, &trajectory)?;
    Ok(header)
}

/// Exportiert in eine CSV-Datei. Die Datei wird erst nach erfolgreicher
/// Abtastung angelegt und bei Schreibfehlern wieder entfernt.
fn export_to_file(
    path: &PathModel,
    options: &EditorOptions,
    ttl_id: u32,
    file: &Path,
) -> anyhow::Result<TrajectoryHeader> {
    let (header, trajectory) = sample_with_header(path, options, ttl_id)?;

    let mut sink = CsvTrajectoryWriter::create(file)
        .with_context(|| format!("'{}' konnte nicht angelegt werden", file.display()))?;
    if let Err(e) = write_to_sink(&mut sink, &header, &trajectory) {
        drop(sink);
        if let Err(remove_err) = std::fs::remove_file(file) {
            log::warn!(
                "Unvollständige Export-Datei '{}' nicht entfernt: {}",
                file.display(),
                remove_err
            );
        }
        return Err(e);
    }
    Ok(header)
}

/// Exportiert die Trajektorie und meldet das Ergebnis über den UI-State.
pub fn export_trajectory(state: &mut AppState, path: String, ttl_id: u32) -> ExportReport {
    let report = match export_to_file(&state.path, &state.options, ttl_id, Path::new(&path)) {
        Ok(header) => ExportReport::Exported {
            ttl_id,
            path,
            sample_count: header.record_count,
        },
        Err(e) => ExportReport::Failed {
            ttl_id,
            path,
            detail: format!("{e:#}"),
        },
    };

    let message = report.message();
    if report.is_success() {
        log::info!("{}", message);
    } else {
        log::error!("{}", message);
    }
    state.ui.status_message = Some(message);
    state.ui.last_export = Some(report.clone());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{regular_polygon_path, TrajectoryRecord, ViewWindow};
    use crate::table::TableError;

    #[derive(Default)]
    struct CollectingSink {
        header: Option<TrajectoryHeader>,
        records: Vec<TrajectoryRecord>,
    }

    impl TrajectorySink for CollectingSink {
        fn consume(
            &mut self,
            header: &TrajectoryHeader,
            records: &[TrajectoryRecord],
        ) -> Result<(), TableError> {
            self.header = Some(*header);
            self.records = records.to_vec();
            Ok(())
        }
    }

    #[test]
    fn sink_receives_header_matching_records() {
        let path = regular_polygon_path(&ViewWindow::default(), 3).unwrap();
        let mut sink = CollectingSink::default();
        let header = export_to_sink(&path, &EditorOptions::default(), 9, &mut sink).unwrap();

        assert_eq!(sink.header, Some(header));
        assert_eq!(header.ttl_id, 9);
        assert_eq!(header.record_count, sink.records.len());
        assert!(header.initial_forward_distance > 0.0);
    }

    #[test]
    fn empty_path_reports_failure_without_touching_sink() {
        let mut sink = CollectingSink::default();
        let result = export_to_sink(&PathModel::new(), &EditorOptions::default(), 0, &mut sink);
        assert!(result.is_err());
        assert!(sink.header.is_none());
    }

    #[test]
    fn file_export_matches_sink_export() {
        let path = regular_polygon_path(&ViewWindow::default(), 5).unwrap();
        let options = EditorOptions::default();
        let mut sink = CollectingSink::default();
        let sink_header = export_to_sink(&path, &options, 4, &mut sink).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ttl.csv");
        let file_header = export_to_file(&path, &options, 4, &file).unwrap();

        let (read_header, read_records) =
            crate::table::read_trajectory(std::fs::File::open(&file).unwrap()).unwrap();
        assert_eq!(file_header, sink_header);
        assert_eq!(read_header, sink_header);
        assert_eq!(read_records, sink.records);
    }

    #[test]
    fn failed_sampling_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("leer.csv");
        let result = export_to_file(&PathModel::new(), &EditorOptions::default(), 0, &file);
        assert!(result.is_err());
        assert!(!file.exists());
    }

    #[test]
    fn report_messages() {
        let ok = ExportReport::Exported {
            ttl_id: 2,
            path: "a.csv".into(),
            sample_count: 10,
        };
        assert_eq!(ok.message(), "TTL 2 successfully exported to a.csv");
        let failed = ExportReport::Failed {
            ttl_id: 2,
            path: "a.csv".into(),
            detail: "kaputt".into(),
        };
        assert_eq!(
            failed.message(),
            "TTL 2 failed to export\nException details:\nkaputt"
        );
    }
}
