//! Writer für Pfad-Tabellen und Trajektorien-Export.

use super::TableError;
use crate::core::{PathModel, TrajectoryHeader, TrajectoryRecord};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Abnehmer einer abgetasteten Trajektorie (Kopfzeile plus Datensätze).
pub trait TrajectorySink {
    fn consume(
        &mut self,
        header: &TrajectoryHeader,
        records: &[TrajectoryRecord],
    ) -> Result<(), TableError>;
}

/// Serialisiert den Pfad als `x,y`-Zeilen in Speicherreihenfolge.
///
/// Zahlen werden in kürzester verlustfreier Darstellung geschrieben, sodass
/// Speichern und Laden bitgenau zusammenpassen.
pub fn path_table_to_string(path: &PathModel) -> Result<String, TableError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for point in path.points() {
        writer.serialize((point.x, point.y))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TableError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| TableError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Schreibt den Pfad als Tabelle nach `file`.
pub fn write_path_table(path: &PathModel, file: &Path) -> Result<(), TableError> {
    let content = path_table_to_string(path)?;
    std::fs::write(file, content)?;
    log::info!(
        "Pfad gespeichert: {} ({} Kontrollpunkte)",
        file.display(),
        path.vertex_count()
    );
    Ok(())
}

/// CSV-Export: Kopfzeile `ttl_id,anzahl,initial_forward_distance`, dann 8 Spalten je Datensatz.
pub struct CsvTrajectoryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvTrajectoryWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(target),
        }
    }

    /// Gibt das Ziel zurück, nachdem alle gepufferten Daten geschrieben wurden.
    pub fn into_inner(self) -> Result<W, TableError> {
        self.writer
            .into_inner()
            .map_err(|e| TableError::Io(e.into_error()))
    }
}

impl CsvTrajectoryWriter<std::fs::File> {
    /// Legt die Zieldatei an (überschreibt eine vorhandene).
    pub fn create(file: &Path) -> Result<Self, TableError> {
        Ok(Self::new(std::fs::File::create(file)?))
    }
}

impl<W: Write> TrajectorySink for CsvTrajectoryWriter<W> {
    fn consume(
        &mut self,
        header: &TrajectoryHeader,
        records: &[TrajectoryRecord],
    ) -> Result<(), TableError> {
        self.writer.serialize((
            header.ttl_id,
            header.record_count,
            header.initial_forward_distance,
        ))?;
        for record in records {
            self.writer.serialize(record.to_row())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
