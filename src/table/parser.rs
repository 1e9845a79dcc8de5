//! Parser für Pfad-, Referenz- und Trajektorien-Tabellen.

use super::TableError;
use crate::core::trajectory::RECORD_COLUMNS;
use crate::core::{PathModel, TrajectoryHeader, TrajectoryRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use glam::DVec2;
use std::io::Read;

fn reader<R: Read>(source: R, has_headers: bool) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source)
}

/// Liest Spalte `column` (0-basiert) als Zahl; `row` ist 1-basiert für Meldungen.
fn number(record: &StringRecord, row: usize, column: usize) -> Result<f64, TableError> {
    let field = record.get(column).ok_or(TableError::TooFewColumns {
        row,
        expected: column + 1,
        found: record.len(),
    })?;
    field.parse::<f64>().map_err(|_| TableError::InvalidNumber {
        row,
        column: column + 1,
        value: field.to_string(),
    })
}

/// Liest die ersten zwei Spalten jeder Zeile als Punkt.
fn read_points<R: Read>(source: R, has_headers: bool) -> Result<Vec<DVec2>, TableError> {
    let mut points = Vec::new();
    for (i, record) in reader(source, has_headers).records().enumerate() {
        let record = record?;
        let row = i + 1;
        if record.len() < 2 {
            return Err(TableError::TooFewColumns {
                row,
                expected: 2,
                found: record.len(),
            });
        }
        points.push(DVec2::new(
            number(&record, row, 0)?,
            number(&record, row, 1)?,
        ));
    }
    Ok(points)
}

/// Parst eine gespeicherte Pfad-Tabelle (ohne Kopfzeile, vier Zeilen je Segment).
///
/// Weitere Spalten nach `x,y` werden ignoriert.
pub fn parse_path_table(content: &str) -> Result<PathModel, TableError> {
    let points = read_points(content.as_bytes(), false)?;
    let path = PathModel::from_flat_points(points)?;
    log::info!(
        "Pfad-Tabelle gelesen: {} Segmente ({})",
        path.segment_count(),
        if path.is_closed() { "geschlossen" } else { "offen" }
    );
    Ok(path)
}

/// Parst eine Referenz-Tabelle (eine Kopfzeile, erste zwei Spalten = x,y).
pub fn parse_reference_table(content: &str) -> Result<Vec<DVec2>, TableError> {
    read_points(content.as_bytes(), true)
}

/// Liest eine exportierte Trajektorie zurück und prüft die Kopfzeile gegen die Zeilenanzahl.
pub fn read_trajectory<R: Read>(
    source: R,
) -> Result<(TrajectoryHeader, Vec<TrajectoryRecord>), TableError> {
    let mut rows = reader(source, false).into_records();

    let header_record = rows.next().ok_or(TableError::MissingHeader)??;
    let header = TrajectoryHeader {
        ttl_id: number(&header_record, 1, 0)? as u32,
        record_count: number(&header_record, 1, 1)? as usize,
        initial_forward_distance: number(&header_record, 1, 2)?,
    };

    let mut records = Vec::with_capacity(header.record_count);
    for (i, record) in rows.enumerate() {
        let record = record?;
        let row = i + 2;
        let mut values = [0.0; RECORD_COLUMNS];
        for (column, value) in values.iter_mut().enumerate() {
            *value = number(&record, row, column)?;
        }
        records.push(TrajectoryRecord::from_row(values));
    }

    if records.len() != header.record_count {
        return Err(TableError::RecordCountMismatch {
            expected: header.record_count,
            found: records.len(),
        });
    }
    Ok((header, records))
}
