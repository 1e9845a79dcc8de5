//! Flache numerische Tabellen: Pfad laden/speichern, Referenzlinien, Trajektorien-Export.
//!
//! Alle Formate sind kommagetrennt ohne Anführungszeichen. Der Pfad wird als
//! eine Zeile `x,y` je Kontrollpunkt abgelegt, vier Zeilen bilden ein Segment.

pub mod parser;
pub mod writer;

use crate::core::PathModelError;
use thiserror::Error;

pub use parser::{parse_path_table, parse_reference_table, read_trajectory};
pub use writer::{path_table_to_string, write_path_table, CsvTrajectoryWriter, TrajectorySink};

/// Fehler beim Lesen oder Schreiben einer Tabelle.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Tabelle enthält keine Datenzeilen")]
    Empty,
    #[error("Zeilenanzahl {rows} ist kein Vielfaches von 4")]
    RowCountNotMultipleOfFour { rows: usize },
    #[error("Zeile {row}: mindestens {expected} Spalten erwartet, {found} gefunden")]
    TooFewColumns {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Zeile {row}, Spalte {column}: '{value}' ist keine Zahl")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("Segment {segment} beginnt nicht am Endpunkt seines Vorgaengers (Abstand {gap})")]
    DisconnectedSegment { segment: usize, gap: f64 },
    #[error("Kopfzeile fehlt")]
    MissingHeader,
    #[error("Kopfzeile kündigt {expected} Datensätze an, gefunden {found}")]
    RecordCountMismatch { expected: usize, found: usize },
    #[error("CSV-Fehler: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PathModelError> for TableError {
    fn from(error: PathModelError) -> Self {
        match error {
            PathModelError::Empty => Self::Empty,
            PathModelError::RowCountNotMultipleOfFour { count } => {
                Self::RowCountNotMultipleOfFour { rows: count }
            }
            PathModelError::DisconnectedSegment { segment, gap } => {
                Self::DisconnectedSegment { segment, gap }
            }
        }
    }
}
