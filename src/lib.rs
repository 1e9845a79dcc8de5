//! Trajectory Path Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod table;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorState, ExportReport, UiState};
pub use core::{
    ContinuityMode, DragResolution, PathModel, ReferenceOverlay, SamplerConfig, Segment,
    Trajectory, TrajectoryHeader, TrajectoryRecord, ViewWindow,
};
pub use shared::{EditorOptions, RenderScene};
pub use table::{CsvTrajectoryWriter, TableError, TrajectorySink};
