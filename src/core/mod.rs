//! Core-Domänentypen: Bezier-Segmente, Pfadmodell, Zwangsbedingungen, Abtastung.

pub mod bezier;
pub mod constraint;
pub mod path_model;
pub mod polygon;
pub mod reference;
pub mod sampler;
pub mod trajectory;
pub mod view;

pub use bezier::{ControlPoint, Segment};
pub use constraint::{apply_drag, ContinuityMode, DragResolution, ProjectionBranch};
pub use path_model::{KnotWindow, PathModel, PathModelError, PointKind};
pub use polygon::{regular_polygon_path, PolygonError};
pub use reference::ReferenceOverlay;
pub use sampler::{sample_trajectory, PathSample, SampleError, SamplerConfig};
pub use trajectory::{Trajectory, TrajectoryHeader, TrajectoryRecord};
pub use view::ViewWindow;
