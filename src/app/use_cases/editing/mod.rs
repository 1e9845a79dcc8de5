//! Use-Case-Funktionen für die Pfad-Bearbeitung.
//!
//! Aufgeteilt nach Operation:
//! - `drag` — Kontrollpunkt greifen, ziehen, loslassen
//! - `toggles` — Sichtbarkeit und Kontinuitätsmodus
//! - `seed` — Pfad durch regelmäßiges N-Eck ersetzen

mod drag;
mod seed;
mod toggles;

pub use drag::{begin_vertex_drag, drag_active_vertex, end_vertex_drag};
pub use seed::create_regular_polygon;
pub use toggles::{toggle_continuity_mode, toggle_vertex_visibility};
