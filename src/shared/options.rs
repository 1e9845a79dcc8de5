//! Zentrale Konfiguration für den Trajectory Path Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::sampler::{DEFAULT_ARC_SUBDIVISIONS, DEFAULT_SAMPLE_STEP};
use crate::core::{SamplerConfig, ViewWindow};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln für das Greifen von Kontrollpunkten.
pub const PICK_RADIUS_PX: f64 = 10.0;

// ── Export ──────────────────────────────────────────────────────────

/// TTL-Kennung, wenn beim Export keine angegeben wird.
pub const DEFAULT_TTL_ID: u32 = 0;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Untere linke Ecke des Start-Sichtfensters.
pub const DEFAULT_VIEW_MIN: [f64; 2] = [0.0, 0.0];
/// Obere rechte Ecke des Start-Sichtfensters.
pub const DEFAULT_VIEW_MAX: [f64; 2] = [10.0, 10.0];
/// Start-Viewport-Größe in Pixeln.
pub const DEFAULT_VIEWPORT_SIZE_PX: [f64; 2] = [800.0, 800.0];

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "trajectory_path_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `trajectory_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte in Screen-Pixeln
    pub pick_radius_px: f64,

    // ── Abtastung ───────────────────────────────────────────────
    /// Abstand zwischen zwei exportierten Proben
    pub sample_step: f64,
    /// Zweiter, gleichmäßig verteilender Durchlauf
    pub evenly_space: bool,
    /// t-Intervalle je Segment für die Bogenlängen-Tabelle
    #[serde(default = "default_arc_subdivisions")]
    pub arc_subdivisions: usize,

    // ── Export ──────────────────────────────────────────────────
    /// TTL-Kennung ohne explizite Angabe
    #[serde(default)]
    pub default_ttl_id: u32,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Untere linke Ecke des Start-Sichtfensters
    pub default_view_min: [f64; 2],
    /// Obere rechte Ecke des Start-Sichtfensters
    pub default_view_max: [f64; 2],
    /// Viewport-Größe in Pixeln
    #[serde(default = "default_viewport_size_px")]
    pub viewport_size_px: [f64; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius_px: PICK_RADIUS_PX,

            sample_step: DEFAULT_SAMPLE_STEP,
            evenly_space: true,
            arc_subdivisions: DEFAULT_ARC_SUBDIVISIONS,

            default_ttl_id: DEFAULT_TTL_ID,

            default_view_min: DEFAULT_VIEW_MIN,
            default_view_max: DEFAULT_VIEW_MAX,
            viewport_size_px: DEFAULT_VIEWPORT_SIZE_PX,
        }
    }
}

fn default_arc_subdivisions() -> usize {
    DEFAULT_ARC_SUBDIVISIONS
}

fn default_viewport_size_px() -> [f64; 2] {
    DEFAULT_VIEWPORT_SIZE_PX
}

impl EditorOptions {
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML nach `path`.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("trajectory_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Abtast-Parameter für den Export.
    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            step: self.sample_step,
            evenly_space: self.evenly_space,
            subdivisions: self.arc_subdivisions,
        }
    }

    /// Start-Sichtfenster aus den konfigurierten Grenzen.
    pub fn initial_view(&self) -> ViewWindow {
        ViewWindow::new(
            DVec2::from_array(self.default_view_min),
            DVec2::from_array(self.default_view_max),
            DVec2::from_array(self.viewport_size_px),
        )
    }
}
