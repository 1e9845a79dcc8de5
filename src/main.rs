//! Trajectory Path Editor.
//!
//! Kommandozeilen-Host für die Editor-Sitzung: erzeugt Startpfade, exportiert
//! Trajektorien und zeigt Pfad-Informationen an. Alle Aktionen laufen über
//! denselben Intent-Fluss wie ein interaktiver Host.

use anyhow::{bail, Context};
use trajectory_path_editor::{AppController, AppIntent, AppState, EditorOptions, ExportReport};

const USAGE: &str = "\
Verwendung:
  Trajectory-Path-Editor new <knoten> <pfad.csv>
  Trajectory-Path-Editor export <pfad.csv> <ttl.csv> [ttl_id]
  Trajectory-Path-Editor info <pfad.csv>
  Trajectory-Path-Editor init-config [optionen.toml]";

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Trajectory Path Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut session = Session::new(options);

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["new", nodes, out] => session.create(nodes, out),
        ["export", input, out] => session.export(input, out, None),
        ["export", input, out, ttl_id] => session.export(input, out, Some(*ttl_id)),
        ["info", input] => session.info(input),
        ["init-config"] => write_default_options(&EditorOptions::config_path()),
        ["init-config", out] => write_default_options(std::path::Path::new(out)),
        _ => bail!("Unbekannter Aufruf: {:?}\n{}", args, USAGE),
    }
}

/// Schreibt eine Optionen-Datei mit Standardwerten zum Anpassen.
fn write_default_options(path: &std::path::Path) -> anyhow::Result<()> {
    EditorOptions::default()
        .save_to_file(path)
        .with_context(|| format!("Optionen konnten nicht nach {} geschrieben werden", path.display()))?;
    println!("Standard-Optionen nach {} geschrieben", path.display());
    Ok(())
}

/// Headless-Sitzung: Controller plus State.
struct Session {
    state: AppState,
    controller: AppController,
}

impl Session {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }

    fn send(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    fn create(&mut self, nodes: &str, out: &str) -> anyhow::Result<()> {
        let node_count: usize = nodes
            .parse()
            .with_context(|| format!("Knotenanzahl '{}' ist keine ganze Zahl", nodes))?;
        self.send(AppIntent::NewPathConfirmed { node_count })?;
        self.send(AppIntent::SaveFileSelected {
            path: out.to_string(),
        })?;
        println!(
            "{} Segmente nach {} geschrieben",
            self.state.segment_count(),
            out
        );
        Ok(())
    }

    fn export(&mut self, input: &str, out: &str, ttl_id: Option<&str>) -> anyhow::Result<()> {
        let ttl_id = ttl_id
            .map(|raw| {
                raw.parse::<u32>()
                    .with_context(|| format!("TTL-ID '{}' ist keine ganze Zahl >= 0", raw))
            })
            .transpose()?;

        self.send(AppIntent::PathFileSelected {
            path: input.to_string(),
        })?;
        self.send(AppIntent::ExportConfirmed {
            path: out.to_string(),
            ttl_id,
        })?;

        match &self.state.ui.last_export {
            Some(report @ ExportReport::Exported { .. }) => {
                println!("{}", report.message());
                Ok(())
            }
            Some(report) => bail!("{}", report.message()),
            None => bail!("Export wurde nicht ausgeführt"),
        }
    }

    fn info(&mut self, input: &str) -> anyhow::Result<()> {
        self.send(AppIntent::PathFileSelected {
            path: input.to_string(),
        })?;

        let path = &self.state.path;
        println!("Datei:      {}", input);
        println!("Segmente:   {}", path.segment_count());
        println!("Knoten:     {}", path.knot_count());
        println!(
            "Form:       {}",
            if path.is_closed() { "geschlossen" } else { "offen" }
        );
        if let Some((min, max)) = path.bounds() {
            println!(
                "Ausdehnung: ({:.3}, {:.3}) .. ({:.3}, {:.3})",
                min.x, min.y, max.x, max.y
            );
        }
        let length: f64 = path
            .segments()
            .iter()
            .map(|s| s.approx_length(self.state.options.arc_subdivisions))
            .sum();
        println!("Länge:      {:.4}", length);
        Ok(())
    }
}
