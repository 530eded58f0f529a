//! Headless floor-plan editor.
//!
//! Loads a plan, replays a recorded session through the interaction
//! controller and writes the edited plan back out.

mod session;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use floorplan_core::{EditorConfig, FloorPlan, InteractionController, SceneStore};
use floorplan_render::{RenderContext, build_draw_list};
use kurbo::Size;

#[derive(Parser, Debug)]
#[command(name = "floorplan", about = "Replay an editing session against a floor plan")]
struct Cli {
    /// Plan to load, or `-` for stdin. Starts empty when omitted.
    plan: Option<PathBuf>,

    /// JSON array of session events.
    #[arg(long)]
    session: Option<PathBuf>,

    /// Editor configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the resulting plan.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Viewport used for the draw list, as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800", value_parser = parse_viewport)]
    viewport: Size,
}

fn parse_viewport(value: &str) -> Result<Size, String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let width: f64 = w.trim().parse().map_err(|_| format!("bad width {w:?}"))?;
    let height: f64 = h.trim().parse().map_err(|_| format!("bad height {h:?}"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err("viewport must be positive".to_string());
    }
    Ok(Size::new(width, height))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading plan from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting floorplan");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EditorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EditorConfig::default(),
    };
    let mut store = SceneStore::with_config(config);

    if let Some(path) = &cli.plan {
        let json = read_input(path)?;
        let plan = FloorPlan::from_json(&json).context("parsing floor plan")?;
        store.load_floor_plan(plan);
        log::info!("loaded {} elements", store.elements().len());
    }

    let mut controller = InteractionController::new();
    if let Some(path) = &cli.session {
        let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let events = session::parse_session(&json).context("parsing session")?;
        let stats = session::replay(&mut controller, &mut store, &events);
        log::info!(
            "session: {} events, {} shortcuts, {} drops",
            stats.events,
            stats.shortcuts,
            stats.drops
        );
    }

    let overlay = controller.overlay(&store);
    let draw_list = build_draw_list(&RenderContext::new(&store, cli.viewport).with_overlay(&overlay));
    log::info!("draw list: {} items", draw_list.len());

    println!(
        "{} elements ({} booths), {} selected, zoom {:.2}, undo {}",
        store.elements().len(),
        store.booth_count(),
        store.selected_ids().len(),
        store.zoom(),
        if store.can_undo() { "available" } else { "empty" },
    );

    if let Some(out) = &cli.out {
        let json = store.snapshot().to_json()?;
        fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
        log::info!("wrote {}", out.display());
    }
    Ok(())
}
