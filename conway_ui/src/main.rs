// main.rs - Conway's Game of Life on a sparse grid
// Window mode draws the board with egui; --headless steps on a tokio timer.

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::{debug, info};

use conway::{
    config::{DEFAULT_CANVAS_SIZE, DEFAULT_GRID_UNIT, DEFAULT_INTERVAL_MS},
    Cell, Config, Pattern, Simulation, PATTERNS,
};

mod canvas;
mod headless;
mod ui;

#[derive(Debug, Parser)]
#[command(name = "conway_ui", version, about = "Conway's Game of Life on an open-ended grid")]
struct Args {
    /// Milliseconds between generations
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Pixel size of one cell
    #[arg(long, default_value_t = DEFAULT_GRID_UNIT)]
    grid_unit: u32,

    /// Pixel size of the square drawing surface
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    canvas_size: u32,

    /// Seed the grid with a named pattern (see --list-patterns)
    #[arg(long)]
    pattern: Option<String>,

    /// Top-left cell of the seeded pattern, as `x,y`
    #[arg(long, value_parser = parse_cell, default_value = "10,10")]
    at: Cell,

    /// Run without a window, logging every generation
    #[arg(long)]
    headless: bool,

    /// Stop a headless run after this many generations
    #[arg(long, requires = "headless")]
    generations: Option<u64>,

    /// Print the built-in pattern names and exit
    #[arg(long)]
    list_patterns: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            interval_ms: self.interval_ms,
            grid_unit: self.grid_unit,
            canvas_size: self.canvas_size,
        }
    }
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: i64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: i64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Cell::try_new(x, y).map_err(|e| e.to_string())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("conway=info,conway_ui=info"))?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter),
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let args = Args::parse();

    if args.list_patterns {
        for pattern in PATTERNS {
            let (w, h) = pattern.size();
            println!("{:<20} {w}x{h}", pattern.name);
        }
        return Ok(());
    }

    let config = args.config();
    let mut sim = Simulation::new(&config).context("invalid options")?;

    if let Some(name) = &args.pattern {
        let pattern = Pattern::find(name)?;
        let placed = sim.place_pattern(pattern, args.at);
        info!(pattern = pattern.name, origin = %args.at, placed, "grid seeded");
    }

    if args.headless {
        headless::run(&mut sim, args.generations)?;
        print!("{}", headless::render_text(sim.grid()));
        return Ok(());
    }

    debug!(?config, "opening window");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(ui::ConwayApp::new(sim, &config))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_origin() {
        assert_eq!(parse_cell("3,4").unwrap(), Cell::new(3, 4));
        assert_eq!(parse_cell(" 12 , 0 ").unwrap(), Cell::new(12, 0));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("-1,4").is_err());
        assert!(parse_cell("a,4").is_err());
    }

    #[test]
    fn defaults_follow_config() {
        let args = Args::parse_from(["conway_ui"]);
        assert_eq!(args.config(), Config::default());
        assert_eq!(args.at, Cell::new(10, 10));
        assert!(!args.headless);
    }

    #[test]
    fn generations_need_headless() {
        assert!(Args::try_parse_from(["conway_ui", "--generations", "5"]).is_err());
        let args =
            Args::try_parse_from(["conway_ui", "--headless", "--generations", "5", "--pattern", "glider"])
                .unwrap();
        assert_eq!(args.generations, Some(5));
        assert_eq!(args.pattern.as_deref(), Some("glider"));
    }
}
