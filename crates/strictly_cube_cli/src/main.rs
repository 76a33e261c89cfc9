//! Strictly Cube - terminal session controller
//!
//! Plays 3x3x3 tic-tac-toe from stdin and exposes the geometry helpers.

#![warn(missing_docs)]

mod cli;
mod config;
mod controller;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use controller::Controller;
use strictly_cube::{Offset, Ray, RuleSet, board_lines, hit_volume_meshes, pick};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, rules } => run_play(config, rules),
        Command::Scene => {
            initialize_tracing(GameConfig::default().log_filter());
            run_scene()
        }
        Command::Pick { origin, direction } => {
            initialize_tracing(GameConfig::default().log_filter());
            run_pick(origin, direction)
        }
    }
}

/// Play a local game on stdin/stdout
fn run_play(config_path: Option<std::path::PathBuf>, rules: Option<RuleSet>) -> Result<()> {
    let mut config = GameConfig::load(config_path.as_deref())?;
    if let Some(rules) = rules {
        config = config.with_rules(rules);
    }
    initialize_tracing(config.log_filter());

    if let Some(path) = config_path.as_deref().filter(|path| !path.exists()) {
        warn!(path = %path.display(), "Config file not found, using defaults");
    }
    info!(rules = %config.rules(), "Starting game");
    let mut controller = Controller::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    controller.run(stdin.lock(), stdout.lock())?;

    let session = controller.session();
    info!(
        pieces = session.board().len(),
        status = %session.status(),
        spheres = controller.scene().spheres().len(),
        asterisks = controller.scene().asterisks().len(),
        "Session ended"
    );
    Ok(())
}

/// Dump static board meshes
#[instrument]
fn run_scene() -> Result<()> {
    let scene = serde_json::json!({
        "board_lines": board_lines(),
        "hit_volumes": hit_volume_meshes(),
    });
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

/// Resolve a ray and print the cell
#[instrument]
fn run_pick(origin: [f64; 3], direction: [f64; 3]) -> Result<()> {
    let ray = Ray::new(Offset::from(origin), Offset::from(direction));
    match pick(&ray) {
        Some(cell) => println!("{} ({} {} {})", cell, cell.i, cell.j, cell.k),
        None => println!("No cell hit"),
    }
    Ok(())
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
