use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use wrapsnake::render::{ScreenConfig, TerminalPresenter};
use wrapsnake::terminal::{RawModeGuard, TerminalInput};
use wrapsnake::{GameConfig, GameLoop, GameSession};

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(version, about = "Steer a never-stopping snake around a wrapped field")]
struct Cli {
    /// Field width in field units
    #[arg(long, default_value = "800")]
    width: u32,

    /// Field height in field units
    #[arg(long, default_value = "600")]
    height: u32,

    /// Simulation ticks per second
    #[arg(long, default_value = "30")]
    tick_rate: u32,

    /// Seed for food and obstacle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Terminal columns used to draw the field
    #[arg(long, default_value = "80")]
    cols: u16,

    /// Terminal rows used to draw the field
    #[arg(long, default_value = "30")]
    rows: u16,

    /// Write logs to this file, the terminal itself is the game screen
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        tick_rate: cli.tick_rate,
        ..Default::default()
    };
    config.validate().context("Invalid game configuration")?;
    let screen = ScreenConfig {
        cols: cli.cols,
        rows: cli.rows,
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let session = GameSession::new(config.clone(), rng);
    let presenter = TerminalPresenter::new(std::io::stdout(), &config, screen)
        .context("Invalid screen configuration")?;

    let score = {
        // restores the terminal on the way out, errors included
        let _raw_mode = RawModeGuard::enable()?;
        let mut game = GameLoop::new(session, TerminalInput::spawn(), presenter);
        game.run()?;
        game.session().score()
    };

    // When its over display final screen
    println!("Final Score: {score}");
    Ok(())
}
