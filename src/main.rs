//! Pentago
//!
//! Plays Pentago against the engine, either in a native window or in the
//! terminal with `--interactive`.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pentago::cli;
use pentago::config::AppConfig;
use pentago::ui::PentagoApp;
use pentago::{AIEngine, Color};

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Play Pentago against the computer.
#[derive(Parser)]
#[command(name = "pentago", about = "Play Pentago against the computer")]
struct Cli {
    /// Play in the terminal instead of opening a window
    #[arg(short, long)]
    interactive: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "pentago.toml")]
    config: PathBuf,

    /// Override the number of candidate moves kept per search node
    #[arg(long)]
    breadth: Option<usize>,

    /// Override the number of simulated opponent replies
    #[arg(long)]
    depth: Option<u32>,

    /// Color the human plays
    #[arg(long, value_enum)]
    human: Option<Side>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(breadth) = args.breadth {
        config.ai.breadth = breadth;
    }
    if let Some(depth) = args.depth {
        config.ai.depth = depth;
    }
    if let Some(side) = args.human {
        config.game.human_color = Some(side.into());
    }
    config.validate().context("invalid settings")?;

    if args.interactive {
        println!("Welcome to Pentago");
        println!("Starting interactive play ...");
        let mut engine = AIEngine::from_config(&config.ai);
        let winner = cli::run(
            io::stdin().lock(),
            io::stdout().lock(),
            config.game.human_color,
            &mut engine,
        )
        .context("interactive game aborted")?;
        tracing::info!(?winner, "interactive game over");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Pentago"),
        ..Default::default()
    };

    eframe::run_native(
        "Pentago",
        options,
        Box::new(move |cc| Ok(Box::new(PentagoApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
