//! Terminal Game of Life runner (default binary).
//!
//! Sizes the grid to the terminal, seeds the configured pattern, and redraws
//! every generation in place with absolute cursor moves. Logs go to stderr;
//! set `RUST_LOG=debug` and redirect stderr to a file to watch populations.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tui_life::config::{Args, Config};
use tui_life::core::Simulation;
use tui_life::runner::run;
use tui_life::term::{terminal_size, GridView, Screen, TerminalRenderer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = Config::resolve(&args);

    let (width, height) = terminal_size().context("could not read terminal size")?;
    tracing::info!(
        width,
        height,
        pattern = config.pattern.name,
        encoding = config.encoding.as_str(),
        render = config.render.as_str(),
        "starting"
    );

    let mut sim = Simulation::seeded(width, height, config.encoding, &config.pattern)?;
    let mut screen = Screen::new(
        GridView::new(config.encoding),
        TerminalRenderer::new(config.render),
    );

    screen.renderer_mut().enter()?;
    let result = run(&mut sim, &mut screen, &config, std::thread::sleep);

    // Always try to restore terminal state.
    let _ = screen.renderer_mut().exit();
    result
}
