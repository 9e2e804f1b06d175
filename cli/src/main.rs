//! blockshape CLI - inspect the block-shape registry from a terminal.
//!
//! ```text
//! main() -> init_tracing() -> BlockshapeConfig::load() -> build registry
//!        -> install() -> Command::parse() -> run()
//! ```
//!
//! Logs go to stderr (filtered by `RUST_LOG`, default `warn`) so stdout stays
//! machine-readable.

mod commands;

use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use blockshape_config::BlockshapeConfig;
use blockshape_core::ShapeRegistry;

use crate::commands::Command;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn build_registry(config: Option<&BlockshapeConfig>) -> Result<ShapeRegistry> {
    match config {
        Some(config) => config
            .build_registry()
            .context("configured shapes do not fit the built-in catalogue"),
        None => ShapeRegistry::builtin().context("built-in catalogue failed to register"),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let command = Command::parse(env::args().skip(1))?;

    let config = BlockshapeConfig::load().context("failed to load config")?;
    let registry = build_registry(config.as_ref())?;
    if blockshape_core::install(registry).is_err() {
        tracing::warn!("Shape registry was already installed; using the existing one");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&command, blockshape_core::registry(), &mut out)?;
    out.flush()?;
    Ok(())
}
