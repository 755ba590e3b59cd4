use anyhow::{anyhow, Result};
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// `-q` wins over `-v`; each `-v` raises the level one step from info.
pub fn derive_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Log to stderr; stdout carries the response stream. `RUST_LOG` directives apply on top.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
