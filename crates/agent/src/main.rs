use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

use toolrelay::{announce, list_tools, logging, AgentServer};
use toolrelay_core::Config;

/// Line-delimited JSON command backend.
///
/// Reads `{"id", "command": "<tool>.<action>", "params"}` objects from stdin,
/// one per line, and answers each with `{"id", "result"}` or `{"id", "error"}`
/// on stdout. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "toolrelay", version, about, long_about = None)]
struct Cli {
    /// JSON config file (banner, extra market data, search template)
    #[arg(short, long, env = "TOOLRELAY_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only
    #[arg(short, long)]
    quiet: bool,

    /// Print the tool catalogue as JSON and exit
    #[arg(long)]
    list_tools: bool,

    /// Write the effective config (defaults merged with --config) to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(logging::derive_level(cli.verbose, cli.quiet))?;

    if cli.list_tools {
        println!("{}", serde_json::to_string_pretty(&list_tools())?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(path) = &cli.write_config {
        config
            .save(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        info!(path = %path.display(), "config written");
        return Ok(());
    }

    let server = AgentServer::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    announce(&mut out, &config.banner)?;
    info!(tools = server.router().registry().len(), "ready");

    let stats = server.run(stdin.lock(), &mut out)?;
    info!(
        lines = stats.lines,
        responses = stats.responses,
        dropped = stats.dropped,
        "input closed, shutting down"
    );

    Ok(())
}
