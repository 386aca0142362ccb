mod engine;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uci_options::EngineConfig;

use crate::engine::Engine;

#[derive(Parser, Debug)]
#[command(name = "uci_engine")]
#[command(about = "UCI front end: option registry and resource setup")]
struct Cli {
    /// TOML file with option overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter (overrides the config file and RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    // stdout belongs to the protocol
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Split `name <N..> value <V..>`; both parts may contain spaces.
fn parse_setoption(args: &[&str]) -> Option<(String, String)> {
    let name_at = args.iter().position(|&x| x == "name")?;
    let value_at = args.iter().position(|&x| x == "value").unwrap_or(args.len());
    if value_at <= name_at + 1 {
        return None;
    }
    let name = args[name_at + 1..value_at].join(" ");
    let value = args.get(value_at + 1..).map(|v| v.join(" ")).unwrap_or_default();
    Some((name, value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    init_logging(cli.log.as_deref().or(config.log.as_deref()));

    let mut engine = Engine::new(engine_core::caps(), &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name UciEngine 0.1")?;
                writeln!(stdout, "id author ML-chess")?;
                write!(stdout, "{}", engine.options())?;
                writeln!(stdout, "uciok")?;
                stdout.flush()?;
            }
            "setoption" => match parse_setoption(&parts[1..]) {
                Some((name, value)) => {
                    if !engine.set_option(&name, &value) {
                        writeln!(stdout, "info string No such option: {name}")?;
                        stdout.flush()?;
                    }
                }
                None => tracing::warn!(%line, "malformed setoption"),
            },
            "isready" => {
                engine.apply_pending();
                tracing::debug!(
                    settings = ?engine.live_settings(),
                    hash_bytes = engine.hash_table().map_or(0, |t| t.len()),
                    "resources applied"
                );
                writeln!(stdout, "readyok")?;
                stdout.flush()?;
            }
            "ucinewgame" => engine.request_clear(),
            "quit" => break,
            other => tracing::debug!(command = other, "ignored"),
        }
    }

    engine.shutdown();
    Ok(())
}
