use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use erangel_ops::{init_tracing, load_telemetry, FileSource};
use erangel_telemetry::MatchSummary;
use erangel_types::config::ErangelConfig;
use tracing::debug;

/// Decode a match telemetry file and print what happened in it.
#[derive(Debug, Parser)]
#[command(name = "erangel", version)]
struct Args {
    /// Telemetry JSON document (one array of events).
    input: PathBuf,
    /// Config file; falls back to $ERANGEL_CONFIG, then configs/dev.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the decoded events as JSON instead of the summary.
    #[arg(long)]
    dump: bool,
    #[arg(long)]
    timeline_limit: Option<usize>,
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args);
    init_tracing(&config.ops)?;

    let source = FileSource::new(&args.input);
    let telemetry = load_telemetry(&source)
        .await
        .with_context(|| format!("failed to load telemetry from {}", args.input.display()))?;
    debug!(players = telemetry.players.len(), "telemetry ready");

    if args.dump {
        let doc = if config.report.pretty_dump {
            serde_json::to_string_pretty(&telemetry.events)?
        } else {
            serde_json::to_string(&telemetry.events)?
        };
        println!("{doc}");
        return Ok(());
    }

    let summary = MatchSummary::from_telemetry(&telemetry, config.report.timeline_limit);
    print!("{summary}");
    Ok(())
}

fn load_config(args: &Args) -> ErangelConfig {
    let from_env = env::var("ERANGEL_CONFIG").ok().map(PathBuf::from);
    let path = args
        .config
        .clone()
        .or(from_env)
        .unwrap_or_else(|| "configs/dev.toml".into());
    let mut config = match ErangelConfig::from_file(&path) {
        Ok(cfg) => {
            if let Err(err) = cfg.validate() {
                eprintln!(
                    "Invalid config in '{}': {err}. Falling back to internal defaults.",
                    path.display()
                );
                ErangelConfig::default()
            } else {
                cfg
            }
        }
        Err(err) => {
            eprintln!(
                "Failed to load config from '{}': {err}. Falling back to internal defaults.",
                path.display()
            );
            ErangelConfig::default()
        }
    };

    if let Some(level) = args.log_level.as_deref().filter(|level| !level.trim().is_empty()) {
        config.ops.log_level = level.to_string();
    }
    if let Some(limit) = args.timeline_limit {
        config.report.timeline_limit = limit.max(1);
    }
    debug_assert!(config.validate().is_ok());
    config
}
