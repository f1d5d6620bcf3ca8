//! `circuit-search`: line-oriented front end over the dialogue engine.

mod repl;

use std::path::PathBuf;

use anyhow::Context;
use circuit_core::CircuitConfig;
use circuit_observability::init_tracing;
use circuit_session::{DialogueEngine, SessionManager};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "circuit-search")]
#[command(about = "Find vehicle circuit diagrams through a guided conversation", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file. Compiled defaults apply when omitted.
    #[arg(short, long, env = "CIRCUIT_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset CSV, overriding `dataset.path`.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Session id. A fresh one is generated when omitted.
    #[arg(short, long)]
    session: Option<String>,

    /// Skip the LLM provider and use rule-based NLU only.
    #[arg(long)]
    rules_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CircuitConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CircuitConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.dataset.path = data.display().to_string();
    }
    if cli.rules_only {
        config.nlu.provider = "rules".to_string();
    }

    init_tracing(&config.observability);

    let engine = DialogueEngine::from_config(&config)
        .with_context(|| format!("loading dataset {}", config.dataset.path))?;
    let session_id = cli
        .session
        .unwrap_or_else(SessionManager::new_session_id);
    info!(session_id = %session_id, "session started");

    repl::run(&engine, &session_id).context("terminal i/o failed")
}
