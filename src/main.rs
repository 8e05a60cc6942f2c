use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use ward_normalizer::normalize::Normalized;
use ward_normalizer::observability::{self, metrics};
use ward_normalizer::{Entity, NormalizerConfig, SchemaNormalizer, REGISTRY};

#[derive(Parser)]
#[command(name = "ward_normalizer")]
#[command(about = "Normalize hospital ward backend payloads into canonical records")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print canonical JSON for a payload
    Normalize {
        /// Entity the payload holds (admission, lab-test, doctor-visit, ...)
        #[arg(long)]
        entity: Entity,
        /// Treat the payload as a single-object response
        #[arg(long)]
        single: bool,
        /// Read the payload from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the outbound PascalCase shape of a single record
    Outbound {
        #[arg(long)]
        entity: Entity,
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List entities and their canonical fields
    Entities,
}

fn read_payload(input: Option<&Path>) -> anyhow::Result<Value> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read payload from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&raw).context("payload is not valid JSON")
}

fn print_result(result: &Normalized<Value>) -> anyhow::Result<()> {
    if !result.diagnostics.is_empty() {
        info!(count = result.diagnostics.len(), "payload normalized with diagnostics");
    }
    println!("{}", serde_json::to_string_pretty(&result.records)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = NormalizerConfig::load(cli.config.as_deref())?;
    let _guard = observability::init_logging(&config.logging);
    metrics::init(&config.metrics)?;
    debug!(?config, "configuration loaded");

    let normalizer = SchemaNormalizer::new(&config);

    match cli.command {
        Commands::Normalize { entity, single, input } => {
            let payload = read_payload(input.as_deref())?;
            let handler = REGISTRY.require(entity)?;
            let result = if single {
                handler.normalize_one(&normalizer, &payload)?
            } else {
                handler.normalize_list(&normalizer, &payload)?
            };
            print_result(&result)?;
        }
        Commands::Outbound { entity, input } => {
            let payload = read_payload(input.as_deref())?;
            let result = REGISTRY.require(entity)?.outbound(&normalizer, &payload)?;
            print_result(&result)?;
        }
        Commands::Entities => {
            for entity in REGISTRY.list_entities() {
                let handler = REGISTRY.require(entity)?;
                let fields: Vec<&str> = handler.fields().iter().map(|f| f.canonical).collect();
                println!("{:<14} {}", entity.name(), fields.join(", "));
            }
        }
    }

    if let Some(rendered) = metrics::render() {
        debug!(metrics = %rendered, "metrics snapshot");
    }

    Ok(())
}
