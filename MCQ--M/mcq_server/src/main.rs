#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! `mcqgen`: generate multiple-choice questions from the command line or
//! over HTTP.

/// TOML configuration with environment overrides.
mod config;
/// HTML pages.
mod render;
/// axum routes and listener.
mod server;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mcq_nlp::{InputPayload, UploadedFile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{config::AppConfig, server::GenerateResponse};

#[derive(Parser, Debug)]
#[command(name = "mcqgen", version, about = "Multiple-choice question generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints questions for a text or a .txt/.pdf file as JSON.
    Generate(GenerateArgs),
    /// Runs the HTTP server.
    Serve {
        /// TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides `server.host`.
        #[arg(long)]
        host: Option<String>,
        /// Overrides `server.port`.
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Raw text to question.
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,
    /// Document to question.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => handle_generate(args),
        Commands::Serve { config, host, port } => {
            let mut config = AppConfig::resolve(config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("starting tokio runtime")?;
            runtime.block_on(server::run(&config))
        }
    }
}

fn handle_generate(args: GenerateArgs) -> Result<()> {
    let config = AppConfig::resolve(args.config.as_deref())?;
    let telemetry = config.telemetry.build("mcqgen", false)?;
    let runtime = config.runtime(Some(telemetry))?;
    let payload = match (args.text, args.file) {
        (_, Some(path)) => {
            let bytes =
                fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            InputPayload::from_file(UploadedFile::new(filename, bytes))
        }
        (Some(text), None) => InputPayload::from_text(text),
        (None, None) => InputPayload::default(),
    };
    let mut rng = args
        .seed
        .or(config.server.seed)
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    let mcqs = runtime.generate(payload, &mut rng)?;
    let response = GenerateResponse { mcqs };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");
    Ok(())
}
