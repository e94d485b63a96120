//! Parley Control - terminal front end for the Parley chat pipeline

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use parley_shared::{ParleyConfig, ResponsePipeline, ResponseSpeed, StdRandom};
use parleyctl::cli::{Cli, Commands, ConfigCommands};
use parleyctl::{logging, repl};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => ParleyConfig::default_path()
            .ok_or_else(|| anyhow!("No user config directory; pass --config"))?,
    };

    let mut config = ParleyConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(speed) = &cli.speed {
        config.chat.response_speed = ResponseSpeed::parse(speed);
    }

    match cli.command {
        None | Some(Commands::Chat) => chat(&config, cli.seed, cli.transcript).await,
        Some(Commands::Ask { message, json }) => ask(&config, cli.seed, &message.join(" "), json).await,
        Some(Commands::Config { action }) => config_command(&config, &config_path, action),
    }
}

fn build_pipeline(config: &ParleyConfig, seed: Option<u64>) -> Result<ResponsePipeline> {
    let pipeline = ResponsePipeline::from_config(&config.pipeline)
        .context("Failed to set up the search provider")?;
    Ok(match seed {
        Some(seed) => {
            debug!(seed, "using seeded randomness");
            pipeline.with_rng(Box::new(StdRandom::seeded(seed)))
        }
        None => pipeline,
    })
}

async fn chat(config: &ParleyConfig, seed: Option<u64>, transcript: Option<PathBuf>) -> Result<()> {
    let mut pipeline = build_pipeline(config, seed)?;
    let options = repl::ReplOptions::from_settings(&config.chat);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut pipeline, &options, stdin, &mut stdout).await?;

    if let Some(path) = transcript {
        let json = pipeline.context().to_json()?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
        info!("Transcript written to {}", path.display());
    }
    Ok(())
}

async fn ask(config: &ParleyConfig, seed: Option<u64>, message: &str, json: bool) -> Result<()> {
    let mut pipeline = build_pipeline(config, seed)?;
    let response = pipeline.respond(message).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.text);
    }
    Ok(())
}

fn config_command(config: &ParleyConfig, path: &Path, action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            println!("# {}", path.display());
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Init => {
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                ParleyConfig::default()
                    .save(path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Wrote default config to {}", path.display());
            }
        }
    }
    Ok(())
}
