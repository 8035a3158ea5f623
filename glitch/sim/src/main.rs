// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{Parser, Subcommand};
use glitch_core::{
    sample, FastrandRandom, Random, SampleMode, SampleStats, Scene, SceneConfig, SeededRandom,
};
use std::path::PathBuf;
use tracing::{info, warn, Level};

const DEFAULT_CONFIG_PATH: &str = "glitch.json";

#[derive(Debug, Parser)]
#[command(name = "glitch-sim", about = "Headless glitch effect sampler")]
struct Cli {
    /// Seed for a reproducible entropy source
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw values between two bounds and report their distribution
    Sample {
        #[arg(long, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, allow_hyphen_values = true)]
        max: f64,
        /// Allow fractional results even for whole-number bounds
        #[arg(long)]
        decimal: bool,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Also print every drawn value
        #[arg(long)]
        values: bool,
    },
    /// Build a scene of glitches and print its initial state
    Scene {
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides the number of glitches from the config
        #[arg(long)]
        glitches: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Sample {
            min,
            max,
            decimal,
            count,
            values,
        } => {
            let random = entropy_source(cli.seed);
            let mode = SampleMode::infer(min, max, decimal);
            info!(min, max, ?mode, count, "sampling");

            if values {
                let drawn: Vec<f64> = (0..count)
                    .map(|_| sample(random.as_ref(), min, max, mode))
                    .collect();
                let mut stats = SampleStats::new(min, max, mode);
                drawn.iter().for_each(|v| stats.record(*v));
                println!("{}", serde_json::to_string(&drawn)?);
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let stats = SampleStats::collect(random.as_ref(), min, max, mode, count);
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }
        Command::Scene { config, glitches } => {
            let mut config = load_config(config)?;
            if let Some(glitches) = glitches {
                config.num_glitches = glitches;
            }
            let random = entropy_source(cli.seed.or(config.seed));
            let scene = Scene::new(random.as_ref(), &config);
            info!(
                glitches = scene.glitches().len(),
                image = scene.image_url(),
                "scene ready"
            );
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
    }

    Ok(())
}

fn entropy_source(seed: Option<u64>) -> Box<dyn Random> {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded entropy source");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(FastrandRandom),
    }
}

/// An explicit path must load; the default path falls back to built-in values.
fn load_config(path: Option<PathBuf>) -> Result<SceneConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(SceneConfig::load(path)?),
        None => match SceneConfig::load(DEFAULT_CONFIG_PATH) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("{} not loaded ({}), using default configuration", DEFAULT_CONFIG_PATH, e);
                Ok(SceneConfig::default())
            }
        },
    }
}
