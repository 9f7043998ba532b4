//! Conduit CLI
//!
//! One-shot exploration of the perspectival density engine: compute a score
//! from five invariants, browse the preset catalog, print the spectrum.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use conduit_core::{Category, DensityResult, EngineConfig, Invariants, Preset};
use conduit_density::DensityEngine;
use tracing::debug;

#[derive(Parser)]
#[command(name = "conduit")]
#[command(about = "Perspectival density calculator and preset explorer")]
#[command(version)]
struct Cli {
    /// Optional TOML config overriding band edges and warning thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute density from the five invariants
    Calc {
        /// φ — Integration
        #[arg(long)]
        phi: f64,

        /// τ — Temporal Depth
        #[arg(long)]
        tau: f64,

        /// ρ — Binding
        #[arg(long)]
        rho: f64,

        /// H — Entropy
        #[arg(long)]
        entropy: f64,

        /// κ — Coherence
        #[arg(long)]
        kappa: f64,

        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog presets with their computed densities
    Presets {
        /// Restrict to one category (human, animal, ai, altered, pathological)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show a single preset in full
    Show {
        /// Preset name, e.g. "Flow State"
        name: String,

        /// Emit the preset and its result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the catalog ordered by ascending density
    Spectrum,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config = EngineConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            debug!(path = %path.display(), "loaded engine config");
            config
        }
        None => EngineConfig::default(),
    };
    let engine = DensityEngine::with_config(config);

    match cli.command {
        Commands::Calc {
            phi,
            tau,
            rho,
            entropy,
            kappa,
            json,
        } => {
            let params = Invariants::new(phi, tau, rho, entropy, kappa)?;
            let result = engine.calculate(&params);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&params, &result);
            }
        }

        Commands::Presets { category } => {
            let presets: Vec<&Preset> = match category {
                Some(c) => conduit_presets::by_category(c).collect(),
                None => conduit_presets::all().iter().collect(),
            };
            for preset in presets {
                let result = engine.calculate(&preset.invariants);
                println!(
                    "{:<24} [{:<12}] D = {:.3}",
                    preset.name,
                    preset.category.as_str(),
                    result.density
                );
            }
            println!("\nNote: {}", conduit_presets::ESTIMATES_DISCLAIMER);
        }

        Commands::Show { name, json } => {
            let Some(preset) = conduit_presets::by_name(&name) else {
                bail!("no preset named `{name}`; try `conduit presets` for the full list");
            };
            let result = engine.calculate(&preset.invariants);
            if json {
                let payload = serde_json::json!({ "preset": preset, "result": result });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{} [{}]", preset.name, preset.category.as_str());
                println!("{}\n", preset.description);
                print_result(&preset.invariants, &result);
                println!("\nNote: {}", conduit_presets::ESTIMATES_DISCLAIMER);
            }
        }

        Commands::Spectrum => {
            for entry in conduit_display::spectrum() {
                println!(
                    "{:>7.3}  {:<24} [{}]",
                    entry.density,
                    entry.preset.name,
                    entry.preset.category.as_str()
                );
            }
            println!("\nNote: {}", conduit_presets::ESTIMATES_DISCLAIMER);
        }
    }

    Ok(())
}

fn print_result(params: &Invariants, result: &DensityResult) {
    println!("{params}");
    println!();
    println!("D = {:.3}", result.density);
    println!("  structural base (φ×τ×ρ):    {:.4}", result.structural_base);
    println!("  entropy penalty (1−√H):     {:.4}", result.entropy_penalty);
    println!(
        "  coherence recovery (H×κ):   {:.4}",
        result.coherence_recovery
    );
    println!(
        "  entropy modulator:          {:.4}",
        result.entropy_modulator
    );
    println!();
    println!("{}", result.interpretation);
    for warning in &result.warnings {
        println!("⚠ {warning}");
    }
}
