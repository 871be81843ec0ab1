//! fdu - flight data unit conversion from the command line
//!
//! Usage:
//! ```bash
//! fdu convert 250 kts mph
//! fdu normalize "lbs/hr"
//! fdu multiplier ft m
//! fdu standard F
//! fdu targets nm
//! fdu catalog > units.json
//! echo '{"value": 0, "unit": "C", "output": "F"}' | fdu batch
//! ```

mod batch;

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fdu_units::Catalog;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fdu",
    about = "Flight data unit conversion",
    long_about = "Normalise unit labels and convert values between the units known to fdu-units."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a value from one unit to another
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        unit: String,
        output: String,
    },

    /// Print the canonical spelling of a unit
    Normalize { unit: String },

    /// Print the linear multiplier between two units
    Multiplier { unit: String, output: String },

    /// Print the standard display unit (the unit itself when it has none)
    Standard { unit: String },

    /// List the units a unit converts to directly
    Targets { unit: String },

    /// Dump every table as JSON
    Catalog,

    /// Convert JSON requests read line by line from stdin
    Batch,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Standard display unit, falling back to the canonical spelling
fn standard_label(unit: &str) -> &str {
    let canonical = fdu_units::normalize(unit);
    fdu_units::standard(canonical).unwrap_or(canonical)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Convert { value, unit, output } => {
            let converted = fdu_units::convert(value, &unit, &output)
                .with_context(|| format!("converting {} from '{}' to '{}'", value, unit, output))?;
            println!("{}", converted);
        }
        Command::Normalize { unit } => {
            println!("{}", fdu_units::normalize(&unit));
        }
        Command::Multiplier { unit, output } => {
            let multiplier = fdu_units::multiplier(&unit, &output)
                .with_context(|| format!("looking up multiplier '{}' -> '{}'", unit, output))?;
            println!("{}", multiplier);
        }
        Command::Standard { unit } => {
            println!("{}", standard_label(&unit));
        }
        Command::Targets { unit } => {
            let targets = fdu_units::targets(&unit);
            debug!(unit = %unit, count = targets.len(), "listing targets");
            for target in targets {
                println!("{}", target);
            }
        }
        Command::Catalog => {
            let catalog = Catalog::snapshot();
            serde_json::to_writer_pretty(io::stdout().lock(), &catalog)
                .context("writing catalog")?;
            println!();
        }
        Command::Batch => {
            info!("Batch mode ready, waiting for requests...");
            let handled = batch::run(io::stdin().lock(), io::stdout().lock())?;
            info!("Input closed after {} requests", handled);
        }
    }

    Ok(())
}
