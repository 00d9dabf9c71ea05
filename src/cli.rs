//! Command-line surface of the `runner-stats` binary.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::image_ref::parse_image;
use crate::models::Snapshot;
use crate::telemetry::{average, checked_decimate, decimate};

/// Reduce usage snapshot series and resolve image references.
///
/// Examples:
///   runner-stats decimate --input stats.json --target 120
///   runner-stats average < stats.json
///   runner-stats parse-image mongo quay.io:8080/iron/hello:v2
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file (overrides CONFIG_FILE)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decimate a JSON array of snapshots to at most N points
    Decimate {
        /// Input file; reads stdin when omitted
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Max output points (defaults to decimation.target_points)
        #[arg(short, long, value_name = "N")]
        target: Option<usize>,
    },

    /// Average a JSON array of snapshots into one snapshot
    Average {
        /// Input file; reads stdin when omitted
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Split image references into registry, repository and tag
    ParseImage {
        /// One or more image references
        #[arg(required = true, value_name = "REF")]
        references: Vec<String>,
    },
}

/// Reads a JSON array of snapshots from `input`, or stdin when `None`.
pub fn read_snapshots(input: Option<&PathBuf>) -> anyhow::Result<Vec<Snapshot>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("reading stdin")?;
            s
        }
    };
    serde_json::from_str(&raw).context("parsing snapshot JSON array")
}

/// Runs one subcommand, writing JSON results to `out`.
pub fn run(command: Command, config: &AppConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Decimate { input, target } => {
            let snapshots = read_snapshots(input.as_ref())?;
            let target = target.unwrap_or(config.decimation.target_points);
            let input_len = snapshots.len();
            let reduced = if config.decimation.validate_order {
                checked_decimate(target, snapshots)?
            } else {
                decimate(target, snapshots)
            };
            info!(
                input = input_len,
                output = reduced.len(),
                target_points = target,
                "decimate"
            );
            writeln!(out, "{}", serde_json::to_string_pretty(&reduced)?)?;
        }
        Command::Average { input } => {
            let snapshots = read_snapshots(input.as_ref())?;
            let Some(mean) = average(&snapshots) else {
                bail!("cannot average an empty snapshot array");
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&mean)?)?;
        }
        Command::ParseImage { references } => {
            for reference in &references {
                let parsed = parse_image(reference);
                debug!(reference = %reference, parsed = %parsed, "parsed image");
                writeln!(out, "{}", serde_json::to_string(&parsed)?)?;
            }
        }
    }
    Ok(())
}
