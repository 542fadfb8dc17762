//! Cache hierarchy simulator CLI.
//!
//! This binary drives the core simulator from the command line:
//! 1. **Run:** Replay one trace file through one hierarchy and print the
//!    energy/latency report.
//! 2. **Sweep:** Replay every trace in a directory under several L2
//!    associativities, constructing a fresh hierarchy per combination (all
//!    simulator state is cumulative, so instances are never reused).
//!
//! Configuration is JSON (see `HierarchyConfig`); omitted fields fall back to
//! the built-in defaults. Diagnostics honor `RUST_LOG`.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cachesim_core::{Hierarchy, HierarchyConfig, trace};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    version,
    about = "Trace-driven cache hierarchy energy/latency simulator",
    long_about = "Replay memory-access traces through a split-L1 / unified-L2 / DRAM hierarchy \
                  and report per-level accesses, misses, energy, and time.\n\n\
                  Examples:\n  \
                  cachesim run -t traces/048.ora.din\n  \
                  cachesim run -t traces/048.ora.din -c config.json --assoc 8\n  \
                  cachesim sweep -d traces/ --assoc 1,2,4,8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a single trace file and print the report.
    Run {
        /// Trace file (dinero-style: `kind address data` per line).
        #[arg(short, long)]
        trace: PathBuf,

        /// JSON configuration file (defaults used when omitted).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured L2 associativity.
        #[arg(long)]
        assoc: Option<usize>,

        /// Replacement-policy seed (0 = default seed).
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Replay every trace in a directory across several L2 associativities.
    Sweep {
        /// Directory containing trace files.
        #[arg(short, long)]
        dir: PathBuf,

        /// L2 associativities to sweep.
        #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 4, 8])]
        assoc: Vec<usize>,

        /// JSON configuration file (defaults used when omitted).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Replacement-policy seed (0 = default seed).
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            trace,
            config,
            assoc,
            seed,
        } => cmd_run(&trace, config.as_deref(), assoc, seed),
        Commands::Sweep {
            dir,
            assoc,
            config,
            seed,
        } => cmd_sweep(&dir, &assoc, config.as_deref(), seed),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Loads a JSON configuration, or the defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<HierarchyConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(HierarchyConfig::default()),
    }
}

/// Replays one trace through one freshly built hierarchy and prints the report.
fn replay(
    trace_path: &Path,
    config: &HierarchyConfig,
    seed: u64,
) -> Result<(), Box<dyn Error>> {
    let records = trace::read_trace_file(trace_path)?;
    let mut hierarchy = Hierarchy::with_seed(config, seed)?;
    for record in &records {
        hierarchy.process(record);
    }

    println!(
        "Trace: {} ({} accesses, L2 {}-way)",
        trace_path.display(),
        records.len(),
        config.l2_associativity
    );
    hierarchy.stats().print_report();
    println!();
    Ok(())
}

fn cmd_run(
    trace_path: &Path,
    config_path: Option<&Path>,
    assoc: Option<usize>,
    seed: u64,
) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(config_path)?;
    if let Some(ways) = assoc {
        config.l2_associativity = ways;
    }
    replay(trace_path, &config, seed)
}

fn cmd_sweep(
    dir: &Path,
    assoc: &[usize],
    config_path: Option<&Path>,
    seed: u64,
) -> Result<(), Box<dyn Error>> {
    let base = load_config(config_path)?;

    let mut traces: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    traces.sort();

    if traces.is_empty() {
        return Err(format!("no trace files in {}", dir.display()).into());
    }

    for trace_path in &traces {
        for &ways in assoc {
            let config = HierarchyConfig {
                l2_associativity: ways,
                ..base.clone()
            };
            replay(trace_path, &config, seed)?;
        }
    }
    Ok(())
}
