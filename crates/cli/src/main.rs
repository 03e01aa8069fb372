//! Power-aware ALU model CLI.
//!
//! This binary is a thin driver around the model library. It performs:
//! 1. **Stimulus run:** Load a JSON vector file and apply one frame per clock period.
//! 2. **Baseline switches:** Disable clock gating and/or operand isolation for comparison runs.
//! 3. **Reporting:** Per-cycle output lines and the final activity statistics.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use alusim_core::config::Config;
use alusim_core::sim::{Simulator, vectors};

#[derive(Parser, Debug)]
#[command(
    name = "alusim",
    version,
    about = "Cycle-accurate power-aware 16-bit ALU model",
    long_about = "Run a JSON stimulus vector file against the behavioral model.\n\nEach frame drives one full clock period (low phase, rising edge, falling edge).\n\nExamples:\n  alusim run -f vectors.json\n  alusim run -f vectors.json --no-gating --no-isolation\n  alusim run -f vectors.json --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a stimulus vector file against the model.
    Run {
        /// JSON stimulus file (array of per-cycle input frames).
        #[arg(short, long)]
        file: PathBuf,

        /// Disable the clock-gate controller (ungated baseline).
        #[arg(long)]
        no_gating: bool,

        /// Disable operand isolation.
        #[arg(long)]
        no_isolation: bool,

        /// Emit per-edge trace output.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            no_gating,
            no_isolation,
            trace,
        } => cmd_run(&file, no_gating, no_isolation, trace),
    }
}

/// Runs the model over a stimulus file: one frame per clock period, then the
/// activity report. Exits with code 1 on a malformed or unreadable file.
fn cmd_run(file: &Path, no_gating: bool, no_isolation: bool, trace: bool) {
    let mut config = Config::default();
    config.power.clock_gating = !no_gating;
    config.power.operand_isolation = !no_isolation;
    config.general.trace_edges = trace;

    let default_level = if config.general.trace_edges {
        "trace"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let frames = vectors::load(file).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    });

    println!(
        "[*] Stimulus: {} ({} frames)  gating={}  isolation={}",
        file.display(),
        frames.len(),
        config.power.clock_gating,
        config.power.operand_isolation
    );
    println!();
    println!("cycle    op  a       b       ->  result  carry  zero");

    let mut sim = Simulator::new(config);
    for (cycle, frame) in frames.iter().enumerate() {
        sim.tick(*frame);
        let out = sim.outputs();
        println!(
            "{:5}   {:03b}  {:#06x}  {:#06x}  ->  {:#06x}  {}      {}",
            cycle,
            frame.op_select,
            frame.a,
            frame.b,
            out.result,
            u8::from(out.carry),
            u8::from(out.zero)
        );
    }

    sim.stats.print();
}
