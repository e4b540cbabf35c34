//! RV64I functional simulator CLI.
//!
//! This binary wires the loader, the instruction driver, and reporting
//! together. It performs:
//! 1. **Run:** Load a flat binary at address zero and execute until the halt
//!    sentinel or a fault.
//! 2. **Reporting:** Dump final register/memory state and print statistics.
//! 3. **Exit codes:** 0 on halt, 127 on a runtime fault (state dumped first),
//!    1 when the image or configuration cannot be loaded.

use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

use rv64sim_core::config::Config;
use rv64sim_core::sim::Simulator;
use rv64sim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "rv64sim",
    author,
    version,
    about = "RV64I functional instruction set simulator",
    long_about = "Execute a flat RV64I binary against a simulated register file and memory.\n\nThe image loads byte-by-byte at address zero and runs until the halt word\n(0xFEEDFEED) or a fault. Final register and memory state is dumped on exit.\n\nExamples:\n  rv64sim run program.bin\n  rv64sim run program.bin --config sim.json --trace\n  RUST_LOG=debug rv64sim run program.bin --max-steps 10000"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a flat binary image until it halts or faults.
    Run {
        /// Program image, loaded byte-by-byte at address zero.
        image: String,

        /// JSON configuration file (partial files allowed).
        #[arg(short, long)]
        config: Option<String>,

        /// Stop after this many executed steps (0 = unlimited).
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print each fetched instruction.
        #[arg(long)]
        trace: bool,

        /// Skip the final register/memory dump.
        #[arg(long)]
        no_dump: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            image,
            config,
            max_steps,
            trace,
            no_dump,
        } => cmd_run(&image, config.as_deref(), max_steps, trace, no_dump),
    }
}

/// Runs the simulator: loads the image at address zero, then drives the
/// engine until halt or fault.
///
/// On halt, dumps state and exits 0. On a trap, reports it on stderr, dumps
/// state, and exits 127. Load and configuration failures exit 1 with nothing
/// dumped.
fn cmd_run(
    image: &str,
    config_path: Option<&str>,
    max_steps: Option<u64>,
    trace: bool,
    no_dump: bool,
) {
    let mut config = config_path.map_or_else(Config::default, load_config);
    if let Some(limit) = max_steps {
        config.general.max_steps = limit;
    }
    if trace {
        config.general.trace_instructions = true;
    }

    let mut sim = Simulator::new(&config);

    println!("[*] Direct execution: {image}");
    println!(
        "  Trace: {}  Start PC: {:#x}  Memory: {} KiB",
        config.general.trace_instructions,
        config.general.start_pc,
        config.memory.size_bytes / 1024
    );

    let bytes = loader::load(image, &mut sim.mem).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });
    println!("[*] Loaded {bytes} bytes at address 0\n");

    if let Err(trap) = sim.run() {
        eprintln!("\n[!] FATAL TRAP: {trap}");
        if !no_dump {
            sim.dump_state();
        }
        sim.stats.print();
        process::exit(127);
    }

    println!("\n[*] Halted normally");
    if !no_dump {
        sim.dump_state();
    }
    sim.stats.print();
}

/// Loads a JSON configuration file, exiting the process when it cannot be
/// read or parsed.
fn load_config(path: &str) -> Config {
    Config::load(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    })
}
