//! Scope Trace CLI
//!
//! Runs the instrumented benchmark workload and checks trace documents
//! produced by the library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use scope_trace::commands::{
    display_version, execute_run, validate_args, validate_trace_file, RunArgs,
};
use scope_trace::utils::config::{DEFAULT_SESSION_NAME, DEFAULT_TRACE_PATH};

/// Scope Trace - scoped wall-clock instrumentation
#[derive(Parser, Debug)]
#[command(name = "scope-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the instrumented benchmark workload and write a trace
    Run {
        /// Session name
        #[arg(short, long, default_value = DEFAULT_SESSION_NAME)]
        name: String,

        /// Output path for the trace document
        #[arg(short, long, default_value = DEFAULT_TRACE_PATH, env = "SCOPE_TRACE_OUTPUT")]
        output: PathBuf,

        /// Fibonacci depth per benchmark thread (repeatable)
        #[arg(short, long = "depth", default_values_t = [9u32, 10u32])]
        depths: Vec<u32>,

        /// Iterations of each print loop (0 skips them)
        #[arg(long, default_value = "0")]
        print_loops: usize,
    },

    /// Validate a trace document
    Validate {
        /// Path to trace JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Run {
            name,
            output,
            depths,
            print_loops,
        } => {
            let args = RunArgs {
                session_name: name,
                output,
                depths,
                print_loops,
            };

            // Validate args first
            validate_args(&args)?;

            let report = execute_run(args)?;
            for result in &report.results {
                println!("Fib({}) = {}", result.depth, result.value);
            }
            println!(
                "Session '{}': {} events",
                report.summary.name, report.summary.event_count
            );
        }

        Commands::Validate { file } => {
            validate_trace_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
