//! Run command implementation.
//!
//! The run command:
//! 1. Begins a trace session
//! 2. Runs the benchmark workload, one thread per Fibonacci depth
//! 3. Ends the session and reports what was written

use super::models::{FibonacciResult, RunArgs, RunReport};
use crate::session::Session;
use crate::utils::config::MAX_FIBONACCI_DEPTH;
use crate::{profile_function, profile_scope};
use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::thread;
use std::time::{Duration, Instant};

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace destination cannot be opened
/// * A benchmark thread panicked
/// * The document footer cannot be written
pub fn execute_run(args: RunArgs) -> Result<RunReport> {
    let start_time = Instant::now();

    let session = Session::new();
    session
        .begin(args.session_name.as_str(), &args.output)
        .context("Failed to begin trace session")?;

    let results = run_benchmarks(&session, &args.depths, args.print_loops)?;

    let summary = session.end().context("Failed to finalize trace document")?;

    let elapsed = start_time.elapsed();
    info!(
        "✓ {} events written to {} in {:.2}s",
        summary.event_count,
        args.output.display(),
        elapsed.as_secs_f64()
    );

    Ok(RunReport {
        summary,
        results,
        elapsed,
    })
}

/// Validate run arguments
///
/// **Public** - can be called before execute_run for early validation
pub fn validate_args(args: &RunArgs) -> Result<()> {
    if args.session_name.trim().is_empty() {
        anyhow::bail!("Session name cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.depths.is_empty() {
        anyhow::bail!("At least one Fibonacci depth is required");
    }

    if let Some(depth) = args.depths.iter().find(|&&d| d > MAX_FIBONACCI_DEPTH) {
        anyhow::bail!(
            "Fibonacci depth {} is too large (max {})",
            depth,
            MAX_FIBONACCI_DEPTH
        );
    }

    Ok(())
}

/// Time the whole workload, with one thread per depth
pub fn run_benchmarks(
    session: &Session,
    depths: &[u32],
    print_loops: usize,
) -> Result<Vec<FibonacciResult>> {
    profile_function!(session);

    info!("Running benchmarks...");

    if print_loops > 0 {
        print_function(session, print_loops, 0);
        print_function(session, print_loops, 5);
    }

    thread::scope(|s| {
        let handles: Vec<_> = depths
            .iter()
            .map(|&depth| {
                s.spawn(move || FibonacciResult {
                    depth,
                    value: fibonacci(session, depth),
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| anyhow!("benchmark thread panicked")))
            .collect()
    })
}

/// Recursive Fibonacci, one scope per call
pub fn fibonacci(session: &Session, x: u32) -> u64 {
    profile_scope!(session, format!("Fib {}", x));

    // keeps every scope at least a microsecond long
    thread::sleep(Duration::from_micros(1));

    if x < 3 {
        return 1;
    }

    fibonacci(session, x - 1) + fibonacci(session, x - 2)
}

/// Print loop used to give the trace a few long, flat scopes
pub fn print_function(session: &Session, iterations: usize, offset: usize) {
    profile_function!(session);

    debug!("Printing {} lines", iterations);
    for i in 0..iterations {
        println!("Hello world #{}", i + offset);
    }
}
