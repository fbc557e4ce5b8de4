//! ggg-bench-summary: per-solver statistics from benchmark results JSON.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ggg_dot::results::{group_by_solver_and_type, load_results, render_table, summarize_solvers};

/// Summarize solver benchmark results by game type.
#[derive(Parser, Debug)]
#[command(
    name = "ggg-bench-summary",
    version = env!("GGG_DOT_VERSION"),
    about = "Summarize solver benchmark results by game type"
)]
struct Cli {
    /// Results JSON (array, or object with a "results" array)
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let records = match load_results(&cli.input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    println!("Loaded {} results for analysis", records.len());
    if records.is_empty() {
        println!("No data found to summarize.");
        return;
    }

    let groups = group_by_solver_and_type(&records);
    println!();
    print!("{}", render_table(&groups));
    println!();
    println!("Summary statistics:");
    for summary in summarize_solvers(&groups) {
        println!("{}", summary);
    }
}
