//! cwrapgen CLI - Emscripten cwrap binding generator for C headers

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use cwrapgen::GenerateOptions;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("cwrapgen=debug")
    } else {
        EnvFilter::new("cwrapgen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let opts = GenerateOptions::new(&cli.root, &cli.output)
        .with_strategy(cli.strategy.into())
        .with_manifest(cli.manifest.clone());

    let report = cwrapgen::generate_wrappers(&opts)?;

    println!(
        "Scanned {} header(s), bound {} ({} functions)",
        report.headers_scanned, report.headers_bound, report.functions_bound
    );
    println!("Generated cwrap code saved to {}", report.output.display());

    Ok(())
}
