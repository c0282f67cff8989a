//! spmup - Swift package update checker CLI tool
//!
//! Reads a package list, looks up the latest GitHub release of every
//! dependency and writes `updatablePackages.json`.

use clap::Parser;
use spmup::cli::CliArgs;
use spmup::orchestrator::Orchestrator;
use spmup::output::create_formatter;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Handle version flag
    if args.print_version {
        println!("spmup {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    spmup::logging::init(args.verbose, args.quiet);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    tracing::debug!("spmup v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Package list: {}", args.path.display());

    let orchestrator = Orchestrator::new(&args)?;
    let result = orchestrator.run().await?;

    let report = result.report(args.updatable_only);

    let formatter = create_formatter(args.format);
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;
    drop(stdout);

    report.write_to(&args.output)?;
    tracing::info!("Report written to {}", args.output.display());

    if !result.unresolved.is_empty() {
        tracing::warn!(
            "{} package(s) could not be checked",
            result.unresolved.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}
