//! CLI argument parsing module for spmup

use crate::manifest::DEFAULT_PACKAGE_LIST;
use crate::output::{OutputFormat, DEFAULT_OUTPUT_FILE};
use crate::registry::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;

/// Reports which Swift package dependencies have newer GitHub releases
#[derive(Parser, Debug, Clone)]
#[command(
    name = "spmup",
    about = "Check Swift package dependencies for newer GitHub releases"
)]
pub struct CliArgs {
    /// Path to a package list generated by swift-package-list
    #[arg(default_value = DEFAULT_PACKAGE_LIST)]
    pub path: PathBuf,

    /// Only show repos that have an update
    #[arg(long)]
    pub updatable_only: bool,

    /// File the JSON report is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Format of the report printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Keep checking the remaining packages when a request fails
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - warnings and the report only
    #[arg(short, long)]
    pub quiet: bool,

    /// Print version
    #[arg(short = 'V', long = "version")]
    pub print_version: bool,
}
