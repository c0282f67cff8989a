//! Report building and output formatting
//!
//! This module provides:
//! - The `repos` / `updatable` report written to `updatablePackages.json`
//! - JSON output (the same document that is written to disk)
//! - Text output for human-readable display

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{TextFormatter, VersionChangeType};

use crate::domain::ResolvedDependency;
use crate::error::OutputError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Default report file name, written to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "updatablePackages.json";

/// Output format for stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON report
    #[default]
    Json,
    /// Human-readable summary of outdated dependencies
    Text,
}

/// All resolved dependencies and the subset that can be updated.
///
/// Field order matches the sorted key order of the serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Every dependency in manifest order (empty in updatable-only mode)
    pub repos: Vec<ResolvedDependency>,
    /// Dependencies whose pinned version differs from the latest version
    pub updatable: Vec<ResolvedDependency>,
}

impl Report {
    /// Partition resolved dependencies, keeping their relative order
    pub fn build(resolved: Vec<ResolvedDependency>, updatable_only: bool) -> Self {
        let updatable: Vec<ResolvedDependency> = resolved
            .iter()
            .filter(|d| !d.is_up_to_date())
            .cloned()
            .collect();

        let repos = if updatable_only { Vec::new() } else { resolved };

        Self { repos, updatable }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON document to a file
    pub fn write_to(&self, path: &Path) -> Result<(), OutputError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| OutputError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the report
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter for the requested format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter::new()),
    }
}
