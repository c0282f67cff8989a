//! Run orchestrator for coordinating the whole check
//!
//! This module provides:
//! - Workflow coordination: read → parse → resolve → report
//! - Strictly sequential resolution, one dependency at a time
//! - Failure policy: abort the batch on registry errors, or keep going

use crate::cli::CliArgs;
use crate::domain::{DependencyRecord, ResolvedDependency};
use crate::error::{AppError, ManifestError, RegistryError, ResolveError};
use crate::manifest::read_manifest;
use crate::output::Report;
use crate::progress::Progress;
use crate::registry::{GitHubAdapter, HttpClient, ReleaseSource};
use crate::resolver::{Resolution, VersionResolver};
use std::path::PathBuf;

/// What to do when a remote lookup fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole run; no report is written
    #[default]
    Abort,
    /// Report the dependency as unresolved and continue
    Continue,
}

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Package list to read
    pub manifest_path: PathBuf,
    /// Whether the report only lists updatable dependencies
    pub updatable_only: bool,
    /// Behavior on registry errors
    pub failure_policy: FailurePolicy,
    /// Whether to draw a progress bar
    pub show_progress: bool,
}

impl OrchestratorConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            manifest_path: args.path.clone(),
            updatable_only: args.updatable_only,
            failure_policy: if args.keep_going {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Abort
            },
            show_progress: !args.quiet,
        }
    }
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct RunResult {
    /// Every dependency in manifest order, resolved or not
    pub resolved: Vec<ResolvedDependency>,
    /// Manifest entries that were skipped
    pub skipped: Vec<ManifestError>,
    /// Dependencies whose latest version could not be determined
    pub unresolved: Vec<ResolveError>,
}

impl RunResult {
    /// Build the report for this run
    pub fn report(&self, updatable_only: bool) -> Report {
        Report::build(self.resolved.clone(), updatable_only)
    }
}

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator<S> {
    config: OrchestratorConfig,
    resolver: VersionResolver<S>,
}

impl Orchestrator<GitHubAdapter> {
    /// Create an orchestrator against the GitHub API named in the CLI arguments
    pub fn new(args: &CliArgs) -> Result<Self, RegistryError> {
        let client = HttpClient::new()?;
        let adapter = GitHubAdapter::with_base_url(client, &args.api_url);
        Ok(Self::with_source(OrchestratorConfig::from_cli(args), adapter))
    }
}

impl<S: ReleaseSource> Orchestrator<S> {
    /// Create an orchestrator with a custom release source
    pub fn with_source(config: OrchestratorConfig, source: S) -> Self {
        Self {
            config,
            resolver: VersionResolver::new(source),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Read the package list and resolve every dependency
    pub async fn run(&self) -> Result<RunResult, AppError> {
        let parsed = read_manifest(&self.config.manifest_path)?;
        tracing::debug!(
            "{}: {} entries, {} usable",
            self.config.manifest_path.display(),
            parsed.entry_count(),
            parsed.records.len()
        );

        let (resolved, unresolved) = self.resolve_all(&parsed.records).await?;

        Ok(RunResult {
            resolved,
            skipped: parsed.skipped,
            unresolved,
        })
    }

    /// Resolve records one after another, in manifest order
    pub async fn resolve_all(
        &self,
        records: &[DependencyRecord],
    ) -> Result<(Vec<ResolvedDependency>, Vec<ResolveError>), RegistryError> {
        let mut progress = Progress::new(self.config.show_progress);
        let mut resolved = Vec::with_capacity(records.len());
        let mut unresolved = Vec::new();

        tracing::info!("Checking repository updates...");
        progress.start(records.len() as u64, "Checking repositories");

        for record in records {
            progress.set_message(&record.name);

            let resolution = match self.resolver.resolve(record).await {
                Ok(resolution) => resolution,
                Err(e) if self.config.failure_policy == FailurePolicy::Continue => {
                    tracing::warn!("{}: {}", record.name, e);
                    Resolution::unresolved(record, ResolveError::lookup_failed(&record.name, &e))
                }
                Err(e) => {
                    progress.finish_and_clear();
                    return Err(e);
                }
            };

            if let Some(reason) = resolution.reason() {
                unresolved.push(reason.clone());
            }
            resolved.push(resolution.into_dependency());
            progress.inc();
        }

        progress.finish_and_clear();
        Ok((resolved, unresolved))
    }
}
