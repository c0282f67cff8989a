//! Version resolution pipeline
//!
//! For one dependency:
//! 1. Fetch releases. If any exist, pick the first non-packaging release.
//! 2. Otherwise fetch tags, pick the first non-packaging tag and date it
//!    through its commit object.
//!
//! Registry errors are returned as `Err` and abort the caller's batch unless
//! it decides otherwise. Missing releases or tags are `Resolution::Unresolved`.

mod slug;
mod version;

pub use slug::repository_slug;
pub use version::{
    is_packaging_tag, normalize_version, select_release, select_tag, PACKAGING_TAG_MARKER,
};

use crate::domain::{DependencyRecord, ReleaseCandidate, ResolvedDependency};
use crate::error::{RegistryError, ResolveError};
use crate::registry::ReleaseSource;

/// Outcome of resolving a single dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A latest version was found
    Resolved(ResolvedDependency),
    /// No usable release or tag; the record is reported without a latest version
    Unresolved {
        record: DependencyRecord,
        reason: ResolveError,
    },
}

impl Resolution {
    /// Creates an Unresolved result
    pub fn unresolved(record: &DependencyRecord, reason: ResolveError) -> Self {
        Resolution::Unresolved {
            record: record.clone(),
            reason,
        }
    }

    /// The dependency as it appears in the report
    pub fn into_dependency(self) -> ResolvedDependency {
        match self {
            Resolution::Resolved(dependency) => dependency,
            Resolution::Unresolved { record, .. } => ResolvedDependency::unresolved(record),
        }
    }

    /// Failure reason, if the dependency could not be resolved
    pub fn reason(&self) -> Option<&ResolveError> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Unresolved { reason, .. } => Some(reason),
        }
    }
}

/// Resolves the latest published version of dependencies against a release source
pub struct VersionResolver<S> {
    source: S,
}

impl<S: ReleaseSource> VersionResolver<S> {
    /// Create a resolver backed by the given source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get the underlying release source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve the latest version of one dependency
    pub async fn resolve(&self, record: &DependencyRecord) -> Result<Resolution, RegistryError> {
        let slug = repository_slug(&record.repository_url);

        let candidate = match self.find_candidate(record, slug).await? {
            Ok(candidate) => candidate,
            Err(reason) => {
                tracing::warn!(
                    "failed to update {} ({}): {}",
                    record.name,
                    record.repository_url,
                    reason
                );
                return Ok(Resolution::unresolved(record, reason));
            }
        };

        let latest_version = normalize_version(&candidate.tag_or_release_name).to_string();
        tracing::debug!(
            "{}: latest {} published {}",
            record.name,
            latest_version,
            candidate.published_at.as_deref().unwrap_or("-")
        );

        Ok(Resolution::Resolved(ResolvedDependency::updated(
            record,
            Some(latest_version),
            candidate.published_at,
        )))
    }

    /// Walk the releases → tags → commit fallback chain
    async fn find_candidate(
        &self,
        record: &DependencyRecord,
        slug: &str,
    ) -> Result<Result<ReleaseCandidate, ResolveError>, RegistryError> {
        let releases = self.source.fetch_releases(slug).await?;

        if !releases.is_empty() {
            return Ok(select_release(&releases)
                .ok_or_else(|| ResolveError::no_qualifying_release(&record.name, slug)));
        }

        tracing::debug!(
            "{} has no releases on {}, falling back to tags",
            slug,
            self.source.name()
        );
        let tags = self.source.fetch_tags(slug).await?;

        let Some(candidate) = select_tag(&tags) else {
            return Ok(Err(ResolveError::no_qualifying_release(&record.name, slug)));
        };

        let Some(commit_url) = candidate.commit_url.clone() else {
            return Ok(Err(ResolveError::MissingCommitUrl {
                name: record.name.clone(),
                tag: candidate.tag_or_release_name,
            }));
        };

        let commit = self.source.fetch_commit(&commit_url).await?;
        let published_at = commit.author_date().map(str::to_string);

        Ok(Ok(candidate.with_published_at(published_at)))
    }
}
