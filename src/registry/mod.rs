//! Registry adapters for fetching release information
//!
//! This module provides:
//! - HTTP client shared foundation
//! - GitHub REST API adapter (releases, tags, commits)

mod client;
mod github;

pub use client::{HttpClient, API_VERSION, API_VERSION_HEADER, GITHUB_MEDIA_TYPE};
pub use github::{
    CommitEntry, GitCommit, GitHubAdapter, GitSignature, ReleaseEntry, TagCommitRef, TagEntry,
    DEFAULT_API_URL,
};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for hosts that publish releases and tags for a repository slug
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the host name for diagnostics
    fn name(&self) -> &'static str;

    /// Fetch the releases list, newest first
    async fn fetch_releases(&self, slug: &str) -> Result<Vec<ReleaseEntry>, RegistryError>;

    /// Fetch the tags list, newest first
    async fn fetch_tags(&self, slug: &str) -> Result<Vec<TagEntry>, RegistryError>;

    /// Fetch a commit object by its API URL
    async fn fetch_commit(&self, url: &str) -> Result<CommitEntry, RegistryError>;
}
