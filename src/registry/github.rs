//! GitHub REST API adapter
//!
//! API endpoints:
//! - Releases: {api}/repos/{owner}/{repo}/releases
//! - Tags: {api}/repos/{owner}/{repo}/tags
//! - Commit: dereferenced from the `commit.url` of a tag entry

use crate::error::RegistryError;
use crate::registry::{HttpClient, ReleaseSource};
use async_trait::async_trait;
use serde::Deserialize;

/// Default base URL for the GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Entry of the releases list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseEntry {
    /// Tag the release was cut from
    pub tag_name: Option<String>,
    /// Publication timestamp (null for drafts)
    pub published_at: Option<String>,
}

/// Entry of the tags list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagEntry {
    /// Tag name
    pub name: Option<String>,
    /// Reference to the tagged commit
    pub commit: Option<TagCommitRef>,
}

/// Commit reference embedded in a tag entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagCommitRef {
    /// API URL of the commit object
    pub url: Option<String>,
}

/// Commit object returned by the commit endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitEntry {
    /// Git-level commit data
    pub commit: Option<GitCommit>,
}

/// Git-level commit data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitCommit {
    /// Commit author signature
    pub author: Option<GitSignature>,
}

/// Author signature of a commit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitSignature {
    /// Author date
    pub date: Option<String>,
}

impl TagEntry {
    /// URL of the tagged commit, if present
    pub fn commit_url(&self) -> Option<&str> {
        self.commit.as_ref().and_then(|c| c.url.as_deref())
    }
}

impl CommitEntry {
    /// Author date of the commit, if present
    pub fn author_date(&self) -> Option<&str> {
        self.commit
            .as_ref()
            .and_then(|c| c.author.as_ref())
            .and_then(|a| a.date.as_deref())
    }
}

/// GitHub adapter
pub struct GitHubAdapter {
    client: HttpClient,
    base_url: String,
}

impl GitHubAdapter {
    /// Create a new adapter against the public GitHub API
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_API_URL)
    }

    /// Create a new adapter against a custom API host
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the releases URL for a repository slug
    fn releases_url(&self, slug: &str) -> String {
        format!("{}/repos/{}/releases", self.base_url, slug)
    }

    /// Build the tags URL for a repository slug
    fn tags_url(&self, slug: &str) -> String {
        format!("{}/repos/{}/tags", self.base_url, slug)
    }
}

#[async_trait]
impl ReleaseSource for GitHubAdapter {
    fn name(&self) -> &'static str {
        "GitHub"
    }

    async fn fetch_releases(&self, slug: &str) -> Result<Vec<ReleaseEntry>, RegistryError> {
        self.client.get_json(&self.releases_url(slug)).await
    }

    async fn fetch_tags(&self, slug: &str) -> Result<Vec<TagEntry>, RegistryError> {
        self.client.get_json(&self.tags_url(slug)).await
    }

    async fn fetch_commit(&self, url: &str) -> Result<CommitEntry, RegistryError> {
        self.client.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn adapter(base_url: &str) -> GitHubAdapter {
        GitHubAdapter::with_base_url(HttpClient::new().unwrap(), base_url)
    }

    #[test]
    fn test_build_urls() {
        let adapter = GitHubAdapter::new(HttpClient::new().unwrap());
        assert_eq!(
            adapter.releases_url("Alamofire/Alamofire"),
            "https://api.github.com/repos/Alamofire/Alamofire/releases"
        );
        assert_eq!(
            adapter.tags_url("apple/swift-log"),
            "https://api.github.com/repos/apple/swift-log/tags"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let adapter = adapter("http://localhost:1234/");
        assert_eq!(
            adapter.releases_url("a/b"),
            "http://localhost:1234/repos/a/b/releases"
        );
    }

    #[test]
    fn test_commit_entry_author_date() {
        let entry: CommitEntry = serde_json::from_str(
            r#"{"sha": "abc", "commit": {"author": {"name": "x", "date": "2023-05-05T00:00:00Z"}}}"#,
        )
        .unwrap();
        assert_eq!(entry.author_date(), Some("2023-05-05T00:00:00Z"));

        let entry: CommitEntry = serde_json::from_str(r#"{"sha": "abc"}"#).unwrap();
        assert_eq!(entry.author_date(), None);
    }

    #[test]
    fn test_release_entry_null_published_at() {
        let entries: Vec<ReleaseEntry> = serde_json::from_str(
            r#"[{"tag_name": "v2.0.0-rc1", "published_at": null, "draft": true}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].tag_name.as_deref(), Some("v2.0.0-rc1"));
        assert!(entries[0].published_at.is_none());
    }

    #[tokio::test]
    async fn fetch_releases_returns_entries_in_host_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/a/b/releases")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"tag_name": "v4.1.0", "published_at": "2024-01-15T00:00:00Z"},
                    {"tag_name": "v4.0.0", "published_at": "2024-01-01T00:00:00Z"}
                ]"#,
            )
            .create_async()
            .await;

        let releases = adapter(&server.url()).fetch_releases("a/b").await.unwrap();

        mock.assert_async().await;
        let tags: Vec<_> = releases
            .iter()
            .filter_map(|r| r.tag_name.as_deref())
            .collect();
        assert_eq!(tags, vec!["v4.1.0", "v4.0.0"]);
    }

    #[tokio::test]
    async fn fetch_tags_reads_commit_urls() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/a/b/tags")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"name": "1.0.0", "commit": {"sha": "abc", "url": "https://api.github.com/repos/a/b/commits/abc"}}]"#,
            )
            .create_async()
            .await;

        let tags = adapter(&server.url()).fetch_tags("a/b").await.unwrap();

        mock.assert_async().await;
        assert_eq!(tags[0].name.as_deref(), Some("1.0.0"));
        assert_eq!(
            tags[0].commit_url(),
            Some("https://api.github.com/repos/a/b/commits/abc")
        );
    }

    #[tokio::test]
    async fn fetch_releases_fails_for_missing_repo() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/nonexistent/repo/releases")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let result = adapter(&server.url())
            .fetch_releases("nonexistent/repo")
            .await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(RegistryError::HttpStatus { status: 404, .. })
        ));
    }
}
