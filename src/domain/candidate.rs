//! Release candidates found while querying the hosting service

/// A release or tag selected as the newest published version of a repository.
///
/// Only lives for the duration of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCandidate {
    /// Raw tag or release name, before normalization
    pub tag_or_release_name: String,
    /// Commit object URL (tags only; releases carry their own date)
    pub commit_url: Option<String>,
    /// Publication timestamp as reported by the host
    pub published_at: Option<String>,
}

impl ReleaseCandidate {
    /// Candidate taken from a release entry
    pub fn from_release(tag_name: impl Into<String>, published_at: Option<String>) -> Self {
        Self {
            tag_or_release_name: tag_name.into(),
            commit_url: None,
            published_at,
        }
    }

    /// Candidate taken from a tag entry, which still needs a commit lookup for its date
    pub fn from_tag(name: impl Into<String>, commit_url: Option<String>) -> Self {
        Self {
            tag_or_release_name: name.into(),
            commit_url,
            published_at: None,
        }
    }

    /// Sets the publication timestamp (builder pattern)
    pub fn with_published_at(mut self, published_at: Option<String>) -> Self {
        self.published_at = published_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_release() {
        let candidate =
            ReleaseCandidate::from_release("v1.1.0", Some("2024-01-01T00:00:00Z".to_string()));
        assert_eq!(candidate.tag_or_release_name, "v1.1.0");
        assert!(candidate.commit_url.is_none());
        assert_eq!(
            candidate.published_at.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_from_tag_then_dated() {
        let candidate = ReleaseCandidate::from_tag("v1.0.0", Some("https://x/commits/abc".into()))
            .with_published_at(Some("2023-05-05T00:00:00Z".into()));
        assert_eq!(candidate.commit_url.as_deref(), Some("https://x/commits/abc"));
        assert_eq!(
            candidate.published_at.as_deref(),
            Some("2023-05-05T00:00:00Z")
        );
    }
}
