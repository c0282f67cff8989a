//! Version string normalization and candidate selection

use crate::domain::ReleaseCandidate;
use crate::registry::{ReleaseEntry, TagEntry};

/// Tags containing this marker are packaging artifacts, not releases
pub const PACKAGING_TAG_MARKER: &str = "CocoaPods";

/// Strip exactly one literal leading `v` from a tag name
pub fn normalize_version(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// True if the tag marks a CocoaPods packaging artifact
pub fn is_packaging_tag(tag: &str) -> bool {
    tag.contains(PACKAGING_TAG_MARKER)
}

/// First release, in host order, whose tag is a genuine version tag
pub fn select_release(releases: &[ReleaseEntry]) -> Option<ReleaseCandidate> {
    releases.iter().find_map(|release| {
        let tag = release.tag_name.as_deref()?;
        (!is_packaging_tag(tag))
            .then(|| ReleaseCandidate::from_release(tag, release.published_at.clone()))
    })
}

/// First tag, in host order, that is a genuine version tag
pub fn select_tag(tags: &[TagEntry]) -> Option<ReleaseCandidate> {
    tags.iter().find_map(|tag| {
        let name = tag.name.as_deref()?;
        (!is_packaging_tag(name))
            .then(|| ReleaseCandidate::from_tag(name, tag.commit_url().map(str::to_string)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TagCommitRef;

    fn release(tag: &str) -> ReleaseEntry {
        ReleaseEntry {
            tag_name: Some(tag.to_string()),
            published_at: Some("2024-01-01T00:00:00Z".to_string()),
        }
    }

    fn tag(name: &str) -> TagEntry {
        TagEntry {
            name: Some(name.to_string()),
            commit: Some(TagCommitRef {
                url: Some(format!("https://api.github.com/repos/a/b/commits/{}", name)),
            }),
        }
    }

    #[test]
    fn test_normalize_strips_leading_v() {
        assert_eq!(normalize_version("v1.2.3"), "1.2.3");
    }

    #[test]
    fn test_normalize_without_prefix_is_noop() {
        assert_eq!(normalize_version("1.2.3"), "1.2.3");
    }

    #[test]
    fn test_normalize_is_literal_prefix_strip() {
        assert_eq!(normalize_version("version2"), "ersion2");
        assert_eq!(normalize_version("vv1.0"), "v1.0");
        assert_eq!(normalize_version("V1.0"), "V1.0");
        assert_eq!(normalize_version("1.0-dev"), "1.0-dev");
    }

    #[test]
    fn test_is_packaging_tag() {
        assert!(is_packaging_tag("1.0.0-CocoaPods"));
        assert!(is_packaging_tag("CocoaPods-10.0.0"));
        assert!(!is_packaging_tag("cocoapods-1.0"));
        assert!(!is_packaging_tag("2.0.0"));
    }

    #[test]
    fn test_select_release_skips_packaging_tags() {
        let releases = vec![release("1.0.0-CocoaPods"), release("2.0.0")];
        let candidate = select_release(&releases).unwrap();
        assert_eq!(candidate.tag_or_release_name, "2.0.0");
        assert_eq!(
            candidate.published_at.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_select_release_takes_first_in_host_order() {
        let releases = vec![release("v3.0.0"), release("v3.1.0")];
        assert_eq!(
            select_release(&releases).unwrap().tag_or_release_name,
            "v3.0.0"
        );
    }

    #[test]
    fn test_select_release_ignores_entries_without_tag() {
        let releases = vec![
            ReleaseEntry {
                tag_name: None,
                published_at: None,
            },
            release("v1.0.0"),
        ];
        assert_eq!(
            select_release(&releases).unwrap().tag_or_release_name,
            "v1.0.0"
        );
    }

    #[test]
    fn test_select_release_none_qualifying() {
        assert!(select_release(&[release("5.0.0-CocoaPods")]).is_none());
        assert!(select_release(&[]).is_none());
    }

    #[test]
    fn test_select_tag_skips_packaging_tags() {
        let tags = vec![tag("1.0.0-CocoaPods"), tag("2.0.0")];
        let candidate = select_tag(&tags).unwrap();
        assert_eq!(candidate.tag_or_release_name, "2.0.0");
        assert_eq!(
            candidate.commit_url.as_deref(),
            Some("https://api.github.com/repos/a/b/commits/2.0.0")
        );
        assert!(candidate.published_at.is_none());
    }

    #[test]
    fn test_select_tag_without_commit_url() {
        let tags = vec![TagEntry {
            name: Some("1.0.0".to_string()),
            commit: None,
        }];
        let candidate = select_tag(&tags).unwrap();
        assert!(candidate.commit_url.is_none());
    }

    #[test]
    fn test_select_tag_none_qualifying() {
        assert!(select_tag(&[tag("CocoaPods-1.0")]).is_none());
    }
}
