//! Dependencies paired with the latest version found on the host

use super::DependencyRecord;
use serde::{Serialize, Serializer};

/// A dependency together with the outcome of its version lookup.
///
/// Built once per run and never mutated; `updated` derives a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    /// The manifest entry this result was derived from
    pub record: DependencyRecord,
    /// Normalized latest version, absent when resolution failed
    pub latest_version: Option<String>,
    /// Publication timestamp of the latest version
    pub published_at: Option<String>,
}

impl ResolvedDependency {
    /// A dependency whose latest version could not be determined
    pub fn unresolved(record: DependencyRecord) -> Self {
        Self {
            record,
            latest_version: None,
            published_at: None,
        }
    }

    /// Derives a resolved value from the original record and resolver output
    pub fn updated(
        record: &DependencyRecord,
        latest_version: Option<String>,
        published_at: Option<String>,
    ) -> Self {
        Self {
            record: record.clone(),
            latest_version,
            published_at,
        }
    }

    /// True iff the pinned version string-equals the latest version
    pub fn is_up_to_date(&self) -> bool {
        self.latest_version.as_deref() == Some(self.record.pinned_version.as_str())
    }

    /// True if a lookup produced a latest version
    pub fn is_resolved(&self) -> bool {
        self.latest_version.is_some()
    }
}

/// Wire shape of a report entry; field order gives sorted keys
#[derive(Serialize)]
struct RepoEntry<'a> {
    #[serde(rename = "currentVersion")]
    current_version: &'a str,
    #[serde(rename = "isUpToDate")]
    is_up_to_date: bool,
    #[serde(rename = "lastUpdate")]
    last_update: &'a str,
    #[serde(rename = "latestVersion")]
    latest_version: &'a str,
    name: &'a str,
    #[serde(rename = "repositoryURL")]
    repository_url: &'a str,
}

impl Serialize for ResolvedDependency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RepoEntry {
            current_version: &self.record.pinned_version,
            is_up_to_date: self.is_up_to_date(),
            last_update: self.published_at.as_deref().unwrap_or(""),
            latest_version: self.latest_version.as_deref().unwrap_or(""),
            name: &self.record.name,
            repository_url: &self.record.repository_url,
        }
        .serialize(serializer)
    }
}
