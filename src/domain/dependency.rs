//! Dependency records read from the package list

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pinned Swift package dependency as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    /// Package name
    pub name: String,
    /// Version currently pinned in the manifest
    pub pinned_version: String,
    /// Repository URL the package is fetched from
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
}

impl DependencyRecord {
    /// Creates a new dependency record
    pub fn new(
        name: impl Into<String>,
        pinned_version: impl Into<String>,
        repository_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pinned_version: pinned_version.into(),
            repository_url: repository_url.into(),
        }
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({})",
            self.name, self.pinned_version, self.repository_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_record_new() {
        let record = DependencyRecord::new(
            "Alamofire",
            "5.8.0",
            "https://github.com/Alamofire/Alamofire.git",
        );
        assert_eq!(record.name, "Alamofire");
        assert_eq!(record.pinned_version, "5.8.0");
        assert_eq!(
            record.repository_url,
            "https://github.com/Alamofire/Alamofire.git"
        );
    }

    #[test]
    fn test_dependency_record_display() {
        let record = DependencyRecord::new("Foo", "1.0.0", "https://github.com/a/b");
        assert_eq!(record.to_string(), "Foo@1.0.0 (https://github.com/a/b)");
    }
}
