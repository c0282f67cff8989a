//! Package list parser
//!
//! Accepts the array produced by swift-package-list as well as arrays of
//! Package.resolved pins. Each field is looked up under a primary key first
//! and then under its fallback keys.

use crate::domain::DependencyRecord;
use crate::error::ManifestError;
use serde_json::Value;

/// Key paths tried, in order, for the package name
const NAME_KEYS: &[&[&str]] = &[&["name"], &["identity"]];

/// Key paths tried, in order, for the pinned version
const VERSION_KEYS: &[&[&str]] = &[&["version"], &["state", "version"]];

/// Key paths tried, in order, for the repository URL
const REPOSITORY_URL_KEYS: &[&[&str]] = &[&["repositoryURL"], &["location"]];

/// Records and per-entry diagnostics extracted from a package list
#[derive(Debug, Default)]
pub struct ParsedManifest {
    /// Valid records in input order
    pub records: Vec<DependencyRecord>,
    /// Entries that were skipped, in input order
    pub skipped: Vec<ManifestError>,
}

impl ParsedManifest {
    /// Total number of entries seen in the input
    pub fn entry_count(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Parser for swift-package-list JSON documents
pub struct PackageListParser;

impl PackageListParser {
    /// Parse a decoded JSON document. Anything other than an array is treated as empty.
    pub fn parse(&self, document: &Value) -> ParsedManifest {
        let mut parsed = ParsedManifest::default();

        let Some(entries) = document.as_array() else {
            tracing::warn!("package list is not a JSON array, nothing to check");
            return parsed;
        };

        for (index, entry) in entries.iter().enumerate() {
            match parse_entry(index, entry) {
                Ok(record) => parsed.records.push(record),
                Err(e) => {
                    tracing::warn!(entry = %entry, "skipping {}", e);
                    parsed.skipped.push(e);
                }
            }
        }

        parsed
    }

    /// Parse raw JSON text
    pub fn parse_str(&self, content: &str) -> Result<ParsedManifest, serde_json::Error> {
        let document: Value = serde_json::from_str(content)?;
        Ok(self.parse(&document))
    }
}

/// Extract a single record, reporting the first field that is missing
fn parse_entry(index: usize, entry: &Value) -> Result<DependencyRecord, ManifestError> {
    let pinned_version = lookup(entry, VERSION_KEYS)
        .ok_or_else(|| ManifestError::field_missing(index, "version"))?;
    let name =
        lookup(entry, NAME_KEYS).ok_or_else(|| ManifestError::field_missing(index, "name"))?;
    let repository_url = lookup(entry, REPOSITORY_URL_KEYS)
        .ok_or_else(|| ManifestError::field_missing(index, "repositoryURL"))?;

    Ok(DependencyRecord::new(name, pinned_version, repository_url))
}

/// First non-empty string found under any of the key paths
fn lookup<'a>(entry: &'a Value, candidates: &[&[&str]]) -> Option<&'a str> {
    candidates.iter().find_map(|path| {
        path.iter()
            .try_fold(entry, |value, key| value.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}
