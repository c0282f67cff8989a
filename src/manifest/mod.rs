//! Package list loading and parsing
//!
//! This module provides functionality to:
//! - Read the package list file produced by swift-package-list
//! - Turn loosely shaped JSON entries into dependency records

mod package_list;

pub use package_list::{PackageListParser, ParsedManifest};

use crate::error::ManifestError;
use std::path::Path;

/// Default package list file name
pub const DEFAULT_PACKAGE_LIST: &str = "package-list.json";

/// Read and parse a package list file
pub fn read_manifest(path: &Path) -> Result<ParsedManifest, ManifestError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

    PackageListParser
        .parse_str(&content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))
}
