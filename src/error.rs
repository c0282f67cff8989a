//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with the package list file
//! - RegistryError: Issues with GitHub API communication (fatal for a run)
//! - ResolveError: No usable version for a single dependency (recoverable)
//! - OutputError: Issues writing the report

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// GitHub API related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Report output related errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors related to the package list file
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read package list {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// A single entry lacks a required field after trying every fallback key
    #[error("entry #{index} is missing required field '{field}'")]
    FieldMissing { index: usize, field: &'static str },
}

/// Errors related to GitHub API communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The request could not be sent or the connection failed
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status
    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The response body did not match the expected shape
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Reasons a single dependency could not be resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Every release or tag was filtered out (or there were none)
    #[error("no qualifying release or tag for '{name}' ({slug})")]
    NoQualifyingRelease { name: String, slug: String },

    /// The selected tag carries no commit reference to date it with
    #[error("tag '{tag}' of '{name}' has no commit URL")]
    MissingCommitUrl { name: String, tag: String },

    /// A remote lookup failed and the run was told to keep going
    #[error("lookup for '{name}' failed: {message}")]
    LookupFailed { name: String, message: String },
}

/// Errors related to writing the report
#[derive(Error, Debug)]
pub enum OutputError {
    /// Report could not be serialized
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Report file could not be written
    #[error("failed to write report {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new FieldMissing error
    pub fn field_missing(index: usize, field: &'static str) -> Self {
        ManifestError::FieldMissing { index, field }
    }
}

impl RegistryError {
    /// Creates a new Transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Decode error
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Decode {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new NoQualifyingRelease error
    pub fn no_qualifying_release(name: impl Into<String>, slug: impl Into<String>) -> Self {
        ResolveError::NoQualifyingRelease {
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Creates a LookupFailed error from a fatal registry error
    pub fn lookup_failed(name: impl Into<String>, error: &RegistryError) -> Self {
        ResolveError::LookupFailed {
            name: name.into(),
            message: error.to_string(),
        }
    }
}
