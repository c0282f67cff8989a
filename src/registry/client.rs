//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - GitHub REST API media type and API version headers on every request
//! - A User-Agent (GitHub rejects anonymous requests without one)
//! - Typed JSON decoding with transport, status and decode errors kept apart
//!
//! Requests are issued exactly once. There is no retry and no explicit timeout.

use crate::error::RegistryError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Media type requested from the GitHub REST API
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Header carrying the REST API version
pub const API_VERSION_HEADER: &str = "x-github-api-version";

/// REST API version every request is pinned to
pub const API_VERSION: &str = "2022-11-28";

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("spmup/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for the GitHub REST API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom User-Agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, RegistryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| RegistryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and decode the JSON body into `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RegistryError> {
        tracing::info!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RegistryError::transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", url, status);
            return Err(RegistryError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RegistryError::transport(url, e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| RegistryError::decode(url, e.to_string()))
    }
}
