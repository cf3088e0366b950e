//! Figweave API Client
//!
//! Minimal blocking client for the two Figma REST endpoints the generator
//! uses: the document tree (`/v1/files/:key`) and rendered bitmap URLs
//! (`/v1/images/:key`). Authentication is the `X-Figma-Token` header.
//!
//! The client does no validation of the returned tree; the schema layer
//! absorbs absent or unrecognized attributes defensively.

use std::collections::HashMap;

use figweave_schema::File;
use serde::Deserialize;

const BASE: &str = "https://api.figma.com/v1";

/// Failure talking to the Figma API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Figma {endpoint} failed {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A token-bearing client for one Figma account.
pub struct Client {
    http: reqwest::blocking::Client,
    token: String,
    base: String,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            token: token.into(),
            base: BASE.to_string(),
        }
    }

    /// Point the client at a different API root (for tests and proxies).
    pub fn with_base(token: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            token: token.into(),
            base: base.into(),
        }
    }

    /// Fetch the complete document tree for a file.
    pub fn file(&self, file_key: &str) -> Result<File, ApiError> {
        let url = format!("{}/files/{file_key}", self.base);
        let resp = self
            .http
            .get(&url)
            .header("X-Figma-Token", &self.token)
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: "/files",
                status,
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp.json()?)
    }

    /// Fetch temporary bitmap URLs for a set of node ids.
    pub fn images(
        &self,
        file_key: &str,
        ids: &[&str],
        format: &str,
        scale: u8,
    ) -> Result<ImageResponse, ApiError> {
        let url = format!("{}/images/{file_key}", self.base);
        let ids_param = ids.join(",");
        let scale_param = scale.to_string();
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("ids", ids_param.as_str()),
                ("format", format),
                ("scale", scale_param.as_str()),
            ])
            .header("X-Figma-Token", &self.token)
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: "/images",
                status,
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp.json()?)
    }
}

/// Response of `/v1/images/:key`: node id → temporary URL, `null` when
/// rendering failed for that node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
    #[serde(default)]
    pub err: Option<String>,
}
