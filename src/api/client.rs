// PixivCore - pixiv artwork asset retrieval
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Blocking HTTP client for pixiv
//!
//! This module provides the transport seam used by the download orchestrator:
//! - [`HttpTransport`] - `execute(method, url, headers) -> (status, body)`
//! - [`PixivClient`] - the `reqwest::blocking` implementation
//! - [`ClientConfig`] / [`ClientConfigBuilder`] - timeout and user agent settings
//!
//! # Architecture
//!
//! The image CDN (`i.pximg.net`) rejects requests that do not carry a
//! `Referer` from the pixiv site, so every asset request goes out with
//! [`PIXIV_REFERER`]. Nothing here retries: a failed request is reported once and
//! the caller decides what to do with it. Timeouts are the only guard against a
//! hung connection and come from [`ClientConfig::timeout`].
//!
//! # Metadata endpoint
//! **GET** `https://www.pixiv.net/ajax/illust/{id}`
//!
//! Returns an envelope `{"error": bool, "message": str, "body": {...}}`. The body is
//! re-keyed into the preload-data shape `{"illust": {"<id>": body}}` so that it can
//! be handed straight to [`ArtworkInfo`](crate::api::metadata::ArtworkInfo).

use crate::api::metadata::MetadataDocument;
use crate::error::{PixivError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Referer required by the image CDN
pub const PIXIV_REFERER: &str = "https://www.pixiv.net/artworks";

/// Base URL of the web AJAX API
pub const AJAX_BASE_URL: &str = "https://www.pixiv.net/ajax";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the header set every asset request must carry
pub fn required_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(REFERER, HeaderValue::from_static(PIXIV_REFERER));
    headers
}

/// Status code and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// `None` when the server sent no body at all
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Option<Vec<u8>>) -> Self {
        Self { status, body }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP transport
///
/// Implementations perform exactly one request per call and return the raw
/// status and body. Transport-level failures (DNS, connect, TLS, timeout) are
/// reported as [`PixivError::NetworkError`]; status interpretation is left to the
/// caller.
pub trait HttpTransport {
    fn execute(&self, method: Method, url: &str, headers: &HeaderMap) -> Result<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn execute(&self, method: Method, url: &str, headers: &HeaderMap) -> Result<HttpResponse> {
        (**self).execute(method, url, headers)
    }
}

/// Configuration for PixivClient
/// Provides a builder pattern for client customization
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("pixiv-core/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Envelope returned by every AJAX endpoint
#[derive(Debug, Deserialize)]
struct AjaxEnvelope {
    error: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    body: Value,
}

/// Blocking HTTP client for pixiv
///
/// # Example
/// ```rust,no_run
/// use pixiv_core::api::client::PixivClient;
/// use pixiv_core::api::metadata::ArtworkInfo;
///
/// # fn example() -> pixiv_core::error::Result<()> {
/// let client = PixivClient::new()?;
/// let document = client.fetch_metadata_document(12345678)?;
/// let artwork = ArtworkInfo::new(12345678, &document);
/// println!("{} pages", artwork.page_count()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PixivClient {
    client: Client,
    config: ClientConfig,
}

impl PixivClient {
    /// Create a new PixivClient with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new PixivClient with custom configuration
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the user agent is not a valid header
    /// value or the TLS backend cannot be initialised.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                PixivError::InvalidConfiguration(format!("Invalid user agent: {}", e))
            })?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| PixivError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the metadata document for one artwork
    ///
    /// # Errors
    /// - `NetworkError` - transport failure or non-success status
    /// - `InvalidApiResponse` - the envelope reports an error or has no body
    /// - `SerdeJsonError` - the response is not JSON
    pub fn fetch_metadata_document(&self, artwork_id: u64) -> Result<MetadataDocument> {
        let url = format!("{}/illust/{}", AJAX_BASE_URL, artwork_id);

        let mut headers = required_headers();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let response = self.execute(Method::GET, &url, &headers)?;
        let status = response.status;
        let success = response.is_success();
        let body = response.body.unwrap_or_default();

        // The AJAX API reports most failures (deleted, restricted) as a JSON
        // envelope with a 4xx status, so parse before looking at the status.
        let envelope: AjaxEnvelope = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(_) if !success => {
                return Err(status_error(status, &url));
            }
            Err(e) => return Err(e.into()),
        };

        if envelope.error || envelope.body.is_null() {
            return Err(PixivError::InvalidApiResponse {
                message: format!("Artwork {} request failed: {}", artwork_id, envelope.message),
                response_body: Some(String::from_utf8_lossy(&body).into_owned()),
            });
        }

        debug!(artwork_id, "fetched metadata document");
        Ok(MetadataDocument::from_ajax_body(artwork_id, envelope.body))
    }
}

impl HttpTransport for PixivClient {
    fn execute(&self, method: Method, url: &str, headers: &HeaderMap) -> Result<HttpResponse> {
        let response = self
            .client
            .request(method, url)
            .headers(headers.clone())
            .send()
            .map_err(|e| {
                PixivError::network_error(
                    format!("Request to {} failed: {}", url, e),
                    None,
                    e.is_timeout() || e.is_connect(),
                )
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| {
            PixivError::network_error(
                format!("Failed to read response body from {}: {}", url, e),
                Some(status),
                true,
            )
        })?;

        Ok(HttpResponse::new(status, Some(body.to_vec())))
    }
}

/// Convert a non-success status into a NetworkError
///
/// 408, 429 and 5xx are marked transient.
pub(crate) fn status_error(status: u16, url: &str) -> PixivError {
    let is_transient = status == 408 || status == 429 || (500..600).contains(&status);
    PixivError::network_error(
        format!("Server responded with status {} for {}", status, url),
        Some(status),
        is_transient,
    )
}

// ===== TESTS =====
