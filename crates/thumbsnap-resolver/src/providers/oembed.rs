//! oEmbed metadata lookup providers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thumbsnap_models::Thumbnail;
use tracing::debug;

use super::ThumbnailProvider;
use crate::error::{ResolveError, ResolveResult};

/// URL substrings identifying Vimeo links.
pub const VIMEO_MARKERS: [&str; 1] = ["vimeo.com/"];
/// URL substrings identifying Loom links.
pub const LOOM_MARKERS: [&str; 2] = ["loom.com/share/", "loom.com/v/"];

/// oEmbed response body; only the thumbnail field matters here.
#[derive(Debug, Deserialize)]
struct OembedResponse {
    thumbnail_url: Option<String>,
}

/// Looks up a thumbnail via a platform's public oEmbed endpoint.
///
/// Best-effort against a third-party service: one request, no retries,
/// bounded by a per-request timeout so a slow endpoint cannot stall the
/// cascade. Any fault surfaces as an error for the driver to absorb.
pub struct OembedProvider {
    name: &'static str,
    markers: &'static [&'static str],
    endpoint: String,
    client: Client,
    timeout: Duration,
}

impl OembedProvider {
    /// Create a provider for one platform.
    pub fn new(
        name: &'static str,
        markers: &'static [&'static str],
        endpoint: String,
        client: Client,
        timeout: Duration,
    ) -> Self {
        Self {
            name,
            markers,
            endpoint,
            client,
            timeout,
        }
    }

    /// Vimeo oEmbed provider.
    pub fn vimeo(endpoint: String, client: Client, timeout: Duration) -> Self {
        Self::new("vimeo", &VIMEO_MARKERS, endpoint, client, timeout)
    }

    /// Loom oEmbed provider.
    pub fn loom(endpoint: String, client: Client, timeout: Duration) -> Self {
        Self::new("loom", &LOOM_MARKERS, endpoint, client, timeout)
    }

    fn matches(&self, url: &str) -> bool {
        self.markers.iter().any(|m| url.contains(m))
    }

    fn request_url(&self, url: &str) -> String {
        format!("{}?url={}", self.endpoint, urlencoding::encode(url))
    }
}

#[async_trait]
impl ThumbnailProvider for OembedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn try_resolve(&self, url: &str) -> ResolveResult<Option<Thumbnail>> {
        if !self.matches(url) {
            return Ok(None);
        }

        let request_url = self.request_url(url);
        debug!(provider = self.name, %request_url, "fetching oEmbed metadata");

        let response = self
            .client
            .get(&request_url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::ProviderStatus(status.as_u16()));
        }

        let body: OembedResponse = response.json().await?;
        Ok(body.thumbnail_url.map(Thumbnail::Url))
    }
}
