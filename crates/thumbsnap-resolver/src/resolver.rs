//! The provider cascade driver.

use reqwest::Client;
use thumbsnap_models::{Thumbnail, ThumbnailArg};
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::providers::{
    DirectImageProvider, MediaFrameProvider, OembedProvider, PassthroughProvider,
    ThumbnailProvider, YoutubeProvider,
};

/// Best-effort preview-thumbnail resolver.
///
/// Owns an ordered list of providers and tries them strictly in sequence;
/// the first definitive result wins. Provider faults are logged and treated
/// as fall-through, so a total failure is indistinguishable from "no
/// thumbnail exists". Each call allocates nothing shared; the only reused
/// resource is the HTTP client's connection pool.
pub struct Resolver {
    providers: Vec<Box<dyn ThumbnailProvider>>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl Resolver {
    /// Build the cascade from configuration.
    pub fn new(config: ResolverConfig) -> Self {
        let client = Client::new();

        let providers: Vec<Box<dyn ThumbnailProvider>> = vec![
            Box::new(DirectImageProvider),
            Box::new(PassthroughProvider::new(config.passthrough_markers)),
            Box::new(YoutubeProvider),
            Box::new(OembedProvider::vimeo(
                config.vimeo_oembed_endpoint,
                client.clone(),
                config.metadata_timeout,
            )),
            Box::new(OembedProvider::loom(
                config.loom_oembed_endpoint,
                client,
                config.metadata_timeout,
            )),
            Box::new(MediaFrameProvider::new(
                config.frame_offset_secs,
                config.media_timeout,
            )),
        ];

        Self { providers }
    }

    /// Build the resolver from environment variables.
    pub fn from_env() -> Self {
        Self::new(ResolverConfig::from_env())
    }

    /// Resolve a thumbnail for the caller-supplied argument.
    ///
    /// Returns `None` when the argument carries no URL string or every
    /// provider comes up empty. No provider is attempted for guard-rejected
    /// input.
    pub async fn resolve(&self, arg: &ThumbnailArg) -> Option<Thumbnail> {
        let url = arg.url()?;
        self.resolve_url(url).await
    }

    /// Resolve a thumbnail for a URL string, bypassing the argument wrapper.
    pub async fn resolve_url(&self, url: &str) -> Option<Thumbnail> {
        for provider in &self.providers {
            match provider.try_resolve(url).await {
                Ok(Some(thumbnail)) => {
                    debug!(provider = provider.name(), %url, "thumbnail resolved");
                    return Some(thumbnail);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        %url,
                        error = %err,
                        "provider failed, trying next"
                    );
                }
            }
        }

        debug!(%url, "no provider produced a thumbnail");
        None
    }

    /// JSON-in / JSON-out convenience for host platforms.
    ///
    /// Parse failures and guard rejections yield `"null"`, the same sentinel
    /// as an exhausted cascade.
    pub async fn resolve_json(&self, input_json: &str) -> String {
        let result = match ThumbnailArg::from_json(input_json) {
            Ok(arg) => self.resolve(&arg).await,
            Err(_) => None,
        };
        serde_json::to_string(&result).unwrap_or_else(|_| "null".to_string())
    }
}
