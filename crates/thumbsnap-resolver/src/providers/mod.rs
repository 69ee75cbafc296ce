//! Thumbnail provider strategies.
//!
//! Each provider implements one resolution strategy. The cascade driver in
//! [`crate::resolver`] tries them in a fixed order; `Ok(None)` means "not my
//! URL, try the next one" and `Err` means a benign fault that the driver
//! absorbs.

pub mod image;
pub mod media;
pub mod oembed;
pub mod passthrough;
pub mod youtube;

use async_trait::async_trait;
use thumbsnap_models::Thumbnail;

use crate::error::ResolveResult;

pub use image::DirectImageProvider;
pub use media::MediaFrameProvider;
pub use oembed::OembedProvider;
pub use passthrough::PassthroughProvider;
pub use youtube::YoutubeProvider;

/// A single thumbnail resolution strategy.
#[async_trait]
pub trait ThumbnailProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Attempt to resolve a thumbnail for the URL.
    ///
    /// Returns `Ok(None)` when the URL is not this provider's to handle or
    /// nothing was found; errors are absorbed by the cascade driver.
    async fn try_resolve(&self, url: &str) -> ResolveResult<Option<Thumbnail>>;
}
