//! YouTube thumbnail synthesis from URL patterns.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use thumbsnap_models::Thumbnail;

use super::ThumbnailProvider;
use crate::error::ResolveResult;

/// Captures an 11-character video ID from the known YouTube URL shapes:
/// canonical watch URLs, youtu.be short links, embed and `/v/` URLs, Shorts
/// paths, and channel/custom paths with a trailing video segment.
static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|shorts)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("YouTube regex must compile")
});

/// Synthesizes a thumbnail URL from a YouTube video ID, without any network
/// call or verification that the image exists (optimistic construction).
#[derive(Debug, Default)]
pub struct YoutubeProvider;

impl YoutubeProvider {
    /// Extract the 11-character video ID, if the URL matches.
    pub fn video_id(url: &str) -> Option<&str> {
        YOUTUBE_RE
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[async_trait]
impl ThumbnailProvider for YoutubeProvider {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn try_resolve(&self, url: &str) -> ResolveResult<Option<Thumbnail>> {
        Ok(Self::video_id(url).map(|id| {
            Thumbnail::Url(format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
        }))
    }
}
