//! Resolver configuration.

use std::time::Duration;

/// Default timeout for a single oEmbed metadata request.
pub const DEFAULT_METADATA_TIMEOUT_MS: u64 = 3000;
/// Default hard timeout for the whole media-frame fallback stage.
pub const DEFAULT_MEDIA_TIMEOUT_MS: u64 = 3000;
/// Default playback offset for frame extraction, past any leading black frame.
pub const DEFAULT_FRAME_OFFSET_SECS: f64 = 1.0;

/// Default Vimeo oEmbed endpoint.
pub const DEFAULT_VIMEO_OEMBED_ENDPOINT: &str = "https://vimeo.com/api/oembed.json";
/// Default Loom oEmbed endpoint.
pub const DEFAULT_LOOM_OEMBED_ENDPOINT: &str = "https://www.loom.com/v1/oembed";

/// Thumbnail resolver configuration.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Timeout per oEmbed metadata request
    pub metadata_timeout: Duration,
    /// Hard wall-clock timeout for the media-frame fallback
    pub media_timeout: Duration,
    /// Seek offset for frame extraction, in seconds
    pub frame_offset_secs: f64,
    /// URL substrings whose host platform renders its own thumbnail; matching
    /// URLs are returned unchanged (deployment specific, usually empty)
    pub passthrough_markers: Vec<String>,
    /// Vimeo oEmbed endpoint
    pub vimeo_oembed_endpoint: String,
    /// Loom oEmbed endpoint
    pub loom_oembed_endpoint: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            metadata_timeout: Duration::from_millis(DEFAULT_METADATA_TIMEOUT_MS),
            media_timeout: Duration::from_millis(DEFAULT_MEDIA_TIMEOUT_MS),
            frame_offset_secs: DEFAULT_FRAME_OFFSET_SECS,
            passthrough_markers: Vec::new(),
            vimeo_oembed_endpoint: DEFAULT_VIMEO_OEMBED_ENDPOINT.to_string(),
            loom_oembed_endpoint: DEFAULT_LOOM_OEMBED_ENDPOINT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            metadata_timeout: Duration::from_millis(
                std::env::var("THUMBSNAP_METADATA_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_METADATA_TIMEOUT_MS),
            ),
            media_timeout: Duration::from_millis(
                std::env::var("THUMBSNAP_MEDIA_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_MEDIA_TIMEOUT_MS),
            ),
            frame_offset_secs: std::env::var("THUMBSNAP_FRAME_OFFSET_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_FRAME_OFFSET_SECS),
            passthrough_markers: std::env::var("THUMBSNAP_PASSTHROUGH_MARKERS")
                .map(|s| {
                    s.split(',')
                        .map(|m| m.trim().to_string())
                        .filter(|m| !m.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            vimeo_oembed_endpoint: std::env::var("THUMBSNAP_VIMEO_OEMBED_ENDPOINT")
                .unwrap_or(defaults.vimeo_oembed_endpoint),
            loom_oembed_endpoint: std::env::var("THUMBSNAP_LOOM_OEMBED_ENDPOINT")
                .unwrap_or(defaults.loom_oembed_endpoint),
        }
    }
}
