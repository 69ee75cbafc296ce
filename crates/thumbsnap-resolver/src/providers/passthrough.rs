//! Hosting pass-through.

use async_trait::async_trait;
use thumbsnap_models::Thumbnail;

use super::ThumbnailProvider;
use crate::error::ResolveResult;

/// Returns the URL unchanged for platforms that render their own thumbnail.
///
/// An explicit opt-out of the cascade, keyed on configured URL substrings.
/// The marker list is deployment specific and usually empty.
#[derive(Debug, Default)]
pub struct PassthroughProvider {
    markers: Vec<String>,
}

impl PassthroughProvider {
    /// Create a provider matching the given URL substrings.
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }
}

#[async_trait]
impl ThumbnailProvider for PassthroughProvider {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    async fn try_resolve(&self, url: &str) -> ResolveResult<Option<Thumbnail>> {
        if self.markers.iter().any(|m| url.contains(m.as_str())) {
            Ok(Some(Thumbnail::Url(url.to_string())))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_marker_match_returns_original_url() {
        let provider = PassthroughProvider::new(vec!["docs.example.com/".to_string()]);
        let url = "https://docs.example.com/d/abc123/view";
        assert_eq!(
            provider.try_resolve(url).await.unwrap(),
            Some(Thumbnail::Url(url.to_string()))
        );
    }

    #[tokio::test]
    async fn test_empty_marker_list_never_matches() {
        let provider = PassthroughProvider::default();
        assert_eq!(
            provider
                .try_resolve("https://docs.example.com/d/abc123")
                .await
                .unwrap(),
            None
        );
    }
}
