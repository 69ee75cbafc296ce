//! Direct image-link detection.

use async_trait::async_trait;
use thumbsnap_models::{comparison_key, Thumbnail};

use super::ThumbnailProvider;
use crate::error::ResolveResult;

/// Extensions treated as directly embeddable images.
pub const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

/// Returns the URL unchanged when it already points at an image file.
///
/// First in the cascade: the check is free and unambiguous. Matching is done
/// on the comparison key (query stripped, lower-cased); the original URL is
/// what gets returned.
#[derive(Debug, Default)]
pub struct DirectImageProvider;

#[async_trait]
impl ThumbnailProvider for DirectImageProvider {
    fn name(&self) -> &'static str {
        "direct_image"
    }

    async fn try_resolve(&self, url: &str) -> ResolveResult<Option<Thumbnail>> {
        let key = comparison_key(url);
        if IMAGE_EXTENSIONS.iter().any(|ext| key.ends_with(ext)) {
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
    async fn test_image_extension_match_returns_original_url() {
        let provider = DirectImageProvider;
        let url = "https://cdn.example.com/Photo.JPG?width=800";
        let result = provider.try_resolve(url).await.unwrap();
        assert_eq!(result, Some(Thumbnail::Url(url.to_string())));
    }

    #[tokio::test]
    async fn test_all_recognized_extensions() {
        let provider = DirectImageProvider;
        for ext in IMAGE_EXTENSIONS {
            let url = format!("https://example.com/file{ext}");
            let result = provider.try_resolve(&url).await.unwrap();
            assert!(result.is_some(), "extension {ext} should match");
        }
    }

    #[tokio::test]
    async fn test_non_image_url_falls_through() {
        let provider = DirectImageProvider;
        assert_eq!(
            provider
                .try_resolve("https://example.com/watch?v=abc")
                .await
                .unwrap(),
            None
        );
        // Extension buried in the query does not count
        assert_eq!(
            provider
                .try_resolve("https://example.com/page?img=a.png")
                .await
                .unwrap(),
            None
        );
    }
}
