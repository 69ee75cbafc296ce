//! Generic media-frame fallback provider.

use std::time::Duration;

use async_trait::async_trait;
use thumbsnap_models::Thumbnail;
use tracing::debug;

use super::ThumbnailProvider;
use crate::error::{ResolveError, ResolveResult};
use crate::frame::{jpeg_data_uri, FrameGrabber};

/// Last-resort provider: treats the URL as a directly playable video and
/// extracts a representative still frame as a JPEG data URI.
///
/// The whole attempt (probe, seek, rasterize) races one hard wall-clock
/// timeout. Awaiting a single future guarantees exactly one outcome no
/// matter which of timeout, success, or decode error settles first; the
/// grabber's child processes are killed when the timed-out future is
/// dropped.
pub struct MediaFrameProvider {
    grabber: FrameGrabber,
    timeout: Duration,
}

impl MediaFrameProvider {
    /// Create a provider with the given seek offset and stage timeout.
    pub fn new(frame_offset_secs: f64, timeout: Duration) -> Self {
        Self {
            grabber: FrameGrabber::new(frame_offset_secs),
            timeout,
        }
    }
}

#[async_trait]
impl ThumbnailProvider for MediaFrameProvider {
    fn name(&self) -> &'static str {
        "media_frame"
    }

    async fn try_resolve(&self, url: &str) -> ResolveResult<Option<Thumbnail>> {
        debug!(%url, timeout_ms = self.timeout.as_millis() as u64, "attempting media frame extraction");

        match tokio::time::timeout(self.timeout, self.grabber.grab(url)).await {
            Ok(Ok(bytes)) => Ok(Some(Thumbnail::DataUri(jpeg_data_uri(&bytes)))),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(ResolveError::Timeout(self.timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Stdio;
    use std::time::Instant;
    use tokio::process::Command;

    fn ffmpeg_available() -> bool {
        which::which("ffprobe").is_ok() && which::which("ffmpeg").is_ok()
    }

    /// Synthesize a two-second test-pattern clip at the given path.
    async fn synthesize_clip(path: &std::path::Path) {
        let status = Command::new("ffmpeg")
            .args([
                "-y",
                "-v",
                "error",
                "-f",
                "lavfi",
                "-i",
                "testsrc=duration=2:size=320x240:rate=10",
                "-c:v",
                "mjpeg",
                "-q:v",
                "5",
            ])
            .arg(path)
            .stdin(Stdio::null())
            .status()
            .await
            .expect("failed to spawn ffmpeg");
        assert!(status.success(), "clip synthesis failed");
    }

    #[tokio::test]
    async fn test_unplayable_url_is_an_absorbed_error() {
        let provider = MediaFrameProvider::new(1.0, Duration::from_secs(3));
        // Unroutable port: ffprobe fails fast, or the binaries are missing
        // entirely. Either way the provider errs instead of panicking.
        let result = provider.try_resolve("http://127.0.0.1:1/clip.mp4").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_playable_source_yields_jpeg_data_uri() {
        if !ffmpeg_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("clip.avi");
        synthesize_clip(&clip).await;

        let provider = MediaFrameProvider::new(1.0, Duration::from_secs(10));
        let result = provider.try_resolve(clip.to_str().unwrap()).await.unwrap();

        match result {
            Some(Thumbnail::DataUri(s)) => {
                assert!(s.starts_with("data:image/jpeg;base64,"));
            }
            other => panic!("expected a data URI, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_bounds_the_stage() {
        if !ffmpeg_available() {
            return;
        }

        // A local socket that accepts connections but never answers keeps
        // ffprobe waiting until the stage timer fires.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hold = tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                if let Ok((socket, _)) = listener.accept().await {
                    held.push(socket);
                }
            }
        });

        let timeout = Duration::from_millis(200);
        let provider = MediaFrameProvider::new(1.0, timeout);
        let start = Instant::now();
        let result = provider
            .try_resolve(&format!("http://{addr}/clip.mp4"))
            .await;
        let elapsed = start.elapsed();

        assert!(matches!(result, Err(ResolveError::Timeout(_))));
        assert!(elapsed >= timeout);
        assert!(elapsed < timeout + Duration::from_millis(500));

        hold.abort();
    }
}
