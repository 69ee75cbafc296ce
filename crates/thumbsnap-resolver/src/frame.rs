//! Frame extraction from playable media URLs.
//!
//! The rendering surface for the generic fallback is the FFmpeg CLI suite:
//! `ffprobe` confirms the URL decodes to a real video stream (the analogue of
//! waiting for media metadata), then `ffmpeg` seeks to the configured offset
//! and rasterizes a single frame to JPEG bytes on stdout.

use std::process::Stdio;

use base64::Engine;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::config::DEFAULT_FRAME_OFFSET_SECS;
use crate::error::{ResolveError, ResolveResult};

/// JPEG start-of-image marker.
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Extracts a single still frame from a media URL.
#[derive(Debug, Clone)]
pub struct FrameGrabber {
    /// Seek offset in seconds
    frame_offset_secs: f64,
}

impl Default for FrameGrabber {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_OFFSET_SECS)
    }
}

/// FFprobe JSON output format (streams only).
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: String,
    width: Option<u32>,
    height: Option<u32>,
}

impl FrameGrabber {
    /// Create a grabber seeking to the given offset.
    pub fn new(frame_offset_secs: f64) -> Self {
        Self { frame_offset_secs }
    }

    /// Extract one JPEG-encoded frame from the URL.
    ///
    /// The returned bytes are a complete JPEG image. Callers are expected to
    /// bound this with their own wall-clock timeout; spawned processes are
    /// killed when the future is dropped.
    pub async fn grab(&self, url: &str) -> ResolveResult<Vec<u8>> {
        which::which("ffprobe").map_err(|_| ResolveError::FfprobeNotFound)?;
        which::which("ffmpeg").map_err(|_| ResolveError::FfmpegNotFound)?;

        self.probe_stream(url).await?;
        self.capture_frame(url).await
    }

    /// Confirm the URL decodes to a video stream with non-zero dimensions.
    async fn probe_stream(&self, url: &str) -> ResolveResult<()> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_streams",
            ])
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ResolveError::frame_extraction(
                "FFprobe could not read media",
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
                output.status.code(),
            ));
        }

        let probe: FfprobeOutput = serde_json::from_slice(&output.stdout)?;
        let video_stream = probe
            .streams
            .iter()
            .find(|s| s.codec_type == "video")
            .ok_or(ResolveError::EmptyFrame)?;

        // Mirrors the zero-dimension raster guard: nothing drawable here.
        if video_stream.width.unwrap_or(0) == 0 || video_stream.height.unwrap_or(0) == 0 {
            return Err(ResolveError::EmptyFrame);
        }

        Ok(())
    }

    /// Seek and rasterize one frame to JPEG bytes.
    async fn capture_frame(&self, url: &str) -> ResolveResult<Vec<u8>> {
        let args = self.build_capture_args(url);
        debug!("Running FFmpeg: ffmpeg {}", args.join(" "));

        let output = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ResolveError::frame_extraction(
                "FFmpeg exited with non-zero status",
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
                output.status.code(),
            ));
        }

        if !output.stdout.starts_with(&JPEG_SOI) {
            return Err(ResolveError::EmptyFrame);
        }

        Ok(output.stdout)
    }

    /// Build the FFmpeg argument list for a single-frame capture to stdout.
    pub fn build_capture_args(&self, url: &str) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-ss".to_string(),
            format!("{:.3}", self.frame_offset_secs),
            "-i".to_string(),
            url.to_string(),
            "-frames:v".to_string(),
            "1".to_string(),
            "-c:v".to_string(),
            "mjpeg".to_string(),
            "-f".to_string(),
            "image2".to_string(),
            "pipe:1".to_string(),
        ]
    }
}

/// Encode JPEG bytes as an image data URI.
pub fn jpeg_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:image/jpeg;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
