//! Error types for thumbnail resolution.
//!
//! None of these variants ever reach the caller of the resolver's public
//! surface; the cascade driver logs them and moves to the next provider.

use std::time::Duration;
use thiserror::Error;

/// Result type for provider operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur inside a provider attempt.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("FFmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("metadata endpoint returned status {0}")]
    ProviderStatus(u16),

    #[error("frame extraction failed: {message}")]
    FrameExtraction {
        message: String,
        stderr: Option<String>,
        exit_code: Option<i32>,
    },

    #[error("media decode produced no usable frame")]
    EmptyFrame,

    #[error("provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ResolveError {
    /// Create a frame extraction failure error.
    pub fn frame_extraction(
        message: impl Into<String>,
        stderr: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::FrameExtraction {
            message: message.into(),
            stderr,
            exit_code,
        }
    }
}
