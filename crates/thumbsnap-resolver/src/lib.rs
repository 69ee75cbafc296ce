//! Best-effort preview-thumbnail resolution for arbitrary URLs.
//!
//! This crate provides:
//! - An ordered cascade of thumbnail providers (direct image, hosting
//!   pass-through, YouTube pattern match, Vimeo/Loom oEmbed lookup)
//! - An FFmpeg-backed fallback that extracts a representative frame from
//!   directly playable video URLs
//! - Per-stage timeout discipline so no provider can stall the resolution
//!
//! Every failure path converges to "try the next provider" or a final empty
//! result; the caller never sees an error.

pub mod config;
pub mod error;
pub mod frame;
pub mod providers;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::{ResolveError, ResolveResult};
pub use frame::FrameGrabber;
pub use providers::ThumbnailProvider;
pub use resolver::Resolver;

pub use thumbsnap_models::{comparison_key, Thumbnail, ThumbnailArg};
