//! Shared data models for the thumbnail resolver.
//!
//! This crate provides Serde-serializable types for:
//! - The caller-supplied argument wrapper
//! - The resolved thumbnail value
//! - URL comparison-key derivation

pub mod input;
pub mod thumbnail;

// Re-export common types
pub use input::{comparison_key, ThumbnailArg};
pub use thumbnail::Thumbnail;
