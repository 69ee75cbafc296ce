//! Resolved thumbnail value.

use serde::{Deserialize, Deserializer, Serialize};

/// A resolved preview thumbnail.
///
/// Both variants hold a string usable directly as an image source; the
/// distinction is whether the bytes live behind a URL or inline in a data
/// URI. Serializes as a bare JSON string either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Thumbnail {
    /// A URL usable directly as an image source
    Url(String),
    /// A base64-encoded raster image as a data URI
    DataUri(String),
}

impl<'de> Deserialize<'de> for Thumbnail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Both variants are bare strings on the wire; the data: scheme is
        // what tells them apart.
        let s = String::deserialize(deserializer)?;
        Ok(if s.starts_with("data:") {
            Thumbnail::DataUri(s)
        } else {
            Thumbnail::Url(s)
        })
    }
}

impl Thumbnail {
    /// The image-source string, regardless of variant.
    pub fn as_str(&self) -> &str {
        match self {
            Thumbnail::Url(s) | Thumbnail::DataUri(s) => s,
        }
    }

    /// Consume into the image-source string.
    pub fn into_string(self) -> String {
        match self {
            Thumbnail::Url(s) | Thumbnail::DataUri(s) => s,
        }
    }

    /// Whether this thumbnail is an inline data URI.
    pub fn is_data_uri(&self) -> bool {
        matches!(self, Thumbnail::DataUri(_))
    }
}

impl std::fmt::Display for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
