//! Error types shared by the orthic crates.

use std::fmt;

/// Which alignment marker an artwork is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Pure green pixel where the previous stroke ends.
    Anchor,
    /// Pure red pixel where the next stroke begins.
    Connector,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anchor => write!(f, "anchor"),
            Self::Connector => write!(f, "connector"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No artwork exists for the requested symbol. Indicates an incomplete
    /// asset set rather than a problem with the text.
    #[error("no artwork found for symbol '{symbol}'")]
    AssetNotFound { symbol: String },

    /// The artwork has no pixel of the given marker colour.
    #[error("artwork for symbol '{symbol}' has no {marker} marker")]
    MissingAlignmentMarker { symbol: String, marker: Marker },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Self::Config(e.to_string())
    }
}
