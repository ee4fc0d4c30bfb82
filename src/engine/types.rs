//! Small value types shared by engines and tracks.

use std::fmt;

use serde::Deserialize;

/// How much of a resource an engine fetches before playback is requested.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreloadPolicy {
    /// Fetch nothing until `play`.
    #[default]
    None,
    /// Fetch enough to learn the duration.
    #[serde(alias = "meta")]
    Metadata,
    /// Fetch and decode eagerly.
    #[serde(alias = "eager", alias = "full")]
    Auto,
}

impl fmt::Display for PreloadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Metadata => "metadata",
            Self::Auto => "auto",
        };
        f.write_str(s)
    }
}

/// Error categories, numbered like the HTML `MediaError` codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum MediaErrorCode {
    Aborted = 1,
    Network = 2,
    Decode = 3,
    SrcNotSupported = 4,
}

impl fmt::Display for MediaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Aborted => "aborted",
            Self::Network => "network error",
            Self::Decode => "decode error",
            Self::SrcNotSupported => "source not supported",
        };
        f.write_str(s)
    }
}

/// An error reported by an engine. Never fatal to the track that sees it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct MediaError {
    pub code: MediaErrorCode,
    pub message: String,
}

impl MediaError {
    pub fn new(code: MediaErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Answer to a codec-support query. Only `No` is definitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CanPlayType {
    No,
    Maybe,
    Probably,
}
