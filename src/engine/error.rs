use std::io;
use std::path::PathBuf;

use rodio::decoder::DecoderError;

use super::types::{MediaError, MediaErrorCode};

/// Failures inside the device backend. They reach tracks as `MediaError`s.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unrecognised audio format")]
    UnsupportedFormat,

    #[error("unsupported source: {0}")]
    UnsupportedSource(String),

    #[error("decode failed: {0}")]
    Decode(String),
}

impl From<DecoderError> for EngineError {
    fn from(err: DecoderError) -> Self {
        match err {
            DecoderError::UnrecognizedFormat => Self::UnsupportedFormat,
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<EngineError> for MediaError {
    fn from(err: EngineError) -> Self {
        let code = match &err {
            EngineError::Open { .. } => MediaErrorCode::Network,
            EngineError::UnsupportedFormat | EngineError::UnsupportedSource(_) => {
                MediaErrorCode::SrcNotSupported
            }
            EngineError::Decode(_) => MediaErrorCode::Decode,
        };
        MediaError::new(code, err.to_string())
    }
}
