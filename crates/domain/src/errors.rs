use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Unsupported link type: {0}")]
    UnsupportedLinkType(String),

    #[error("Capture error: {0}")]
    CaptureError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The only failure the normalisation core can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),
}
