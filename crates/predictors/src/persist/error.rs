//! Error types for predictor persistence.

use thiserror::Error;

use super::schema::PredictorKind;

/// Errors that can occur while writing a predictor.
#[derive(Debug, Error)]
pub enum WriteError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Postcard encoding error.
    #[error("encoding error: {0}")]
    Encoding(#[from] postcard::Error),

    /// JSON has no representation for NaN or infinities.
    #[error("cannot write non-finite value {value} at `{field}` as JSON")]
    NonFinite { field: String, value: f64 },

    /// Encoded payload does not fit the 32-bit size field.
    #[error("payload of {0} bytes exceeds the format limit")]
    PayloadTooLarge(usize),

    /// Compression was requested without the `compression` feature.
    #[error("compression requested but the `compression` feature is not enabled")]
    CompressionUnavailable,

    /// Compression error.
    #[cfg(feature = "compression")]
    #[error("compression error: {0}")]
    Compression(std::io::Error),
}

/// Errors that can occur while reading a predictor.
#[derive(Debug, Error)]
pub enum ReadError {
    /// I/O error during reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, or a record with missing or ill-typed fields.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Postcard decoding error.
    #[error("decoding error: {0}")]
    Decoding(#[from] postcard::Error),

    /// JSON record has no string `"type"` field.
    #[error("record has no \"type\" tag")]
    MissingTypeTag,

    /// Record tag names no known predictor type.
    #[error("unknown predictor type `{0}`")]
    UnknownType(String),

    /// Record holds a different predictor type than requested.
    #[error("predictor type mismatch: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        expected: PredictorKind,
        actual: PredictorKind,
    },

    /// Input is not a binary predictor archive (wrong magic).
    #[error("not a predictor archive")]
    NotAnArchive,

    /// Archive was written by a newer format version.
    #[error("archive format {major}.{minor} is not supported")]
    UnsupportedVersion { major: u8, minor: u8 },

    /// Header names an unknown predictor kind.
    #[error("unknown predictor kind {0}")]
    UnknownKind(u8),

    /// Payload checksum doesn't match.
    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Input ended early.
    #[error("archive truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Payload decoded but is inconsistent with the header.
    #[error("corrupt payload: {0}")]
    CorruptPayload(String),

    /// Archive is compressed but the `compression` feature is disabled.
    #[error("archive is compressed but the `compression` feature is not enabled")]
    CompressionUnavailable,

    /// Decompression error.
    #[cfg(feature = "compression")]
    #[error("decompression error: {0}")]
    Decompression(std::io::Error),
}
