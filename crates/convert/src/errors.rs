use hexpack_codec::CodecError;
use thiserror::Error;

/// Errors from converting between documents and encodings.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input document wasn't valid JSON.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoding or decoding failed.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),

    /// JSON has no way to write NaN or infinities.
    #[error("float {0} has no JSON representation")]
    NonFiniteFloat(f64),

    /// A non-integer JSON number with no finite `f64` value.
    #[error("unsupported number {0}")]
    UnsupportedNumber(serde_json::Number),
}

/// Wrapper result type.
pub type ConvertResult<T> = Result<T, ConvertError>;
