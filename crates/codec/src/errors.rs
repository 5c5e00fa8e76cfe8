use std::fmt;
use std::str::Utf8Error;

use hex::FromHexError;
use thiserror::Error;

/// The kind of value whose size fell outside every encodable tier.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SizeKind {
    /// Integer magnitude.
    Int,

    /// String byte length.
    Str,

    /// Array element count.
    Array,

    /// Map entry count.
    Map,
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SizeKind::Int => "int",
            SizeKind::Str => "str",
            SizeKind::Array => "array",
            SizeKind::Map => "map",
        };
        f.write_str(s)
    }
}

/// Errors from hexpack-codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value was too large (or too negative) for any tag tier.
    #[error("unsupported {0} size ({1})")]
    UnsupportedSize(SizeKind, i128),

    /// We read a tag byte that isn't part of the supported format.
    #[error("invalid tag 0x{0:02x}")]
    InvalidTag(u8),

    /// If there was extra data in a buffer that we didn't consume reading a
    /// value.
    #[error("trailing data after value ({0} bytes)")]
    TrailingData(usize),

    /// If we tried to read past the end of the underlying buffer.
    #[error("would overrun end of input")]
    OverrunInput,

    /// String payload was not valid UTF-8.
    #[error("invalid utf-8 in str: {0}")]
    InvalidUtf8(#[source] Utf8Error),

    /// A map key decoded to something other than a string.
    #[error("map key must be a str (found {0})")]
    NonStringKey(&'static str),

    /// A map repeated one of its keys.
    #[error("duplicate map key {0:?}")]
    DuplicateKey(String),

    /// Containers were nested deeper than the decoder allows.
    #[error("nesting exceeds max depth of {0}")]
    DepthLimit(usize),

    /// The hex framing around the bytes was malformed.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] FromHexError),
}

/// Wrapper result type.
pub type CodecResult<T> = Result<T, CodecError>;
