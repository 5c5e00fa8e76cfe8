//! Hex string framing used at the system boundary.
//!
//! Encoded bytes travel as lowercase hex, two characters per byte with no
//! separators.  Decoding is lenient about case and surrounding whitespace.

use crate::decode::DecodeConfig;
use crate::errors::CodecResult;
use crate::types::Codec;
use crate::util::encode_to_vec;
use crate::value::Value;

/// Encodes the value and renders the bytes as lowercase hex.
pub fn encode_to_hex<T: Codec>(v: &T) -> CodecResult<String> {
    let buf = encode_to_vec(v)?;
    Ok(hex::encode(buf))
}

/// Parses a hex string into raw bytes.
pub fn decode_hex(s: &str) -> CodecResult<Vec<u8>> {
    Ok(hex::decode(s.trim())?)
}

/// Decodes a hex string holding exactly one value, with the default config.
pub fn decode_hex_all(s: &str) -> CodecResult<Value> {
    DecodeConfig::default().decode_hex_all(s)
}
