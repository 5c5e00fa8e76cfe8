//! Converts JSON documents to hex-framed hexpack encodings and back.
//!
//! This is the only part of the system that knows about document text; the
//! codec itself only sees [`Value`]s and bytes.

use hexpack_codec::{DecodeConfig, Value, encode_to_hex};
use tracing::debug;

mod errors;
pub use errors::{ConvertError, ConvertResult};

mod json;
pub use json::{json_to_value, value_to_json};

/// Literal document that is packed straight to the nil tag.
const NULL_DOCUMENT: &str = "null";

/// Converter between JSON text and hex encodings.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    decode_config: DecodeConfig,
    pretty: bool,
}

impl Converter {
    /// Constructs a new instance.
    pub fn new(decode_config: DecodeConfig) -> Self {
        Self {
            decode_config,
            pretty: false,
        }
    }

    /// Sets whether unpacked documents are rendered with indentation.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Parses a JSON document and encodes it as a hex string.
    pub fn pack(&self, document: &str) -> ConvertResult<String> {
        let value = parse_document(document)?;
        let out = encode_to_hex(&value)?;
        debug!(doc_len = document.len(), bytes = out.len() / 2, "packed document");
        Ok(out)
    }

    /// Decodes a hex string holding exactly one value and renders it as JSON.
    pub fn unpack(&self, hex: &str) -> ConvertResult<String> {
        let value = self.decode_config.decode_hex_all(hex)?;
        let json = value_to_json(&value)?;

        let out = if self.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };

        debug!(bytes = hex.trim().len() / 2, doc_len = out.len(), "unpacked document");
        Ok(out)
    }
}

/// Parses JSON text into a [`Value`].
pub fn parse_document(document: &str) -> ConvertResult<Value> {
    if document.trim() == NULL_DOCUMENT {
        return Ok(Value::Null);
    }

    let json: serde_json::Value = serde_json::from_str(document)?;
    json_to_value(json)
}

/// Packs a JSON document with the default config.
pub fn pack(document: &str) -> ConvertResult<String> {
    Converter::default().pack(document)
}

/// Unpacks a hex string to compact JSON with the default config.
pub fn unpack(hex: &str) -> ConvertResult<String> {
    Converter::default().unpack(hex)
}
