//! MessagePack core codec over a dynamic [`Value`] tree.
//!
//! Encoding always picks the canonical (smallest) tag tier.  Decoding accepts
//! everything the encoder emits plus 32-bit floats.  Ext and bin types are not
//! supported.

mod buf_decoder;
pub use buf_decoder::BufDecoder;

mod errors;
pub use errors::{CodecError, CodecResult, SizeKind};

mod types;
pub use types::{Codec, Decoder, Encoder};

mod value;
pub use value::{INT_MAX, INT_MIN, Map, Value};

mod tag;

mod encode;
pub use encode::encode;

mod decode;
pub use decode::{DEFAULT_MAX_DEPTH, DecodeConfig, decode, decode_all};

mod framing;
pub use framing::{decode_hex, decode_hex_all, encode_to_hex};

mod util;
pub use util::{decode_buf_exact, encode_to_vec};

#[cfg(feature = "proptest")]
mod arbitrary;

#[cfg(test)]
mod tests;
