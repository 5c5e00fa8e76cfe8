//! Recursive-descent decoder.

use tracing::trace;

use crate::buf_decoder::BufDecoder;
use crate::errors::{CodecError, CodecResult};
use crate::framing;
use crate::tag;
use crate::types::{Codec, Decoder};
use crate::value::{Map, Value};

/// Default limit on container nesting.  Each level costs a couple of stack
/// frames, this keeps an unoptimized build well inside a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Config for decoding values.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DecodeConfig {
    max_depth: usize,
}

impl DecodeConfig {
    /// Constructs a new instance.
    ///
    /// `max_depth` is the number of containers that may be nested inside each
    /// other.  A depth of 0 only admits scalars.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Gets the max container depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decodes the first value in a buffer, returning it along with the number
    /// of bytes it took up.
    pub fn decode(&self, buf: &[u8]) -> CodecResult<(Value, usize)> {
        let mut dec = BufDecoder::new(buf);
        let v = self.decode_from(&mut dec)?;
        Ok((v, dec.position()))
    }

    /// Decodes a buffer that must hold exactly one value.
    pub fn decode_all(&self, buf: &[u8]) -> CodecResult<Value> {
        let (v, consumed) = self.decode(buf)?;
        let leftover = buf.len() - consumed;
        if leftover > 0 {
            return Err(CodecError::TrailingData(leftover));
        }
        Ok(v)
    }

    /// Decodes a hex string that must hold exactly one value.
    pub fn decode_hex_all(&self, s: &str) -> CodecResult<Value> {
        let buf = framing::decode_hex(s)?;
        self.decode_all(&buf)
    }

    /// Decodes the next value from an arbitrary decoder.
    pub fn decode_from(&self, dec: &mut impl Decoder) -> CodecResult<Value> {
        decode_value(dec, self, 0)
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Decodes the first value in a buffer with the default config.  Returns the
/// value and the number of bytes consumed.
pub fn decode(buf: &[u8]) -> CodecResult<(Value, usize)> {
    DecodeConfig::default().decode(buf)
}

/// Decodes a buffer holding exactly one value with the default config, failing
/// with [`CodecError::TrailingData`] if anything is left over.
pub fn decode_all(buf: &[u8]) -> CodecResult<Value> {
    DecodeConfig::default().decode_all(buf)
}

fn decode_value(dec: &mut impl Decoder, config: &DecodeConfig, depth: usize) -> CodecResult<Value> {
    let t = u8::decode(dec)?;

    let v = match t {
        0x00..=0x7f => Value::Int(i128::from(t)),
        0x80..=0x8f => decode_map(dec, config, depth, usize::from(t & 0x0f))?,
        0x90..=0x9f => decode_array(dec, config, depth, usize::from(t & 0x0f))?,
        0xa0..=0xbf => Value::Str(read_str(dec, usize::from(t & 0x1f))?),

        tag::NIL => Value::Null,
        tag::FALSE => Value::Bool(false),
        tag::TRUE => Value::Bool(true),

        tag::FLOAT32 => Value::Float(f64::from(f32::decode(dec)?)),
        tag::FLOAT64 => Value::Float(f64::decode(dec)?),

        tag::UINT8 => Value::from(u8::decode(dec)?),
        tag::UINT16 => Value::from(u16::decode(dec)?),
        tag::UINT32 => Value::from(u32::decode(dec)?),
        tag::UINT64 => Value::from(u64::decode(dec)?),

        // Signed payloads are two's complement.
        tag::INT8 => Value::from(i8::decode(dec)?),
        tag::INT16 => Value::from(i16::decode(dec)?),
        tag::INT32 => Value::from(i32::decode(dec)?),
        tag::INT64 => Value::from(i64::decode(dec)?),

        tag::STR8 => {
            let len = u8::decode(dec)?;
            Value::Str(read_str(dec, usize::from(len))?)
        }
        tag::STR16 => {
            let len = u16::decode(dec)?;
            Value::Str(read_str(dec, usize::from(len))?)
        }
        tag::STR32 => {
            let len = u32::decode(dec)?;
            Value::Str(read_str(dec, len as usize)?)
        }

        tag::ARRAY16 => {
            let len = u16::decode(dec)?;
            decode_array(dec, config, depth, usize::from(len))?
        }
        tag::ARRAY32 => {
            let len = u32::decode(dec)?;
            decode_array(dec, config, depth, len as usize)?
        }

        tag::MAP16 => {
            let len = u16::decode(dec)?;
            decode_map(dec, config, depth, usize::from(len))?
        }
        tag::MAP32 => {
            let len = u32::decode(dec)?;
            decode_map(dec, config, depth, len as usize)?
        }

        0xe0..=0xff => Value::Int(i128::from(t as i8)),

        _ => return Err(CodecError::InvalidTag(t)),
    };

    Ok(v)
}

/// Checks that we can go one container deeper, returning the new depth.
fn enter_container(config: &DecodeConfig, depth: usize) -> CodecResult<usize> {
    let depth = depth + 1;
    if depth > config.max_depth {
        trace!(max_depth = config.max_depth, "refusing to decode nested container");
        return Err(CodecError::DepthLimit(config.max_depth));
    }
    Ok(depth)
}

/// Fails early if `n` items of at least `min_size` bytes each can't possibly
/// fit in what's left of the input, so we never allocate for a bogus length.
fn check_fits(remaining: usize, n: usize, min_size: usize) -> CodecResult<()> {
    if n.saturating_mul(min_size) > remaining {
        return Err(CodecError::OverrunInput);
    }
    Ok(())
}

fn decode_array(
    dec: &mut impl Decoder,
    config: &DecodeConfig,
    depth: usize,
    len: usize,
) -> CodecResult<Value> {
    let depth = enter_container(config, depth)?;
    check_fits(dec.remaining(), len, 1)?;

    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(decode_value(dec, config, depth)?);
    }

    Ok(Value::Array(items))
}

fn decode_map(
    dec: &mut impl Decoder,
    config: &DecodeConfig,
    depth: usize,
    len: usize,
) -> CodecResult<Value> {
    let depth = enter_container(config, depth)?;
    check_fits(dec.remaining(), len, 2)?;

    let mut map = Map::with_capacity(len);
    for _ in 0..len {
        let key = match decode_value(dec, config, depth)? {
            Value::Str(s) => s,
            other => return Err(CodecError::NonStringKey(other.type_name())),
        };

        let v = decode_value(dec, config, depth)?;

        if map.contains_key(&key) {
            return Err(CodecError::DuplicateKey(key));
        }
        map.insert(key, v);
    }

    Ok(Value::Map(map))
}

fn read_str(dec: &mut impl Decoder, len: usize) -> CodecResult<String> {
    check_fits(dec.remaining(), len, 1)?;

    let mut buf = vec![0; len];
    dec.read_buf(&mut buf)?;
    String::from_utf8(buf).map_err(|e| CodecError::InvalidUtf8(e.utf8_error()))
}
