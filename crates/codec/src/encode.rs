//! Canonical encoder.
//!
//! Always picks the smallest tag tier that can hold a value.  The negative
//! integer tiers follow the boundaries below, which put `-128`, `-32768` and
//! `-2147483648` one tier wider than the two's-complement minimum.
//!
//! ```txt
//! -32..=-1                      negative fixint
//! -127..=-33                    int8
//! -32767..=-128                 int16
//! -2147483647..=-32768          int32
//! -2^63..=-2147483648           int64
//! ```

use crate::errors::{CodecError, CodecResult, SizeKind};
use crate::tag;
use crate::types::{Codec, Encoder};
use crate::util::encode_to_vec;
use crate::value::{INT_MAX, INT_MIN, Value};

const U8_MAX: i128 = u8::MAX as i128;
const U16_MAX: i128 = u16::MAX as i128;
const U32_MAX: i128 = u32::MAX as i128;

/// Encodes a value into a new buffer.
pub fn encode(v: &Value) -> CodecResult<Vec<u8>> {
    encode_to_vec(v)
}

/// Encodes a value, recursing into containers.
pub(crate) fn encode_value(v: &Value, enc: &mut impl Encoder) -> CodecResult<()> {
    match v {
        Value::Null => enc.write_buf(&[tag::NIL]),
        Value::Bool(false) => enc.write_buf(&[tag::FALSE]),
        Value::Bool(true) => enc.write_buf(&[tag::TRUE]),
        Value::Int(n) => encode_int(*n, enc),
        Value::Float(f) => {
            enc.write_buf(&[tag::FLOAT64])?;
            f.encode(enc)
        }
        Value::Str(s) => encode_str(s, enc),
        Value::Array(items) => {
            write_container_header(items.len(), &ARRAY_TAGS, enc)?;
            for item in items {
                encode_value(item, enc)?;
            }
            Ok(())
        }
        Value::Map(map) => {
            write_container_header(map.len(), &MAP_TAGS, enc)?;
            for (k, v) in map {
                encode_str(k, enc)?;
                encode_value(v, enc)?;
            }
            Ok(())
        }
    }
}

fn encode_int(n: i128, enc: &mut impl Encoder) -> CodecResult<()> {
    match n {
        // Both fixint forms are the low byte of the value.
        -32..=0x7f => enc.write_buf(&[n as u8]),

        0x80..=U8_MAX => {
            enc.write_buf(&[tag::UINT8])?;
            (n as u8).encode(enc)
        }
        0x100..=U16_MAX => {
            enc.write_buf(&[tag::UINT16])?;
            (n as u16).encode(enc)
        }
        0x1_0000..=U32_MAX => {
            enc.write_buf(&[tag::UINT32])?;
            (n as u32).encode(enc)
        }
        0x1_0000_0000..=INT_MAX => {
            enc.write_buf(&[tag::UINT64])?;
            (n as u64).encode(enc)
        }

        -127..=-33 => {
            enc.write_buf(&[tag::INT8])?;
            (n as i8).encode(enc)
        }
        -32_767..=-128 => {
            enc.write_buf(&[tag::INT16])?;
            (n as i16).encode(enc)
        }
        -2_147_483_647..=-32_768 => {
            enc.write_buf(&[tag::INT32])?;
            (n as i32).encode(enc)
        }
        INT_MIN..=-2_147_483_648 => {
            enc.write_buf(&[tag::INT64])?;
            (n as i64).encode(enc)
        }

        _ => Err(CodecError::UnsupportedSize(SizeKind::Int, n)),
    }
}

fn encode_str(s: &str, enc: &mut impl Encoder) -> CodecResult<()> {
    let buf = s.as_bytes();
    let len = buf.len();

    if len <= tag::FIXSTR_MAX {
        enc.write_buf(&[tag::FIXSTR | len as u8])?;
    } else if let Ok(len) = u8::try_from(len) {
        enc.write_buf(&[tag::STR8, len])?;
    } else if let Ok(len) = u16::try_from(len) {
        enc.write_buf(&[tag::STR16])?;
        len.encode(enc)?;
    } else if let Ok(len) = u32::try_from(len) {
        enc.write_buf(&[tag::STR32])?;
        len.encode(enc)?;
    } else {
        return Err(CodecError::UnsupportedSize(SizeKind::Str, len as i128));
    }

    enc.write_buf(buf)
}

/// Tag set for one of the container types.
struct ContainerTags {
    kind: SizeKind,
    fix: u8,
    tag16: u8,
    tag32: u8,
}

const ARRAY_TAGS: ContainerTags = ContainerTags {
    kind: SizeKind::Array,
    fix: tag::FIXARRAY,
    tag16: tag::ARRAY16,
    tag32: tag::ARRAY32,
};

const MAP_TAGS: ContainerTags = ContainerTags {
    kind: SizeKind::Map,
    fix: tag::FIXMAP,
    tag16: tag::MAP16,
    tag32: tag::MAP32,
};

/// Writes an array or map header.  These have no 8-bit length tier.
fn write_container_header(
    len: usize,
    tags: &ContainerTags,
    enc: &mut impl Encoder,
) -> CodecResult<()> {
    if len <= tag::FIX_CONTAINER_MAX {
        enc.write_buf(&[tags.fix | len as u8])
    } else if let Ok(len) = u16::try_from(len) {
        enc.write_buf(&[tags.tag16])?;
        len.encode(enc)
    } else if let Ok(len) = u32::try_from(len) {
        enc.write_buf(&[tags.tag32])?;
        len.encode(enc)
    } else {
        Err(CodecError::UnsupportedSize(tags.kind, len as i128))
    }
}
