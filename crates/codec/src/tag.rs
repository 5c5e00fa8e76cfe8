//! Tag bytes for the supported subset of MessagePack.
//!
//! ```txt
//! 0xxxxxxx            positive fixint (0..=127)
//! 1000xxxx            fixmap (0..=15 entries)
//! 1001xxxx            fixarray (0..=15 elements)
//! 101xxxxx            fixstr (0..=31 bytes)
//! 111xxxxx            negative fixint (-32..=-1)
//! ```
//!
//! Everything else is a single tag byte followed by a big-endian payload or
//! length field.

pub(crate) const NIL: u8 = 0xc0;
pub(crate) const FALSE: u8 = 0xc2;
pub(crate) const TRUE: u8 = 0xc3;

pub(crate) const FLOAT32: u8 = 0xca;
pub(crate) const FLOAT64: u8 = 0xcb;

pub(crate) const UINT8: u8 = 0xcc;
pub(crate) const UINT16: u8 = 0xcd;
pub(crate) const UINT32: u8 = 0xce;
pub(crate) const UINT64: u8 = 0xcf;

pub(crate) const INT8: u8 = 0xd0;
pub(crate) const INT16: u8 = 0xd1;
pub(crate) const INT32: u8 = 0xd2;
pub(crate) const INT64: u8 = 0xd3;

pub(crate) const STR8: u8 = 0xd9;
pub(crate) const STR16: u8 = 0xda;
pub(crate) const STR32: u8 = 0xdb;

pub(crate) const ARRAY16: u8 = 0xdc;
pub(crate) const ARRAY32: u8 = 0xdd;

pub(crate) const MAP16: u8 = 0xde;
pub(crate) const MAP32: u8 = 0xdf;

/// Base of the fixmap range, low nibble is the entry count.
pub(crate) const FIXMAP: u8 = 0x80;

/// Base of the fixarray range, low nibble is the element count.
pub(crate) const FIXARRAY: u8 = 0x90;

/// Base of the fixstr range, low 5 bits are the byte length.
pub(crate) const FIXSTR: u8 = 0xa0;

/// Largest count that fits in a fixmap or fixarray tag.
pub(crate) const FIX_CONTAINER_MAX: usize = 0x0f;

/// Largest length that fits in a fixstr tag.
pub(crate) const FIXSTR_MAX: usize = 0x1f;
