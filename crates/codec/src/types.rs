use crate::CodecError;

/// Generic codec trait for types that go between bytes and MessagePack tag
/// streams.
pub trait Codec: Sized {
    /// Decodes self from a decoder.
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError>;

    /// Encodes self into an encoder.
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError>;
}

/// Generic decoder trait that reads inputs.
pub trait Decoder {
    /// Returns the number of bytes left to read.
    fn remaining(&self) -> usize;

    /// Reads a variable-size buf.  This does NOT include length tagging.
    fn read_buf(&mut self, into: &mut [u8]) -> Result<(), CodecError>;

    /// Reads a fixed size buf.  This does NOT include length tagging.
    fn read_arr<const N: usize>(&mut self) -> Result<[u8; N], CodecError>;
}

/// Generic encoder trait that writes outputs.
pub trait Encoder {
    /// Writes a buf.  This does NOT include length tagging.
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError>;
}

/// Encoding to a vec buffer.
impl Encoder for Vec<u8> {
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Wraps the fixed size numeric types, which are always big-endian on the
/// wire.  These are the raw payloads and carry no tag byte.
macro_rules! impl_num_codec {
    ( $nty:ident $bytes:literal ) => {
        impl Codec for $nty {
            fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
                let arr: [u8; $bytes] = dec.read_arr()?;
                Ok(<$nty>::from_be_bytes(arr))
            }

            fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
                enc.write_buf(&self.to_be_bytes())
            }
        }
    };
}

impl_num_codec!(u8 1);
impl_num_codec!(i8 1);
impl_num_codec!(u16 2);
impl_num_codec!(i16 2);
impl_num_codec!(u32 4);
impl_num_codec!(i32 4);
impl_num_codec!(u64 8);
impl_num_codec!(i64 8);
impl_num_codec!(f32 4);
impl_num_codec!(f64 8);
