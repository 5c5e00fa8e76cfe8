//! Dynamic value tree shared by the encoder and decoder.

use indexmap::IndexMap;

use crate::decode::DecodeConfig;
use crate::types::{Codec, Decoder, Encoder};
use crate::{CodecError, encode};

/// Smallest integer that can be carried by a [`Value::Int`] on the wire.
pub const INT_MIN: i128 = i64::MIN as i128;

/// Largest integer that can be carried by a [`Value::Int`] on the wire.
pub const INT_MAX: i128 = u64::MAX as i128;

/// Map type used by [`Value::Map`].
///
/// Keeps insertion order for encoding, but compares as an unordered map.
pub type Map = IndexMap<String, Value>;

/// A MessagePack value.
///
/// Integers are held as `i128` so both the signed and unsigned 64-bit tiers
/// fit in one variant.  Only the range [`INT_MIN`]`..=`[`INT_MAX`] is
/// meaningful, anything else fails to encode.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `nil`.
    Null,

    /// A boolean.
    Bool(bool),

    /// An integer.
    Int(i128),

    /// A double precision float.
    Float(f64),

    /// A string.
    Str(String),

    /// An ordered list of values.
    Array(Vec<Value>),

    /// A string-keyed map.
    Map(Map),
}

impl Value {
    /// Returns a short name for the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    /// Returns if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Gets the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Gets the integer, if this is one.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Gets the float, if this is one.  Integers are not converted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Gets the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Gets the entries, if this is a map.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Codec for Value {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        DecodeConfig::default().decode_from(dec)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        encode::encode_value(self, enc)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ( $( $ity:ident )* ) => {
        $(
            impl From<$ity> for Value {
                fn from(n: $ity) -> Self {
                    Value::Int(n as i128)
                }
            }
        )*
    };
}

impl_from_int!(u8 i8 u16 i16 u32 i32 u64 i64 usize isize);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_eq_ignores_order() {
        let a: Value = [("x", Value::from(1)), ("y", Value::from(2))]
            .into_iter()
            .collect();
        let b: Value = [("y", Value::from(2)), ("x", Value::from(1))]
            .into_iter()
            .collect();
        assert_eq!(a, b);

        let c: Value = [("x", Value::from(1)), ("y", Value::from(3))]
            .into_iter()
            .collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(u64::MAX), Value::Int(INT_MAX));
        assert_eq!(Value::from(i64::MIN), Value::Int(INT_MIN));
        assert_eq!(Value::from(0.5f32), Value::Float(0.5));
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("hi")).as_str(), Some("hi"));
        assert_eq!(
            [1, 2].into_iter().map(Value::from).collect::<Value>(),
            Value::Array(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn test_accessors() {
        let v = Value::from(true);
        assert_eq!(v.as_bool(), Some(true));
        assert_eq!(v.as_int(), None);
        assert_eq!(v.type_name(), "bool");
        assert!(Value::Null.is_null());
        assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::Int(3).as_f64(), None);
        assert!(Value::Array(Vec::new()).as_array().unwrap().is_empty());
        assert!(Value::Map(Map::new()).as_map().unwrap().is_empty());
    }
}
