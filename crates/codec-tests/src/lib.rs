//! Property testing macros and utilities for hexpack-codec.
//!
//! The main export is the `generate_codec_tests!` macro, which works for
//! [`Value`](hexpack_codec::Value) as well as any consumer type that
//! implements `Codec` on top of it.

// Re-export dependencies for macro usage
pub use hexpack_codec;
pub use paste;
pub use proptest;

/// Generates property tests for a type that implements `Codec` using proptest.
///
/// This macro creates property-based tests to verify that:
/// 1. Encoding then decoding produces the original value (round-trip property)
/// 2. The encoding is deterministic (same input always produces same output)
/// 3. Decoding then re-encoding reproduces the exact bytes (canonical form)
/// 4. The hex framing round-trips too
/// 5. Different inputs produce different encodings
///
/// Values come from `any::<T>()` unless a strategy is passed explicitly.
///
/// # Requirements
///
/// The type must implement:
/// - `hexpack_codec::Codec` - for encoding/decoding
/// - `proptest::arbitrary::Arbitrary` - if no strategy is given
/// - `Debug + PartialEq` - for test assertions
///
/// # Example
/// ```rust,no_run
/// use hexpack_codec_tests::generate_codec_tests;
/// use hexpack_codec::Value;
/// use proptest::prelude::*;
///
/// // Every value the Arbitrary impl can produce.
/// generate_codec_tests!(Value, "value");
///
/// // Only strings, to hammer the length tiers.
/// generate_codec_tests!(Value, ".{0,300}".prop_map(Value::Str), "str_value");
/// ```
#[macro_export]
macro_rules! generate_codec_tests {
    ($type:ty, $name:expr) => {
        $crate::generate_codec_tests!(
            $type,
            $crate::proptest::prelude::any::<$type>(),
            $name
        );
    };

    ($type:ty, $strategy:expr, $name:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _codec>] {
                use super::*;
                use $crate::proptest::{prelude::{prop_assert_eq, prop_assert_ne, prop_assume}, proptest, strategy::Strategy};
                use $crate::hexpack_codec::{encode_to_vec, decode_buf_exact, encode_to_hex, decode_hex};

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_codec_roundtrip>](value in $strategy) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        let decoded = decode_buf_exact::<$type>(&encoded).expect("test: decoding should succeed");
                        prop_assert_eq!(value, decoded);
                    }

                    #[test]
                    fn [<test_codec_deterministic>](value in $strategy) {
                        let encoded1 = encode_to_vec(&value).expect("test: encoding should succeed");
                        let encoded2 = encode_to_vec(&value).expect("test: encoding should succeed");
                        prop_assert_eq!(encoded1, encoded2, "test: unexpected inequality");
                    }

                    #[test]
                    fn [<test_codec_canonical>](value in $strategy) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        let decoded = decode_buf_exact::<$type>(&encoded).expect("test: decoding should succeed");
                        let reencoded = encode_to_vec(&decoded).expect("test: encoding should succeed");
                        prop_assert_eq!(encoded, reencoded, "test: re-encoding changed bytes");
                    }

                    #[test]
                    fn [<test_codec_hex_roundtrip>](value in $strategy) {
                        let s = encode_to_hex(&value).expect("test: encoding should succeed");
                        prop_assert_eq!(&s, &s.to_lowercase());
                        let buf = decode_hex(&s).expect("test: hex should parse");
                        let decoded = decode_buf_exact::<$type>(&buf).expect("test: decoding should succeed");
                        prop_assert_eq!(value, decoded);
                    }

                    #[test]
                    fn [<test_codec_different_inputs>](
                        value1 in $strategy,
                        value2 in $strategy
                    ) {
                        prop_assume!(value1 != value2);
                        let encoded1 = encode_to_vec(&value1).expect("test: encoding should succeed");
                        let encoded2 = encode_to_vec(&value2).expect("test: encoding should succeed");
                        prop_assert_ne!(encoded1, encoded2, "test: unexpected equality");
                    }
                }
            }
        }
    };
}
