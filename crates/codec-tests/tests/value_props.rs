//! Property tests for the value codec across the size tiers.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use hexpack_codec_tests::{
    generate_codec_tests,
    hexpack_codec::{Map, Value, encode},
    proptest::prelude::*,
};

fn int_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-40i64..=300).prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
    ]
}

fn str_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{0,40}".prop_map(Value::Str),
        ".{200,300}".prop_map(Value::Str),
    ]
}

fn wide_array() -> impl Strategy<Value = Value> {
    prop::collection::vec(int_value(), 10..40).prop_map(Value::Array)
}

fn wide_map() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-z]{1,8}", any::<Value>()), 10..40)
        .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>()))
}

generate_codec_tests!(Value, "value");
generate_codec_tests!(Value, int_value(), "int");
generate_codec_tests!(Value, str_value(), "str");
generate_codec_tests!(Value, wide_array(), "wide_array");
generate_codec_tests!(Value, wide_map(), "wide_map");

proptest! {
    #[test]
    fn test_int_tier_is_minimal(
        n in prop_oneof![
            any::<i64>().prop_map(i128::from),
            any::<u64>().prop_map(i128::from),
        ]
    ) {
        let buf = encode(&Value::Int(n)).unwrap();
        let exp_len = match n {
            -32..=127 => 1,
            128..=255 | -127..=-33 => 2,
            256..=65535 | -32767..=-128 => 3,
            65536..=4294967295 | -2147483647..=-32768 => 5,
            _ => 9,
        };
        prop_assert_eq!(buf.len(), exp_len);
    }
}
