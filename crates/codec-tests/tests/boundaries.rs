//! Fixed boundary vectors for the public encode/decode API.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "shared test deps")]

use hexpack_codec::{
    CodecError, Map, SizeKind, Value, decode_hex_all, encode, encode_to_hex,
};

fn hex_of(v: &Value) -> String {
    encode_to_hex(v).expect("test: encode")
}

#[test]
fn test_int_boundaries() {
    assert_eq!(hex_of(&Value::from(127)), "7f");
    assert_eq!(hex_of(&Value::from(128)), "cc80");
    assert_eq!(hex_of(&Value::from(-1)), "ff");
    assert_eq!(hex_of(&Value::from(-33)), "d0df");
    assert_eq!(hex_of(&Value::from(-2147483648i64)), "d3ffffffff80000000");
}

#[test]
fn test_str_boundaries() {
    let s = |n: usize| Value::Str("a".repeat(n));

    assert_eq!(hex_of(&s(15)), format!("af{}", "61".repeat(15)));
    assert_eq!(hex_of(&s(16)), format!("b0{}", "61".repeat(16)));
    assert_eq!(hex_of(&s(256)), format!("da0100{}", "61".repeat(256)));
}

#[test]
fn test_container_boundaries() {
    assert_eq!(hex_of(&Value::Map(Map::new())), "80");

    let seventeen: Map = (0..17).map(|i| (format!("k{i:02}"), Value::from(i))).collect();
    let out = hex_of(&Value::Map(seventeen.clone()));
    assert!(out.starts_with("de0011"));
    assert_eq!(decode_hex_all(&out).unwrap(), Value::Map(seventeen));

    let ones = Value::Array(vec![Value::from(1); 16]);
    assert_eq!(hex_of(&ones), format!("dc0010{}", "01".repeat(16)));
}

#[test]
fn test_failures() {
    assert!(matches!(decode_hex_all("c1"), Err(CodecError::InvalidTag(0xc1))));
    assert!(matches!(decode_hex_all("c0c0"), Err(CodecError::TrailingData(1))));
    assert!(matches!(decode_hex_all("ag"), Err(CodecError::InvalidHex(_))));
    assert!(matches!(
        encode(&Value::Int(1 << 64)),
        Err(CodecError::UnsupportedSize(SizeKind::Int, _))
    ));
}
