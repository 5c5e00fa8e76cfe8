use crate::{
    CodecError, Map, Value, decode, decode_all, decode_buf_exact, decode_hex_all, encode,
    encode_to_hex,
};

fn obj(entries: &[(&str, Value)]) -> Value {
    Value::Map(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect::<Map>(),
    )
}

fn strs(items: &[&str]) -> Value {
    items.iter().copied().map(Value::from).collect()
}

#[test]
fn test_employees_vector() {
    let v = obj(&[("employees", strs(&["John", "Anna", "Peter"]))]);
    let exp = "81a9656d706c6f7965657393a44a6f686ea4416e6e61a55065746572";

    assert_eq!(encode_to_hex(&v).unwrap(), exp);
    assert_eq!(decode_hex_all(exp).unwrap(), v);
}

#[test]
fn test_record_array_vector() {
    let v = Value::Array(vec![
        obj(&[("name", "Ram".into()), ("age", 20.into())]),
        obj(&[("name", "Bob".into()), ("age", 30.into())]),
    ]);
    let exp = "9282a46e616d65a352616da36167651482a46e616d65a3426f62a36167651e";

    assert_eq!(encode_to_hex(&v).unwrap(), exp);
    assert_eq!(decode_hex_all(exp).unwrap(), v);
}

#[test]
fn test_float_map_vector() {
    let v = obj(&[("x", 0.1.into()), ("y", (-2.3).into()), ("z", 3.5.into())]);
    let exp = "83a178cb3fb999999999999aa179cbc002666666666666a17acb400c000000000000";

    assert_eq!(encode_to_hex(&v).unwrap(), exp);
    assert_eq!(decode_hex_all(exp).unwrap(), v);
}

#[test]
fn test_nested_document_vector() {
    let image = |url: &str, size: i64| {
        obj(&[
            ("url", url.into()),
            ("width", size.into()),
            ("height", size.into()),
        ])
    };

    let v = obj(&[
        ("id", "0001".into()),
        ("type", "donut".into()),
        ("name", "Cake".into()),
        ("image", image("images/0001.jpg", 200)),
        ("thumbnail", image("images/thumbnails/0001.jpg", 32)),
    ]);
    let exp = "85a26964a430303031a474797065a5646f6e7574a46e616d65a443616b65a5696d61676583a375726caf696d616765732f303030312e6a7067a57769647468ccc8a6686569676874ccc8a97468756d626e61696c83a375726cba696d616765732f7468756d626e61696c732f303030312e6a7067a5776964746820a668656967687420";

    assert_eq!(encode_to_hex(&v).unwrap(), exp);
    assert_eq!(decode_hex_all(exp).unwrap(), v);
}

#[test]
fn test_canonical_reencode() {
    // Decoding then re-encoding should give back the exact same bytes.
    let inputs = [
        "c0",
        "93010203",
        "de0010a16101a16202a16303a16404a16505a16606a16707a16808a16909a16a0aa16b0ba16c0ca16d0da16e0ea16f0fa17010",
        "d3ffffffff80000000",
        "d38000000000000000",
        "cbc002666666666666",
    ];

    for s in inputs {
        let v = decode_hex_all(s).unwrap();
        assert_eq!(encode_to_hex(&v).unwrap(), s, "test: re-encoding {s}");
    }
}

#[test]
fn test_non_canonical_input_normalizes() {
    // A float32 and a widened uint both decode, but re-encode canonically.
    let v = decode_hex_all("ca3fc00000").unwrap();
    assert_eq!(encode_to_hex(&v).unwrap(), "cb3ff8000000000000");

    let v = decode_hex_all("cd0005").unwrap();
    assert_eq!(encode_to_hex(&v).unwrap(), "05");

    let v = decode_hex_all("d90161").unwrap();
    assert_eq!(encode_to_hex(&v).unwrap(), "a161");
}

#[test]
fn test_generic_helpers_agree() {
    let v = strs(&["a", "b"]);
    let buf = encode(&v).unwrap();
    assert_eq!(buf, [0x92, 0xa1, 0x61, 0xa1, 0x62]);

    assert_eq!(decode_buf_exact::<Value>(&buf).unwrap(), v);
    assert_eq!(decode_all(&buf).unwrap(), v);
    assert_eq!(decode(&buf).unwrap(), (v, buf.len()));
}

#[test]
fn test_trailing_data_both_paths() {
    assert!(matches!(
        decode_buf_exact::<Value>(&[0xc0, 0xc0]),
        Err(CodecError::TrailingData(1))
    ));
    assert!(matches!(
        decode_hex_all("c0c0"),
        Err(CodecError::TrailingData(1))
    ));
}
