use proptest::prelude::*;

use crate::{Map, Value};

/// Leaf values that survive a round trip with equality intact.
fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i8>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // NaN never compares equal to itself.
        any::<f64>()
            .prop_filter("nan", |f| !f.is_nan())
            .prop_map(Value::Float),
        ".{0,40}".prop_map(Value::Str),
    ]
}

impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Value>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        leaf()
            .prop_recursive(4, 64, 8, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                    prop::collection::vec(("[a-z]{0,6}", inner), 0..8)
                        .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>())),
                ]
            })
            .boxed()
    }
}
