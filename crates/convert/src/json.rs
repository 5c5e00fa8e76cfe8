//! Mapping between `serde_json` values and codec values.

use hexpack_codec::{CodecError, Map, SizeKind, Value};
use serde_json::Number;

use crate::errors::{ConvertError, ConvertResult};

/// Converts a parsed JSON document into a [`Value`].
///
/// Integral numbers become [`Value::Int`], everything else numeric becomes
/// [`Value::Float`].  Object order is preserved.
pub fn json_to_value(json: serde_json::Value) -> ConvertResult<Value> {
    let v = match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => number_to_value(n)?,
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(json_to_value)
                .collect::<ConvertResult<_>>()?,
        ),
        serde_json::Value::Object(obj) => {
            let mut map = Map::with_capacity(obj.len());
            for (k, v) in obj {
                map.insert(k, json_to_value(v)?);
            }
            Value::Map(map)
        }
    };

    Ok(v)
}

fn number_to_value(n: Number) -> ConvertResult<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }

    // Numbers are kept as their literal text, so an integer literal that got
    // this far is out of range rather than something to approximate.
    let lit = n.to_string();
    if !lit.contains(['.', 'e', 'E']) {
        let saturated = if lit.starts_with('-') { i128::MIN } else { i128::MAX };
        let n = lit.parse::<i128>().unwrap_or(saturated);
        return Err(CodecError::UnsupportedSize(SizeKind::Int, n).into());
    }

    match n.as_f64() {
        Some(f) => Ok(Value::Float(f)),
        None => Err(ConvertError::UnsupportedNumber(n)),
    }
}

/// Converts a [`Value`] into a JSON value that can be rendered.
pub fn value_to_json(v: &Value) -> ConvertResult<serde_json::Value> {
    let json = match v {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::Number(int_to_number(*n)?),
        Value::Float(f) => {
            let n = Number::from_f64(*f).ok_or(ConvertError::NonFiniteFloat(*f))?;
            serde_json::Value::Number(n)
        }
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(
            items
                .iter()
                .map(value_to_json)
                .collect::<ConvertResult<_>>()?,
        ),
        Value::Map(map) => {
            let mut obj = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                obj.insert(k.clone(), value_to_json(v)?);
            }
            serde_json::Value::Object(obj)
        }
    };

    Ok(json)
}

fn int_to_number(n: i128) -> ConvertResult<Number> {
    if let Ok(i) = i64::try_from(n) {
        Ok(Number::from(i))
    } else if let Ok(u) = u64::try_from(n) {
        Ok(Number::from(u))
    } else {
        Err(CodecError::UnsupportedSize(SizeKind::Int, n).into())
    }
}
