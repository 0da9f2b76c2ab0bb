// ============================================================================
// Dynamic Conversion
// Converts loosely typed JSON values in either direction
// ============================================================================

use crate::domain::NumeralValue;
use crate::interfaces::NumeralCodec;
use crate::numeric::{NumeralError, NumeralResult};
use serde_json::Value;

/// Convert a JSON value with the given codec.
///
/// Numbers are encoded to a numeral string, strings are decoded to a number.
///
/// # Errors
/// - `TypeMismatch` for floats, null, booleans, arrays and objects
/// - any encode or decode error of the codec
///
/// # Example
/// ```
/// use numeral_engine::prelude::*;
/// use numeral_engine::engine::dynamic::convert_json;
/// use serde_json::json;
///
/// let codec = create_from_config(CodecConfig::roman()).unwrap();
/// assert_eq!(convert_json(codec.as_ref(), &json!(14)).unwrap(), json!("XIV"));
/// assert_eq!(convert_json(codec.as_ref(), &json!("XIV")).unwrap(), json!(14));
/// ```
pub fn convert_json(codec: &dyn NumeralCodec, input: &Value) -> NumeralResult<Value> {
    match input {
        Value::Number(number) => {
            let value = json_number(number)?;
            codec.encode(value).map(Value::String)
        }
        Value::String(text) => codec.decode(text).map(|value| Value::from(value.get())),
        other => {
            tracing::debug!(codec = codec.name(), input = %other, "unsupported JSON input");
            Err(NumeralError::TypeMismatch)
        }
    }
}

fn json_number(number: &serde_json::Number) -> NumeralResult<NumeralValue> {
    if let Some(value) = number.as_u64() {
        return NumeralValue::new(value);
    }
    if let Some(value) = number.as_i64() {
        return NumeralValue::try_from(value);
    }

    Err(NumeralError::TypeMismatch)
}
