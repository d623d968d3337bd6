use async_graphql_value::Value;

use super::{ScalarError, ScalarParser};
use crate::InputValue;

/// A boolean carried around as the string `"true"` or `"false"`.
pub struct BoolStringScalar;

impl BoolStringScalar {
    fn to_bool_string(is_true: bool) -> InputValue {
        InputValue::String(if is_true { "true" } else { "false" }.to_string())
    }
}

impl ScalarParser for BoolStringScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        Ok(Self::to_bool_string(matches!(value, Value::Boolean(true))))
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        Ok(Self::to_bool_string(matches!(value, InputValue::Boolean(true))))
    }

    fn serialize(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        let is_true = match value {
            InputValue::String(s) => s == "true" || s == "1",
            InputValue::Boolean(b) => b,
            InputValue::Int(i) => i == 1,
            InputValue::Float(f) => f == 1.0,
            _ => false,
        };
        Ok(InputValue::Boolean(is_true))
    }
}
