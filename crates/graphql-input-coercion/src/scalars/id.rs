use async_graphql_value::Value;

use super::{ScalarError, ScalarParser};
use crate::InputValue;

/// Accepts strings and integers, always coerced into a string.
pub struct IDScalar;

impl ScalarParser for IDScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        match value {
            Value::String(s) => Ok(InputValue::String(s.clone())),
            Value::Number(number) if number.is_i64() || number.is_u64() => Ok(InputValue::String(number.to_string())),
            value => Err(ScalarError::unexpected("ID", value)),
        }
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        match value {
            InputValue::String(s) => Ok(InputValue::String(s)),
            InputValue::Int(i) => Ok(InputValue::String(i.to_string())),
            value => Err(ScalarError::unexpected("ID", &value)),
        }
    }
}
