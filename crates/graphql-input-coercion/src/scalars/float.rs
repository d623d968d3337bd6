use async_graphql_value::Value;

use super::{ScalarError, ScalarParser};
use crate::InputValue;

/// Double precision floating point. Integers are accepted and widened.
pub struct FloatScalar;

impl ScalarParser for FloatScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        match value {
            Value::Number(number) => Ok(InputValue::Float(number.as_f64().unwrap_or(f64::NAN))),
            value => Err(ScalarError::unexpected("Float", value)),
        }
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        match value {
            InputValue::Int(i) => Ok(InputValue::Float(i as f64)),
            InputValue::Float(f) => Ok(InputValue::Float(f)),
            value => Err(ScalarError::unexpected("Float", &value)),
        }
    }
}
