use async_graphql_value::Value;

use super::{ScalarError, ScalarParser, can_coerce_to_int};
use crate::InputValue;

/// Signed 32-bit integer.
pub struct IntScalar;

impl IntScalar {
    fn coerce_number(&self, number: f64, display: impl std::fmt::Display) -> Result<InputValue, ScalarError> {
        if can_coerce_to_int(number) {
            Ok(InputValue::Int(number as i64))
        } else {
            Err(ScalarError::new(format!(
                "Found value {display} which cannot be coerced into a Int scalar"
            )))
        }
    }
}

impl ScalarParser for IntScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        match value {
            Value::Number(number) => match number.as_i64() {
                Some(i) => self.coerce_number(i as f64, number),
                None => self.coerce_number(number.as_f64().unwrap_or(f64::NAN), number),
            },
            value => Err(ScalarError::unexpected("Int", value)),
        }
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        match value {
            InputValue::Int(i) => self.coerce_number(i as f64, i),
            InputValue::Float(f) => self.coerce_number(f, f),
            value => Err(ScalarError::unexpected("Int", &value)),
        }
    }
}
