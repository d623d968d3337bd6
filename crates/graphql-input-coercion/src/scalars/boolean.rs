use async_graphql_value::Value;

use super::{ScalarError, ScalarParser};
use crate::InputValue;

pub struct BooleanScalar;

impl ScalarParser for BooleanScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        match value {
            Value::Boolean(b) => Ok(InputValue::Boolean(*b)),
            value => Err(ScalarError::unexpected("Boolean", value)),
        }
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        match value {
            InputValue::Boolean(b) => Ok(InputValue::Boolean(b)),
            value => Err(ScalarError::unexpected("Boolean", &value)),
        }
    }
}
