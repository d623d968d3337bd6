use async_graphql_value::Value;

use super::{ScalarError, ScalarParser};
use crate::InputValue;

pub struct StringScalar;

impl ScalarParser for StringScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        match value {
            Value::String(s) => Ok(InputValue::String(s.clone())),
            value => Err(ScalarError::unexpected("String", value)),
        }
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        match value {
            InputValue::String(s) => Ok(InputValue::String(s)),
            value => Err(ScalarError::unexpected("String", &value)),
        }
    }
}
