use async_graphql_value::Value;

use super::{ScalarError, ScalarParser};
use crate::{InputValue, ValueKind};

/// Arbitrary JSON, written inline as a GraphQL literal.
pub struct JSONScalar;

impl ScalarParser for JSONScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        parse_json_literal(value)
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        Ok(value)
    }
}

pub(super) fn parse_json_literal(value: &Value) -> Result<InputValue, ScalarError> {
    match value {
        Value::Null => Ok(InputValue::Null),
        Value::Boolean(b) => Ok(InputValue::Boolean(*b)),
        Value::Number(number) => Ok(number.clone().into()),
        Value::String(s) => Ok(InputValue::String(s.clone())),
        Value::List(items) => items.iter().map(parse_json_literal).collect::<Result<Vec<_>, _>>().map(InputValue::List),
        Value::Object(fields) => fields
            .iter()
            .map(|(name, value)| Ok((name.to_string(), parse_json_literal(value)?)))
            .collect(),
        Value::Variable(_) | Value::Enum(_) | Value::Binary(_) => Err(ScalarError::new(format!(
            "unknown kind {}",
            ValueKind::from(value)
        ))),
    }
}
