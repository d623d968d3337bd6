use async_graphql_value::Value;

use super::{ScalarError, ScalarParser, json::parse_json_literal};
use crate::InputValue;

/// Either a single string or a list of strings, always stored as a list.
pub struct StringSetScalar;

fn ensure_list(value: InputValue) -> InputValue {
    match value {
        InputValue::Null | InputValue::List(_) => value,
        value => InputValue::List(vec![value]),
    }
}

impl ScalarParser for StringSetScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        parse_json_literal(value).map(ensure_list)
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        Ok(ensure_list(value))
    }

    fn serialize(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        Ok(match value {
            InputValue::List(mut items) if items.len() == 1 => items.pop().unwrap_or_default(),
            InputValue::List(items) => InputValue::List(items),
            _ => InputValue::List(Vec::new()),
        })
    }
}
