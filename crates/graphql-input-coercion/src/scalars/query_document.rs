use std::sync::LazyLock;

use async_graphql_value::Value;
use regex::{NoExpand, Regex};

use super::{ScalarError, ScalarParser, json::parse_json_literal};
use crate::{InputValue, ValueKind};

// `$` isn't valid in GraphQL names nor in most stores' field names, so operators travel
// as `_eq`, `_in`, ... and are turned back into `$eq`, `$in`, ... on the way out.
static QUERY_OPERATOR_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\$").unwrap());
static STORED_OPERATOR_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^_").unwrap());

/// MongoDB style query document, either as an object literal or a JSON encoded string.
pub struct QueryDocumentScalar;

fn replace_prefixed_keys(value: InputValue, prefix: &Regex, replacement: &str) -> InputValue {
    match value {
        InputValue::Object(fields) => fields
            .into_iter()
            .map(|(key, value)| {
                (
                    prefix.replace(&key, NoExpand(replacement)).into_owned(),
                    replace_prefixed_keys(value, prefix, replacement),
                )
            })
            .collect(),
        InputValue::List(items) => InputValue::List(
            items
                .into_iter()
                .map(|value| replace_prefixed_keys(value, prefix, replacement))
                .collect(),
        ),
        value => value,
    }
}

impl ScalarParser for QueryDocumentScalar {
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError> {
        let document = match value {
            Value::String(s) => serde_json::from_str::<serde_json::Value>(s)
                .map(InputValue::from)
                .map_err(|err| ScalarError::new(format!("Invalid query document: {err}")))?,
            Value::Object(_) => parse_json_literal(value)?,
            value => return Err(ScalarError::new(format!("unknown kind {}", ValueKind::from(value)))),
        };
        Ok(replace_prefixed_keys(document, &QUERY_OPERATOR_PREFIX, "_"))
    }

    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        Ok(replace_prefixed_keys(value, &QUERY_OPERATOR_PREFIX, "_"))
    }

    fn serialize(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        Ok(replace_prefixed_keys(value, &STORED_OPERATOR_PREFIX, "$"))
    }
}
