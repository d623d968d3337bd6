use async_graphql_value::Value;

use crate::{InputValue, ScalarDefinition, ValueKind};

mod bool_string;
pub use bool_string::BoolStringScalar;
mod boolean;
pub use boolean::BooleanScalar;
mod float;
pub use float::FloatScalar;
mod id;
pub use id::IDScalar;
mod int;
pub use int::IntScalar;
mod json;
pub use json::JSONScalar;
mod query_document;
pub use query_document::QueryDocumentScalar;
mod string;
pub use string::StringScalar;
mod string_set;
pub use string_set::StringSetScalar;

/// Input and output coercion of a scalar.
///
/// The decoder hands literals to `parse_literal` untouched, including lists and objects, so
/// scalars such as `JSON` can accept structured values.
pub trait ScalarParser: Send + Sync {
    /// Input coercion of a literal written in the operation.
    fn parse_literal(&self, value: &Value) -> Result<InputValue, ScalarError>;

    /// Input coercion of a value provided through variables.
    fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError>;

    /// Result coercion
    fn serialize(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ScalarError {
    message: String,
}

impl ScalarError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn unexpected(scalar: &str, actual: impl Into<ValueKind>) -> Self {
        Self::new(format!(
            "Found a {} value where we expected a {scalar} scalar",
            actual.into()
        ))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The scalars every GraphQL schema has.
pub fn builtin_scalars() -> impl Iterator<Item = ScalarDefinition> {
    [
        ScalarDefinition::new("Int", IntScalar),
        ScalarDefinition::new("Float", FloatScalar),
        ScalarDefinition::new("String", StringScalar),
        ScalarDefinition::new("Boolean", BooleanScalar),
        ScalarDefinition::new("ID", IDScalar),
    ]
    .into_iter()
}

fn can_coerce_to_int(float: f64) -> bool {
    float.floor() == float && float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX)
}
