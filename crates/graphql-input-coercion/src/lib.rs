//! Type-directed coercion of GraphQL input values.
//!
//! Literals written in an operation are decoded into [InputValue]s guided by the type they're
//! expected to have, and field or directive arguments are assembled from their definitions
//! with default values and non-null checks applied. Parsing operations and building the type
//! system are left to the caller: literals are [async_graphql_value::Value]s and types are
//! looked up in a [TypeRegistry].

mod coercion;
mod config;
mod nullish;
pub mod scalars;
mod types;
mod value;
mod variables;

use async_graphql_value::Value;

pub use coercion::{ArgumentValues, Coercer, CoercionError, ErrorKind};
pub use config::CoercionConfig;
pub use nullish::is_nullish;
pub use scalars::{ScalarError, ScalarParser};
pub use types::{
    EnumDefinition, InputObjectDefinition, InputType, InputValueDefinition, InvalidTypeRef, ScalarDefinition,
    TypeDefinition, TypeRef, TypeRegistry,
};
pub use value::{InputValue, ValueKind};
pub use variables::Variables;

/// [Coercer::decode_value] with the default configuration.
pub fn decode_value(
    registry: &TypeRegistry,
    value: Option<&Value>,
    ty: &TypeRef,
    variables: &Variables,
) -> Result<InputValue, CoercionError> {
    Coercer::new(registry).decode_value(value, ty, variables)
}

/// [Coercer::build_arguments] with the default configuration.
pub fn build_arguments<'v>(
    registry: &TypeRegistry,
    definitions: &[InputValueDefinition],
    arguments: impl IntoIterator<Item = (&'v str, &'v Value)>,
    variables: &Variables,
) -> Result<ArgumentValues, CoercionError> {
    Coercer::new(registry).build_arguments(definitions, arguments, variables)
}

/// [Coercer::coerce_variables] with the default configuration.
pub fn coerce_variables(
    registry: &TypeRegistry,
    definitions: &[InputValueDefinition],
    variables: Variables,
) -> Result<Variables, CoercionError> {
    Coercer::new(registry).coerce_variables(definitions, variables)
}

#[cfg(test)]
pub(crate) fn literal(value: serde_json::Value) -> Value {
    async_graphql_value::ConstValue::from_json(value).unwrap().into_value()
}
