use std::collections::HashMap;

use async_graphql_value::Value;
use indexmap::IndexMap;

use super::{
    error::{CoercionError, ErrorKind},
    literal::LiteralCoercionContext,
};
use crate::{CoercionConfig, InputValue, InputValueDefinition, TypeRegistry, Variables};

/// Coerced arguments of a field or directive, in the order of their definitions.
pub type ArgumentValues = IndexMap<String, InputValue>;

pub(super) fn build_arguments<'v>(
    registry: &TypeRegistry,
    config: &CoercionConfig,
    definitions: &[InputValueDefinition],
    arguments: impl IntoIterator<Item = (&'v str, &'v Value)>,
    variables: &Variables,
) -> Result<ArgumentValues, CoercionError> {
    // Last one wins for duplicates, rejecting them is the validation's job.
    let arguments = arguments.into_iter().collect::<HashMap<_, _>>();

    let mut values = ArgumentValues::with_capacity(definitions.len());
    for definition in definitions {
        let mut ctx = LiteralCoercionContext {
            registry,
            config,
            variables,
            value_path: Vec::new(),
        };

        let value = match ctx.coerce(arguments.get(definition.name.as_str()).copied(), &definition.ty) {
            Ok(value) if !value.is_nullish() => value,
            Ok(_) => definition.default_or_null(),
            // Missing variables, nested non-null violations and registry misconfigurations are terminal.
            Err(err) if !matches!(err.kind(), ErrorKind::TypeMismatch | ErrorKind::ScalarParse) => return Err(err),
            Err(err) => {
                tracing::debug!(
                    "Falling back to the default value of argument '{}': {err}",
                    definition.name
                );
                definition.default_or_null()
            }
        };

        if !value.is_nullish() {
            values.insert(definition.name.clone(), value);
        } else if definition.ty.is_non_null() {
            return Err(CoercionError::NullArgument {
                name: definition.name.clone(),
            });
        }
    }

    Ok(values)
}
