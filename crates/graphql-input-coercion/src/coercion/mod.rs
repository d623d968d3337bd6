mod arguments;
mod error;
mod literal;
mod path;
mod variable;

use async_graphql_value::Value;

pub use arguments::ArgumentValues;
pub use error::*;

use crate::{CoercionConfig, InputValue, InputValueDefinition, TypeRef, TypeRegistry, Variables};

/// Entry point of the coercion for a given type system and configuration.
///
/// Nothing is cached or mutated, the same coercer can be shared across requests.
#[derive(Debug, Clone, Copy)]
pub struct Coercer<'a> {
    registry: &'a TypeRegistry,
    config: CoercionConfig,
}

impl<'a> Coercer<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            config: CoercionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CoercionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CoercionConfig {
        &self.config
    }

    /// Decodes a literal against its expected type. A missing literal decodes to `null`.
    pub fn decode_value(
        &self,
        value: Option<&Value>,
        ty: &TypeRef,
        variables: &Variables,
    ) -> Result<InputValue, CoercionError> {
        literal::LiteralCoercionContext {
            registry: self.registry,
            config: &self.config,
            variables,
            value_path: Vec::new(),
        }
        .coerce(value, ty)
    }

    /// Assembles the arguments of a field or directive from their definitions and the
    /// arguments written in the operation.
    ///
    /// Arguments that end up nullish, or whose value doesn't match their type, fall back on
    /// their default value and are left out if still nullish. Missing variables, non-null
    /// violations and unknown types fail the whole assembly.
    pub fn build_arguments<'v>(
        &self,
        definitions: &[InputValueDefinition],
        arguments: impl IntoIterator<Item = (&'v str, &'v Value)>,
        variables: &Variables,
    ) -> Result<ArgumentValues, CoercionError> {
        arguments::build_arguments(self.registry, &self.config, definitions, arguments, variables)
    }

    /// Coerces the raw variables of a request against the operation's variable definitions.
    pub fn coerce_variables(
        &self,
        definitions: &[InputValueDefinition],
        variables: Variables,
    ) -> Result<Variables, CoercionError> {
        variable::coerce_variables(self.registry, &self.config, definitions, variables)
    }
}

#[cfg(test)]
mod tests;
