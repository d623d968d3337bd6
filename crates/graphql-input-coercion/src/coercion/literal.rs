use async_graphql_value::Value;
use indexmap::IndexMap;

use super::{
    error::CoercionError,
    path::{ValuePathSegment, value_path_to_string},
};
use crate::{CoercionConfig, InputObjectDefinition, InputType, InputValue, TypeRef, TypeRegistry, Variables};

/// Turns literals written in an operation into [InputValue]s.
pub(super) struct LiteralCoercionContext<'a> {
    pub registry: &'a TypeRegistry,
    pub config: &'a CoercionConfig,
    pub variables: &'a Variables,
    pub value_path: Vec<ValuePathSegment>,
}

impl LiteralCoercionContext<'_> {
    /// A value that wasn't provided at all decodes to `null`, defaults are up to the caller.
    pub fn coerce(&mut self, value: Option<&Value>, ty: &TypeRef) -> Result<InputValue, CoercionError> {
        match value {
            Some(value) => self.coerce_value(value, ty),
            None => Ok(InputValue::Null),
        }
    }

    fn coerce_value(&mut self, value: &Value, ty: &TypeRef) -> Result<InputValue, CoercionError> {
        // Variables were validated against the operation beforehand, whatever the expected
        // type their value is used as is.
        match value {
            Value::Variable(name) => {
                return self
                    .variables
                    .get(name.as_str())
                    .cloned()
                    .ok_or_else(|| CoercionError::MissingVariable {
                        name: name.to_string(),
                        path: self.path(),
                    });
            }
            // Null short-circuits whatever the expected type, so scalars never see it and a null
            // input object is omitted by its parent. Non-null is checked by the holder.
            Value::Null => return Ok(InputValue::Null),
            _ => {}
        }

        let registry = self.registry;
        match registry.input_type(ty) {
            // Non-null is enforced by whoever holds the definition: argument or input field.
            InputType::NonNull(inner) => self.coerce_value(value, inner),
            InputType::List(inner) => self.coerce_list(value, ty, inner),
            InputType::InputObject(input_object) => self.coerce_input_object(input_object, value),
            InputType::Scalar(scalar) => Ok(scalar.parser.parse_literal(value)?),
            InputType::Enum(r#enum) => Ok(r#enum.parse_literal(value)?),
            InputType::Unknown(name) => Err(CoercionError::UnknownType {
                name: name.to_string(),
                path: self.path(),
            }),
        }
    }

    fn coerce_list(&mut self, value: &Value, ty: &TypeRef, inner: &TypeRef) -> Result<InputValue, CoercionError> {
        let Value::List(items) = value else {
            if !self.config.list_coercion {
                return Err(CoercionError::MissingList {
                    expected: ty.to_string(),
                    actual: value.into(),
                    path: self.path(),
                });
            }
            tracing::trace!("Coercing a single {} value into a list for {ty}", crate::ValueKind::from(value));
            return Ok(InputValue::List(vec![self.coerce_value(value, inner)?]));
        };

        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.value_path.push(index.into());
            values.push(self.coerce_value(item, inner)?);
            self.value_path.pop();
        }
        Ok(InputValue::List(values))
    }

    fn coerce_input_object(
        &mut self,
        input_object: &InputObjectDefinition,
        value: &Value,
    ) -> Result<InputValue, CoercionError> {
        let Value::Object(fields) = value else {
            return Err(CoercionError::MissingObject {
                name: input_object.name.clone(),
                actual: value.into(),
                path: self.path(),
            });
        };

        if let Some(name) = fields.keys().find(|name| input_object.field(name.as_str()).is_none()) {
            if self.config.reject_unknown_input_fields {
                self.value_path.push(name.as_str().into());
                return Err(CoercionError::UnknownInputField {
                    input_object: input_object.name.clone(),
                    name: name.to_string(),
                    path: self.path(),
                });
            }
            tracing::trace!("Ignoring unknown field '{name}' of input object {}", input_object.name);
        }

        // Declared order, whatever the order of the literal.
        let mut object = IndexMap::with_capacity(input_object.fields.len());
        for field in &input_object.fields {
            let value = match fields.get(field.name.as_str()) {
                Some(value) => {
                    self.value_path.push(field.name.as_str().into());
                    let value = self.coerce_value(value, &field.ty)?;
                    self.value_path.pop();
                    value
                }
                None => field.default_or_null(),
            };

            if !value.is_nullish() {
                object.insert(field.name.clone(), value);
            } else if field.ty.is_non_null() {
                return Err(CoercionError::NullInputField {
                    input_object: input_object.name.clone(),
                    name: field.name.clone(),
                    path: self.path(),
                });
            }
        }

        Ok(InputValue::Object(object))
    }

    fn path(&self) -> String {
        value_path_to_string(&self.value_path)
    }
}
