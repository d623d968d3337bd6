use indexmap::IndexMap;

use super::{
    error::CoercionError,
    path::{ValuePathSegment, value_path_to_string},
};
use crate::{
    CoercionConfig, InputObjectDefinition, InputType, InputValue, InputValueDefinition, TypeRef, TypeRegistry,
    Variables,
};

pub(super) fn coerce_variables(
    registry: &TypeRegistry,
    config: &CoercionConfig,
    definitions: &[InputValueDefinition],
    mut variables: Variables,
) -> Result<Variables, CoercionError> {
    let mut coerced = Variables::default();
    for definition in definitions {
        let mut ctx = VariableCoercionContext {
            registry,
            config,
            value_path: Vec::new(),
        };

        let value = match variables.remove(&definition.name) {
            Some(value) => ctx.coerce_value(value, &definition.ty)?,
            None => definition.default_or_null(),
        };

        if value.is_nullish() && definition.ty.is_non_null() {
            return Err(CoercionError::NullVariable {
                name: definition.name.clone(),
                ty: definition.ty.to_string(),
            });
        }

        // Declared variables are always bound, even when null, so that references to them
        // can fall back on defaults.
        coerced.insert(definition.name.clone(), value);
    }

    if !variables.is_empty() {
        tracing::trace!(
            "Dropping {} undeclared variable(s): {}",
            variables.len(),
            variables.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
        );
    }

    Ok(coerced)
}

/// Same rules as literals but for values coming from the request variables, going through
/// the `parse_value` side of scalars.
struct VariableCoercionContext<'a> {
    registry: &'a TypeRegistry,
    config: &'a CoercionConfig,
    value_path: Vec<ValuePathSegment>,
}

impl VariableCoercionContext<'_> {
    fn coerce_value(&mut self, value: InputValue, ty: &TypeRef) -> Result<InputValue, CoercionError> {
        let registry = self.registry;
        match registry.input_type(ty) {
            InputType::NonNull(inner) => {
                if value.is_nullish() {
                    return Err(CoercionError::UnexpectedNull {
                        expected: ty.to_string(),
                        path: self.path(),
                    });
                }
                self.coerce_value(value, inner)
            }
            _ if value.is_null() => Ok(InputValue::Null),
            InputType::List(inner) => self.coerce_list(value, ty, inner),
            InputType::InputObject(input_object) => self.coerce_input_object(input_object, value),
            InputType::Scalar(scalar) => Ok(scalar.parser.parse_value(value)?),
            InputType::Enum(r#enum) => Ok(r#enum.parse_value(value)?),
            InputType::Unknown(name) => Err(CoercionError::UnknownType {
                name: name.to_string(),
                path: self.path(),
            }),
        }
    }

    fn coerce_list(&mut self, value: InputValue, ty: &TypeRef, inner: &TypeRef) -> Result<InputValue, CoercionError> {
        let InputValue::List(items) = value else {
            if !self.config.list_coercion {
                return Err(CoercionError::MissingList {
                    expected: ty.to_string(),
                    actual: value.kind(),
                    path: self.path(),
                });
            }
            return Ok(InputValue::List(vec![self.coerce_value(value, inner)?]));
        };

        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            self.value_path.push(index.into());
            values.push(self.coerce_value(item, inner)?);
            self.value_path.pop();
        }
        Ok(InputValue::List(values))
    }

    fn coerce_input_object(
        &mut self,
        input_object: &InputObjectDefinition,
        value: InputValue,
    ) -> Result<InputValue, CoercionError> {
        let InputValue::Object(mut fields) = value else {
            return Err(CoercionError::MissingObject {
                name: input_object.name.clone(),
                actual: value.kind(),
                path: self.path(),
            });
        };

        let mut object = IndexMap::with_capacity(input_object.fields.len());
        for field in &input_object.fields {
            let value = match fields.swap_remove(&field.name) {
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

        if let Some(name) = fields.keys().next().filter(|_| self.config.reject_unknown_input_fields) {
            self.value_path.push(name.as_str().into());
            return Err(CoercionError::UnknownInputField {
                input_object: input_object.name.clone(),
                name: name.clone(),
                path: self.path(),
            });
        }

        Ok(InputValue::Object(object))
    }

    fn path(&self) -> String {
        value_path_to_string(&self.value_path)
    }
}
