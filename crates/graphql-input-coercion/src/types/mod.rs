//! The read-only view of the type system the coercion works against.

mod registry;
mod type_ref;

use std::{fmt, sync::Arc};

use indexmap::IndexMap;

pub use registry::*;
pub use type_ref::*;

use crate::{
    InputValue, ValueKind,
    scalars::{ScalarError, ScalarParser},
};

/// An argument, an input object field or a variable definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub name: String,
    pub ty: TypeRef,
    pub default_value: Option<InputValue>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<InputValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The declared default, `null` if there is none.
    pub fn default_or_null(&self) -> InputValue {
        self.default_value.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDefinition {
    pub name: String,
    /// In declaration order.
    pub fields: Vec<InputValueDefinition>,
}

impl InputObjectDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: InputValueDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&InputValueDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    pub name: String,
    /// Enum value name to the value resolvers receive.
    pub values: IndexMap<String, InputValue>,
}

impl EnumDefinition {
    /// Each value resolves to its own name.
    pub fn new<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|value| {
                    let value = value.into();
                    (value.clone(), InputValue::String(value))
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn parse_literal(&self, value: &async_graphql_value::Value) -> Result<InputValue, ScalarError> {
        match value {
            async_graphql_value::Value::Enum(name) => self.resolve(name),
            value => Err(ScalarError::new(format!(
                "Found a {} value where we expected a {} enum value",
                ValueKind::from(value),
                self.name
            ))),
        }
    }

    /// Variables carry enum values as strings.
    pub fn parse_value(&self, value: InputValue) -> Result<InputValue, ScalarError> {
        match value {
            InputValue::String(name) => self.resolve(&name),
            value => Err(ScalarError::new(format!(
                "Found a {} value where we expected a {} enum value",
                value.kind(),
                self.name
            ))),
        }
    }

    fn resolve(&self, name: &str) -> Result<InputValue, ScalarError> {
        self.values.get(name).cloned().ok_or_else(|| {
            ScalarError::new(format!(
                "Found an unknown enum value '{name}' for the enum {}",
                self.name
            ))
        })
    }
}

#[derive(Clone)]
pub struct ScalarDefinition {
    pub name: String,
    pub description: Option<String>,
    pub parser: Arc<dyn ScalarParser>,
}

impl ScalarDefinition {
    pub fn new(name: impl Into<String>, parser: impl ScalarParser + 'static) -> Self {
        Self {
            name: name.into(),
            description: None,
            parser: Arc::new(parser),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Debug for ScalarDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum TypeDefinition {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    InputObject(InputObjectDefinition),
    Object(String),
    Interface(String),
    Union(String),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(scalar) => &scalar.name,
            TypeDefinition::Enum(r#enum) => &r#enum.name,
            TypeDefinition::InputObject(input_object) => &input_object.name,
            TypeDefinition::Object(name) | TypeDefinition::Interface(name) | TypeDefinition::Union(name) => name,
        }
    }
}

impl From<ScalarDefinition> for TypeDefinition {
    fn from(scalar: ScalarDefinition) -> Self {
        TypeDefinition::Scalar(scalar)
    }
}

impl From<EnumDefinition> for TypeDefinition {
    fn from(r#enum: EnumDefinition) -> Self {
        TypeDefinition::Enum(r#enum)
    }
}

impl From<InputObjectDefinition> for TypeDefinition {
    fn from(input_object: InputObjectDefinition) -> Self {
        TypeDefinition::InputObject(input_object)
    }
}
