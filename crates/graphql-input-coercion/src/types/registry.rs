use indexmap::IndexMap;

use super::{EnumDefinition, InputObjectDefinition, ScalarDefinition, TypeDefinition, TypeRef};
use crate::scalars;

/// Named type definitions, looked up by the name at the core of a [TypeRef].
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDefinition>,
}

/// Shape of an expected type, what value decoding dispatches on.
#[derive(Debug, Clone, Copy)]
pub enum InputType<'a> {
    NonNull(&'a TypeRef),
    List(&'a TypeRef),
    InputObject(&'a InputObjectDefinition),
    Scalar(&'a ScalarDefinition),
    Enum(&'a EnumDefinition),
    /// Either not registered or registered as an output type.
    Unknown(&'a str),
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// A registry with the built-in scalars: `Int`, `Float`, `String`, `Boolean` and `ID`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for scalar in scalars::builtin_scalars() {
            registry.register(scalar);
        }
        registry
    }

    pub fn empty() -> Self {
        Self { types: IndexMap::new() }
    }

    /// Adds a definition, replacing any previous one with the same name.
    pub fn register(&mut self, definition: impl Into<TypeDefinition>) -> &mut Self {
        let definition = definition.into();
        self.types.insert(definition.name().to_string(), definition);
        self
    }

    #[must_use]
    pub fn with(mut self, definition: impl Into<TypeDefinition>) -> Self {
        self.register(definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn input_type<'a>(&'a self, ty: &'a TypeRef) -> InputType<'a> {
        match ty {
            TypeRef::NonNull(inner) => InputType::NonNull(inner),
            TypeRef::List(inner) => InputType::List(inner),
            TypeRef::Named(name) => match self.types.get(name) {
                Some(TypeDefinition::Scalar(scalar)) => InputType::Scalar(scalar),
                Some(TypeDefinition::Enum(r#enum)) => InputType::Enum(r#enum),
                Some(TypeDefinition::InputObject(input_object)) => InputType::InputObject(input_object),
                Some(TypeDefinition::Object(_) | TypeDefinition::Interface(_) | TypeDefinition::Union(_)) | None => {
                    InputType::Unknown(name)
                }
            },
        }
    }
}
