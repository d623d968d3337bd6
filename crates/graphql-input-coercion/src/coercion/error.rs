use crate::{ValueKind, scalars::ScalarError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    #[error("missing variable: ${name}{path}")]
    MissingVariable { name: String, path: String },
    #[error("Found a {actual} value where we expected a '{name}' input object{path}")]
    MissingObject {
        name: String,
        actual: ValueKind,
        path: String,
    },
    #[error("Found a {actual} value where we expected a {expected}{path}")]
    MissingList {
        expected: String,
        actual: ValueKind,
        path: String,
    },
    #[error("Input object {input_object} does not have a field named '{name}'{path}")]
    UnknownInputField {
        input_object: String,
        name: String,
        path: String,
    },
    #[error("argument '{name}' cannot be null")]
    NullArgument { name: String },
    #[error("Input field '{name}' of {input_object} cannot be null{path}")]
    NullInputField {
        input_object: String,
        name: String,
        path: String,
    },
    #[error("Variable ${name} of type {ty} cannot be null")]
    NullVariable { name: String, ty: String },
    #[error("Found a null where we expected a {expected}{path}")]
    UnexpectedNull { expected: String, path: String },
    #[error(transparent)]
    Scalar(#[from] ScalarError),
    #[error("unknown type '{name}'{path}")]
    UnknownType { name: String, path: String },
}

/// Broad categories of [CoercionError].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ErrorKind {
    MissingVariable,
    TypeMismatch,
    NonNullViolation,
    ScalarParse,
    UnknownTypeShape,
}

impl CoercionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoercionError::MissingVariable { .. } => ErrorKind::MissingVariable,
            CoercionError::MissingObject { .. }
            | CoercionError::MissingList { .. }
            | CoercionError::UnknownInputField { .. } => ErrorKind::TypeMismatch,
            CoercionError::NullArgument { .. }
            | CoercionError::NullInputField { .. }
            | CoercionError::NullVariable { .. }
            | CoercionError::UnexpectedNull { .. } => ErrorKind::NonNullViolation,
            CoercionError::Scalar(_) => ErrorKind::ScalarParse,
            CoercionError::UnknownType { .. } => ErrorKind::UnknownTypeShape,
        }
    }
}
