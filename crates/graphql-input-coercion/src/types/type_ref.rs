use std::{fmt, str::FromStr};

/// A reference to a named type with its list and non-null wrappers, `[Int!]!` for example.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid type reference '{0}'")]
pub struct InvalidTypeRef(pub String);

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    #[must_use]
    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// Wraps the type as non-null. Already non-null types are returned as is, `T!!` doesn't exist.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            TypeRef::NonNull(_) => self,
            ty => TypeRef::NonNull(Box::new(ty)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
            TypeRef::Named(_) => false,
        }
    }

    /// Name of the innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = InvalidTypeRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s).ok_or_else(|| InvalidTypeRef(s.to_string()))
    }
}

fn parse_type(s: &str) -> Option<TypeRef> {
    let s = s.trim();
    match s.strip_suffix('!') {
        Some(inner) => parse_nullable_type(inner).map(|ty| TypeRef::NonNull(Box::new(ty))),
        None => parse_nullable_type(s),
    }
}

fn parse_nullable_type(s: &str) -> Option<TypeRef> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('[') {
        let inner = inner.strip_suffix(']')?;
        return parse_type(inner).map(|ty| TypeRef::List(Box::new(ty)));
    }

    is_name(s).then(|| TypeRef::Named(s.to_string()))
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
