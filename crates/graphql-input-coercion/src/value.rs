use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A decoded input value, what resolvers end up receiving as arguments.
///
/// `Null` is used both for an explicit `null` and for a value that was never provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputValue {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<InputValue>),
    Object(IndexMap<String, InputValue>),
}

impl InputValue {
    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, InputValue::Null)
    }

    /// See [crate::is_nullish].
    pub fn is_nullish(&self) -> bool {
        crate::is_nullish(self)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InputValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            InputValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            InputValue::Int(i) => Some(*i as f64),
            InputValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[InputValue]> {
        match self {
            InputValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, InputValue>> {
        match self {
            InputValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Converts back into JSON. NaN and infinite floats have no JSON representation and
    /// become `null`.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            InputValue::Null => serde_json::Value::Null,
            InputValue::Boolean(b) => serde_json::Value::Bool(b),
            InputValue::Int(i) => serde_json::Value::Number(i.into()),
            InputValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            InputValue::String(s) => serde_json::Value::String(s),
            InputValue::List(items) => serde_json::Value::Array(items.into_iter().map(Self::into_json).collect()),
            InputValue::Object(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, value.into_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => InputValue::Null,
            serde_json::Value::Bool(b) => InputValue::Boolean(b),
            serde_json::Value::Number(n) => n.into(),
            serde_json::Value::String(s) => InputValue::String(s),
            serde_json::Value::Array(items) => InputValue::List(items.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(fields) => {
                InputValue::Object(fields.into_iter().map(|(name, value)| (name, value.into())).collect())
            }
        }
    }
}

impl From<serde_json::Number> for InputValue {
    fn from(number: serde_json::Number) -> Self {
        match number.as_i64() {
            Some(i) => InputValue::Int(i),
            // u64 above i64::MAX and actual floats
            None => InputValue::Float(number.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Boolean(value)
    }
}

impl From<i32> for InputValue {
    fn from(value: i32) -> Self {
        InputValue::Int(value.into())
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Int(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Float(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::String(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::String(value)
    }
}

impl<T: Into<InputValue>> From<Vec<T>> for InputValue {
    fn from(values: Vec<T>) -> Self {
        InputValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<(String, InputValue)> for InputValue {
    fn from_iter<I: IntoIterator<Item = (String, InputValue)>>(iter: I) -> Self {
        InputValue::Object(iter.into_iter().collect())
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Null => f.write_str("null"),
            InputValue::Boolean(b) => write!(f, "{b}"),
            InputValue::Int(i) => write!(f, "{i}"),
            InputValue::Float(n) => write!(f, "{n}"),
            InputValue::String(s) => write!(f, "{s:?}"),
            InputValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    write!(f, "{}{item}", if i == 0 { "" } else { ", " })?;
                }
                f.write_str("]")
            }
            InputValue::Object(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    write!(f, "{}{name}: {value}", if i == 0 { "" } else { ", " })?;
                }
                f.write_str("}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ValueKind {
    String,
    Integer,
    Enum,
    Float,
    Object,
    Boolean,
    List,
    Null,
    Binary,
    Variable,
}

impl From<&InputValue> for ValueKind {
    fn from(value: &InputValue) -> Self {
        match value {
            InputValue::Null => ValueKind::Null,
            InputValue::Boolean(_) => ValueKind::Boolean,
            InputValue::Int(_) => ValueKind::Integer,
            InputValue::Float(_) => ValueKind::Float,
            InputValue::String(_) => ValueKind::String,
            InputValue::List(_) => ValueKind::List,
            InputValue::Object(_) => ValueKind::Object,
        }
    }
}

impl From<&async_graphql_value::Value> for ValueKind {
    fn from(value: &async_graphql_value::Value) -> Self {
        use async_graphql_value::Value;

        match value {
            Value::Variable(_) => ValueKind::Variable,
            Value::Null => ValueKind::Null,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Binary(_) => ValueKind::Binary,
            Value::Enum(_) => ValueKind::Enum,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }
}
