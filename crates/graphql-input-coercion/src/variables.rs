use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    ops::{Deref, DerefMut},
};

use serde::Serialize;

use crate::InputValue;

/// Variables of a request, already decoded into native values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, InputValue>);

impl Display for Variables {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            write!(f, "{}{name}: {value}", if i == 0 { "" } else { ", " })?;
        }
        f.write_str("}")
    }
}

impl Variables {
    /// Get the variables from an input value.
    ///
    /// If the value is not an object, then no variables will be returned.
    #[must_use]
    pub fn from_value(value: InputValue) -> Self {
        match value {
            InputValue::Object(obj) => Self(obj.into_iter().collect()),
            _ => Self::default(),
        }
    }

    /// Get the variables from the JSON `variables` entry of a request.
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Self {
        Self::from_value(value.into())
    }

    /// Get the variables as an input value.
    #[must_use]
    pub fn into_value(self) -> InputValue {
        InputValue::Object(self.0.into_iter().collect())
    }
}

impl FromIterator<(String, InputValue)> for Variables {
    fn from_iter<I: IntoIterator<Item = (String, InputValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Variables {
    type Item = (String, InputValue);
    type IntoIter = <BTreeMap<String, InputValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Variables> for InputValue {
    fn from(variables: Variables) -> Self {
        variables.into_value()
    }
}

impl Deref for Variables {
    type Target = BTreeMap<String, InputValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Variables {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
