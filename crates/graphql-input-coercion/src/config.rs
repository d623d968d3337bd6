/// Knobs of the coercion, deserializable from the host's configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoercionConfig {
    /// A single value provided where a list is expected is treated as a list of one item.
    pub list_coercion: bool,
    /// Fail on input object fields that aren't declared instead of ignoring them.
    pub reject_unknown_input_fields: bool,
}

impl CoercionConfig {
    pub const DEFAULT: Self = Self {
        list_coercion: true,
        reject_unknown_input_fields: false,
    };
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
