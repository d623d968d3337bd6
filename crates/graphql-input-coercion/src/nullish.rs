use crate::InputValue;

/// Whether a value counts as missing when deciding to fall back on a default value.
///
/// `null` is nullish and so is a NaN float, which upstream number parsing uses to signal an
/// invalid number. Empty strings, zero, `false` and empty lists or objects are not.
pub fn is_nullish(value: &InputValue) -> bool {
    match value {
        InputValue::Null => true,
        InputValue::Float(f) => f.is_nan(),
        InputValue::Boolean(_)
        | InputValue::Int(_)
        | InputValue::String(_)
        | InputValue::List(_)
        | InputValue::Object(_) => false,
    }
}
