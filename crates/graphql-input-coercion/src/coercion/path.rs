use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ValuePathSegment {
    Field(String),
    Index(usize),
}

impl From<usize> for ValuePathSegment {
    fn from(index: usize) -> Self {
        ValuePathSegment::Index(index)
    }
}

impl From<&str> for ValuePathSegment {
    fn from(name: &str) -> Self {
        ValuePathSegment::Field(name.to_string())
    }
}

/// Error message suffix locating the value, empty at the root.
pub(super) fn value_path_to_string(value_path: &[ValuePathSegment]) -> String {
    if value_path.is_empty() {
        return String::new();
    }
    let mut out = String::from(" at path '");
    for segment in value_path {
        match segment {
            ValuePathSegment::Field(name) => {
                out.push('.');
                out.push_str(name);
            }
            ValuePathSegment::Index(index) => {
                write!(out, ".{index}").ok();
            }
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render() {
        assert_eq!(value_path_to_string(&[]), "");
        assert_eq!(
            value_path_to_string(&["filter".into(), "tags".into(), 2.into()]),
            " at path '.filter.tags.2'"
        );
    }
}
