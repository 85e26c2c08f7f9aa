use crate::{
    traits::{AsAnyEnum, EnumKind},
    types::{AnyEnum, EnumValue},
};
use std::fmt::{self, Display};

///
/// Value
///
/// Untyped column value as handed over by the host ORM or by form input.
/// Only `Enum` can be written to an enum column; `Null` and `Text` are what
/// comes back out of storage.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(AnyEnum),
    Int(i64),
    Null,
    Text(String),
}

impl Value {
    #[must_use]
    pub fn from_enum<V: AsAnyEnum + ?Sized>(value: &V) -> Self {
        Self::Enum(value.as_any_enum())
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<&AnyEnum> {
        match self {
            Self::Enum(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_enum(self) -> Option<AnyEnum> {
        match self {
            Self::Enum(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Empty form input: null, `false`, zero, `""` or `"0"`.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) | Self::Int(0) => true,
            Self::Text(s) => s.is_empty() || s == "0",
            Self::Bool(true) | Self::Enum(_) | Self::Int(_) => false,
        }
    }

    /// Short kind name used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Enum(_) => "enum",
            Self::Int(_) => "int",
            Self::Null => "null",
            Self::Text(_) => "text",
        }
    }

    /// Stringify a scalar the way loosely typed form input is read.
    /// Enum values have no raw text form and return `None`.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) | Self::Null => Some(String::new()),
            Self::Int(v) => Some(v.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Enum(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Enum(v) => match v.current_value() {
                Some(key) => write!(f, "{}({key})", v.path()),
                None => write!(f, "{}(unset)", v.path()),
            },
            Self::Int(v) => write!(f, "{v}"),
            Self::Null => f.write_str("null"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<AnyEnum> for Value {
    fn from(value: AnyEnum) -> Self {
        Self::Enum(value)
    }
}

impl<K: EnumKind> From<EnumValue<K>> for Value {
    fn from(value: EnumValue<K>) -> Self {
        Self::Enum(value.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::Status;

    #[test]
    fn empty_input_matches_form_semantics() {
        assert!(Value::Null.is_empty_input());
        assert!(Value::from("").is_empty_input());
        assert!(Value::from("0").is_empty_input());
        assert!(Value::Int(0).is_empty_input());
        assert!(Value::Bool(false).is_empty_input());
        assert!(!Value::from("status::active").is_empty_input());
        assert!(!Value::Int(3).is_empty_input());
    }

    #[test]
    fn enum_values_convert_through_any_enum() {
        let value = Value::from(EnumValue::from(Status::Active));

        assert_eq!(
            value.as_enum().and_then(AnyEnum::current_value),
            Some("active")
        );
        assert_eq!(value.to_string(), "test::Status(active)");
    }

    #[test]
    fn scalars_stringify_like_form_input() {
        assert_eq!(Value::Int(7).to_text().as_deref(), Some("7"));
        assert_eq!(Value::Bool(true).to_text().as_deref(), Some("1"));
        assert_eq!(Value::from(None::<String>), Value::Null);
    }
}
