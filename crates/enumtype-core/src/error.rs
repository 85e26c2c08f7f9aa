use crate::{
    codec::CodecError, config::ConfigError, registry::RegistryError, types::EnumError,
    validate::ValidateError,
};
use derive_more::Display;
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured error surfaced at the host boundaries (column type, validator
/// provider, config loading). Module errors convert into it via `From`.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }
}

///
/// ErrorClass
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum ErrorClass {
    #[display("conflict")]
    Conflict,
    #[display("invalid_input")]
    InvalidInput,
    #[display("invariant_violation")]
    InvariantViolation,
    #[display("not_found")]
    NotFound,
    #[display("unsupported")]
    Unsupported,
}

///
/// ErrorOrigin
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    #[display("codec")]
    Codec,
    #[display("column")]
    Column,
    #[display("config")]
    Config,
    #[display("enum")]
    Enum,
    #[display("registry")]
    Registry,
    #[display("validate")]
    Validate,
}

impl From<EnumError> for Error {
    fn from(err: EnumError) -> Self {
        Self::new(err.class(), ErrorOrigin::Enum, err.to_string())
    }
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        Self::new(err.class(), ErrorOrigin::Registry, err.to_string())
    }
}

impl From<CodecError> for Error {
    fn from(err: CodecError) -> Self {
        Self::new(err.class(), ErrorOrigin::Codec, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(err.class(), ErrorOrigin::Config, err.to_string())
    }
}

impl From<ValidateError> for Error {
    fn from(err: ValidateError) -> Self {
        Self::new(err.class(), ErrorOrigin::Validate, err.to_string())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_class_includes_origin_and_class() {
        let err = Error::new(
            ErrorClass::NotFound,
            ErrorOrigin::Registry,
            "enum type for prefix 'x' not found",
        );

        assert_eq!(
            err.display_with_class(),
            "registry:not_found: enum type for prefix 'x' not found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn registry_errors_keep_their_class() {
        let err: Error = RegistryError::UnregisteredPrefix {
            prefix: "bogus".to_string(),
        }
        .into();

        assert_eq!(err.class, ErrorClass::NotFound);
        assert_eq!(err.origin, ErrorOrigin::Registry);
    }
}
