mod any_enum;
mod entry;
mod enum_type;
mod enum_value;

pub use any_enum::AnyEnum;
pub use entry::EnumEntry;
pub use enum_type::EnumType;
pub use enum_value::EnumValue;

use crate::error::ErrorClass;
use thiserror::Error as ThisError;

///
/// EnumError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum EnumError {
    #[error("key '{key}' is not a valid value for '{path}'")]
    UnknownKey { path: &'static str, key: String },
}

impl EnumError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::UnknownKey { .. } => ErrorClass::InvalidInput,
        }
    }

    pub(crate) fn unknown_key(path: &'static str, key: &str) -> Self {
        Self::UnknownKey {
            path,
            key: key.to_string(),
        }
    }
}
