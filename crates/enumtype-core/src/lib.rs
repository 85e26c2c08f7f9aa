//! Core runtime for enumtype: enum value objects, the prefix registry, the
//! string codec, and the column/validation boundaries the host ORM calls into.
#![warn(unreachable_pub)]

extern crate self as enumtype;

// public exports are one module level down
pub mod codec;
pub mod column;
pub mod config;
pub mod error;
pub mod obs;
pub mod registry;
pub mod traits;
pub mod types;
pub mod validate;
pub mod value;
pub mod visitor;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Separator placed between the prefix and the value in the encoded form.
pub const DEFAULT_SEPARATOR: &str = "::";

/// Name the column type and the validation provider are registered under.
pub const ENUM_TYPE_NAME: &str = "enum";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        codec::EnumCodec,
        registry::EnumRegistry,
        traits::{AsAnyEnum, EnumKind, Path},
        types::{AnyEnum, EnumEntry, EnumType, EnumValue},
        value::Value,
    };
}
